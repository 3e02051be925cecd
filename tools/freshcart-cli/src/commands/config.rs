//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let store = &ctx.config.store;
    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("currency", store.currency.code());
    ctx.output.kv("delivery_fee", &store.delivery_fee().display());
    ctx.output.kv("clear_policy", store.clear_policy.as_str());
    ctx.output.kv(
        "free_delivery_threshold",
        &store.free_delivery_threshold().display(),
    );

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in)"),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
