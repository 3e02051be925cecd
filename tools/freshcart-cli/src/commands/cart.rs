//! Cart script replay.

use anyhow::Result;
use freshcart_commerce::cart::CartStore;
use serde_json::json;

use super::{CartArgs, CartCommand};
use crate::context::Context;
use crate::script::{load_script, replay, ReplayReport};

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command {
        CartCommand::Run { script } => run_script(&script, ctx),
    }
}

fn run_script(script: &str, ctx: &Context) -> Result<()> {
    let (store, report) = replay_script(script, ctx)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "cart": store.state(),
            "item_count": store.total_item_count(),
            "nutrition": store.nutrition_totals(),
            "skipped": report.skipped,
        }));
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output.cart(store.state());
    ctx.output.success(&format!("Replayed {} step(s)", report.applied));

    Ok(())
}

/// Load `script` and replay it against an empty cart in the configured currency.
pub(crate) fn replay_script(script: &str, ctx: &Context) -> Result<(CartStore, ReplayReport)> {
    let path = ctx.resolve_path(script);
    let steps = load_script(&path)?;
    ctx.output
        .debug(&format!("Loaded {} step(s) from {}", steps.len(), path.display()));

    let catalog = ctx.catalog()?;
    let mut store = CartStore::with_currency(ctx.config.store.currency);
    let report = replay(&steps, &catalog, &mut store)?;

    for step in &report.skipped {
        ctx.output.warn(&format!("Skipped '{}': product not in cart", step));
    }

    Ok((store, report))
}
