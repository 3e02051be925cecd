//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use freshcart_commerce::catalog::Catalog;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["freshcart.toml", ".freshcart.toml", "freshcart.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Config file the settings came from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match find_config_file(&cwd) {
                Some(path) => (CliConfig::load(&path.to_string_lossy())?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Load the product catalog named by the config, or the built-in one.
    pub fn catalog(&self) -> Result<Catalog> {
        let currency = self.config.store.currency;
        match &self.config.catalog.path {
            Some(path) => {
                let path = self.resolve_path(path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json, currency)
                    .with_context(|| format!("Failed to load catalog: {}", path.display()))
            }
            None => Catalog::fixture(currency).context("Failed to load built-in catalog"),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
