//! Merges CLI overrides into file-based configuration
//!
//! Precedence, lowest first: configuration files, `ATLAS_*` variables,
//! global flags (`--verbose`, `--quiet`), then subcommand flags.

use std::path::Path;

use super::parser::{Cli, Commands};
use crate::config::{ConfigError, ConfigLoader, Settings};

pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Load the base configuration the way `cli` asks for it.
    ///
    /// `--config` selects a single file; otherwise the layered loader reads
    /// `ATLAS_CONFIG_DIR` / `ATLAS_CONFIG_FILE`. `--env` overrides `ATLAS_APP_ENV`.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let loader = match cli.config.as_deref() {
            Some(path) => Self::file_loader(path)?,
            None => ConfigLoader::new()?,
        };
        let loader = match cli.env {
            Some(env) => loader.with_environment(env.into()),
            None => loader,
        };

        Ok(Self::new(loader.load()?))
    }

    fn file_loader(path: &Path) -> Result<ConfigLoader, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::validation(
                "config_file".to_string(),
                format!("Configuration path is not a readable file: '{}'", path.display()),
            ));
        }
        Ok(ConfigLoader::from_file(path))
    }

    /// Apply CLI overrides to a copy of the base configuration and validate it.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn config(&self) -> &Settings {
        &self.base_config
    }
}
