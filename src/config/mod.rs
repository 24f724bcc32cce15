//! Configuration management for atlas-rs
//!
//! Settings are layered from TOML files in a configuration directory and
//! `ATLAS_*` environment variables. See [`ConfigLoader`] for the precedence
//! rules.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{
    ApplicationConfig, ConsoleSettings, DatabaseConfig, FileSettings, LoggerSettings, ServerConfig,
    Settings,
};
