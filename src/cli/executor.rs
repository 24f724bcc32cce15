//! Command dispatch after parsing and configuration loading

use super::handlers::{MigrateCommandHandler, ServeCommandHandler};
use super::parser::{Cli, Commands};
use crate::config::Settings;
use crate::error::AppResult;

/// Rollbacks larger than this are logged as a warning before they run
const LARGE_ROLLBACK: u32 = 10;

/// Execute the parsed command with merged settings.
///
/// `serve` (explicit or implied) runs until the server shuts down.
pub async fn execute_command(cli: &Cli, settings: Settings) -> AppResult<()> {
    match cli.subcommand() {
        Commands::Serve { dry_run, .. } => ServeCommandHandler::new(settings).execute(dry_run).await,
        Commands::Migrate { dry_run, rollback } => {
            if let Some(steps) = rollback
                && steps > LARGE_ROLLBACK
            {
                tracing::warn!(steps, "Rolling back a large number of migrations");
            }
            MigrateCommandHandler::new(settings)
                .execute(dry_run, rollback)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn create_valid_config() -> Settings {
        let mut config = Settings::default();
        config.database.url = "postgres://localhost/test".to_string();
        config
    }

    #[tokio::test]
    async fn test_execute_serve_dry_run() {
        let cli = Cli::try_parse_from(["atlas-rs", "serve", "--dry-run"]).unwrap();
        assert!(execute_command(&cli, create_valid_config()).await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_serve_dry_run_reports_invalid_config() {
        let cli = Cli::try_parse_from(["atlas-rs", "serve", "--dry-run"]).unwrap();
        let mut config = create_valid_config();
        config.logger.level = "loud".to_string();

        assert!(execute_command(&cli, config).await.is_err());
    }

    #[tokio::test]
    async fn test_execute_migrate_validates_database_first() {
        let cli = Cli::try_parse_from(["atlas-rs", "migrate", "--dry-run"]).unwrap();
        assert!(execute_command(&cli, Settings::default()).await.is_err());
    }
}
