//! Migrate command handler
//!
//! Applies, previews or reverts the embedded schema migrations.

use crate::config::Settings;
use crate::db::{pending_migrations, revert_migrations, run_pending_migrations};
use crate::error::AppResult;

pub struct MigrateCommandHandler {
    config: Settings,
}

impl MigrateCommandHandler {
    pub fn new(config: Settings) -> Self {
        Self { config }
    }

    /// Execute the migrate command
    ///
    /// * `dry_run` - list pending migrations without applying them
    /// * `rollback` - revert this many of the most recent migrations
    ///
    /// # Errors
    /// - Invalid database configuration
    /// - Connection or migration failures
    pub async fn execute(&self, dry_run: bool, rollback: Option<u32>) -> AppResult<()> {
        self.config.database.validate()?;
        let url = &self.config.database.url;

        if dry_run {
            let pending = pending_migrations(url).await?;
            if pending.is_empty() {
                println!("✓ No pending migrations found - database is up to date");
            } else {
                println!("Found {} pending migration(s):", pending.len());
                for name in &pending {
                    println!("  - {}", name);
                }
                println!("\nRun without --dry-run to apply these migrations");
            }
            return Ok(());
        }

        if let Some(steps) = rollback {
            let reverted = revert_migrations(url, steps).await?;
            tracing::info!(count = reverted.len(), "Migrations reverted");
            println!("✓ Rolled back {} migration(s):", reverted.len());
            for version in &reverted {
                println!("  - {}", version);
            }
            return Ok(());
        }

        let applied = run_pending_migrations(url).await?;
        tracing::info!(count = applied.len(), "Migrations applied");
        if applied.is_empty() {
            println!("✓ No migrations to apply - database is already up to date");
        } else {
            println!("✓ Applied {} migration(s):", applied.len());
            for version in &applied {
                println!("  - {}", version);
            }
        }

        Ok(())
    }
}
