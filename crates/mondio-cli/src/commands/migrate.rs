//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use mondio_core::error::{AppError, ErrorKind};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show applied migrations
    Status,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let db = super::connect_db(&config).await?;

    let result = run_command(args, &db).await;
    db.close().await;
    result
}

async fn run_command(
    args: &MigrateArgs,
    db: &mondio_database::DatabasePool,
) -> Result<(), AppError> {
    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            mondio_database::migration::run_migrations(db.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let rows: Vec<(i64, String)> = sqlx::query_as(
                "SELECT version, description FROM _sqlx_migrations ORDER BY version",
            )
            .fetch_all(db.pool())
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read migration status", e)
            })?;

            if rows.is_empty() {
                println!("No migrations applied yet.");
            } else {
                for (version, description) in rows {
                    println!("  {} - {}", version, description);
                }
            }
        }
    }

    Ok(())
}
