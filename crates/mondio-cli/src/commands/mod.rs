//! CLI command definitions and dispatch.

pub mod codes;
pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use mondio_core::error::AppError;

/// Mondio — dog-training progress tracker
#[derive(Debug, Parser)]
#[command(name = "mondio", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/<env>.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Mondio server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Activation code management
    Codes(codes::CodesArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::Codes(args) => codes::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for the given environment
pub fn load_config(env: &str) -> Result<mondio_core::config::AppConfig, AppError> {
    mondio_core::config::AppConfig::load(env)
}

/// Helper: create a scoped database pool from config
pub async fn connect_db(
    config: &mondio_core::config::AppConfig,
) -> Result<mondio_database::DatabasePool, AppError> {
    mondio_database::connection::DatabasePool::connect(&config.database).await
}
