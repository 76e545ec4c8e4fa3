//! Start the Mondio server.

use clap::Args;

use mondio_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Run database migrations on startup
    #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
    pub auto_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting Mondio server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    let pool = super::connect_db(&config).await?.into_pool();

    if args.auto_migrate {
        println!("Running database migrations...");
        mondio_database::migration::run_migrations(&pool).await?;
        println!("  Migrations applied successfully.");
    }

    mondio_api::app::run_server(config, pool).await
}
