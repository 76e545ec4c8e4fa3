//! Activation code management commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use mondio_core::error::AppError;
use mondio_database::repositories::ActivationCodeRepository;
use mondio_database::DatabasePool;
use mondio_service::activation::generator::CodeGenerator;
use mondio_service::activation::CodeOutcome;

/// Batches above this size require an interactive confirmation.
const CONFIRM_THRESHOLD: i64 = 100;

/// Arguments for code commands
#[derive(Debug, Args)]
pub struct CodesArgs {
    /// Codes subcommand
    #[command(subcommand)]
    pub command: CodesCommand,
}

/// Code subcommands
#[derive(Debug, Subcommand)]
pub enum CodesCommand {
    /// Generate activation codes and store them in the database
    Generate {
        /// Number of codes to generate
        #[arg(default_value = "1")]
        count: String,
        /// Skip the confirmation prompt for large batches
        #[arg(long)]
        yes: bool,
    },
    /// List all activation codes
    List,
    /// Delete an unused activation code
    Revoke {
        /// The code value to delete
        code: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Code display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CodeRow {
    /// Code value
    code: String,
    /// Used state
    used: bool,
    /// Created at
    created_at: String,
}

/// Execute code commands
pub async fn execute(args: &CodesArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let db = super::connect_db(&config).await?;

    // The pool is closed on every exit path, success or error.
    let result = run_command(args, &db, format).await;
    db.close().await;
    result
}

async fn run_command(
    args: &CodesArgs,
    db: &DatabasePool,
    format: OutputFormat,
) -> Result<(), AppError> {
    let code_repo = ActivationCodeRepository::new(db.pool().clone());

    match &args.command {
        CodesCommand::Generate { count, yes } => generate(&code_repo, count, *yes).await,
        CodesCommand::List => {
            let codes = code_repo.find_all().await?;
            let rows: Vec<CodeRow> = codes
                .iter()
                .map(|c| CodeRow {
                    code: c.code.clone(),
                    used: c.used,
                    created_at: c.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();
            output::print_list(&rows, format);
            Ok(())
        }
        CodesCommand::Revoke { code, yes } => revoke(&code_repo, code, *yes).await,
    }
}

async fn generate(
    code_repo: &ActivationCodeRepository,
    count: &str,
    yes: bool,
) -> Result<(), AppError> {
    let count = match count.parse::<i64>() {
        Ok(n) if n >= 1 => n,
        _ => {
            output::print_error("The number of codes must be a positive number");
            println!();
            println!("Usage:   mondio-cli codes generate [COUNT]");
            println!("Example: mondio-cli codes generate 5");
            return Err(AppError::validation("Invalid count argument"));
        }
    };

    if count > CONFIRM_THRESHOLD && !yes {
        output::print_warning(&format!(
            "You asked to generate more than {CONFIRM_THRESHOLD} codes."
        ));
        let confirmed = dialoguer::Confirm::new()
            .with_prompt("Are you sure?")
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirmed {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    println!("Generating {count} activation codes...");

    let generator = CodeGenerator::new();
    let outcomes = generator.generate_batch(code_repo, count as usize).await;

    print_report(&outcomes);
    Ok(())
}

/// Print the generation report: one line per index, then a summary count.
fn print_report(outcomes: &[CodeOutcome]) {
    println!();
    for outcome in outcomes {
        match &outcome.result {
            Ok(code) => println!("  {:>4}. {}", outcome.index + 1, code.code),
            Err(message) => {
                output::print_error(&format!("Code {}: {}", outcome.index + 1, message))
            }
        }
    }

    let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
    println!();
    output::print_success(&format!(
        "Generated {succeeded} of {} codes.",
        outcomes.len()
    ));
}

async fn revoke(
    code_repo: &ActivationCodeRepository,
    code: &str,
    yes: bool,
) -> Result<(), AppError> {
    let record = code_repo
        .find_by_code(code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Code '{code}' not found")))?;

    if record.used {
        return Err(AppError::conflict("A used code cannot be revoked"));
    }

    if !yes {
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(format!("Delete activation code '{code}'?"))
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

        if !confirmed {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    code_repo.delete(record.id).await?;
    output::print_success(&format!("Code '{code}' deleted"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_parsing() {
        assert!(matches!("5".parse::<i64>(), Ok(5)));
        assert!("abc".parse::<i64>().is_err());
        assert!("".parse::<i64>().is_err());
        // Non-positive values are rejected by the explicit range check.
        assert!(matches!("0".parse::<i64>(), Ok(n) if n < 1));
        assert!(matches!("-3".parse::<i64>(), Ok(n) if n < 1));
    }
}
