//! CLI administration tool for noteful-api.
//!
//! Database maintenance without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply schema migrations
//! cargo run --bin admin -- db migrate
//!
//! # Wipe all folders and notes and restart id sequences
//! cargo run --bin admin -- db reset --yes
//!
//! # Row counts
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or the `DB_*` components): PostgreSQL connection
//! - `DB_*` pool settings as for the server

use noteful_api::config::Config;
use noteful_api::server::{MIGRATOR, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;

/// CLI tool for managing noteful-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show folder and note counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,

    /// Delete every folder and note and restart id sequences
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints row counts for both tables.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let folders_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folder")
        .fetch_one(pool)
        .await?;

    let notes_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM note")
        .fetch_one(pool)
        .await?;

    println!(
        "  Folders: {}",
        folders_count.to_string().bright_green().bold()
    );
    println!("  Notes:   {}", notes_count.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database maintenance commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            MIGRATOR
                .run(pool)
                .await
                .context("Failed to apply migrations")?;

            println!("{}", "Migrations applied".green().bold());
        }
        DbAction::Reset { yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete ALL folders and notes?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "Cancelled".red());
                    return Ok(());
                }
            }

            sqlx::query("TRUNCATE note, folder RESTART IDENTITY CASCADE")
                .execute(pool)
                .await?;

            println!("{}", "All folders and notes deleted".green().bold());
        }
    }

    Ok(())
}
