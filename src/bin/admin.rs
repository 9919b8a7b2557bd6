//! CLI administration tool for slug-shortener.
//!
//! Manages URL mappings, shows statistics and checks the database without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- url create https://example.com/page
//!
//! # Look up a mapping
//! cargo run --bin admin -- url get https://example.com/page
//!
//! # Re-point a mapping
//! cargo run --bin admin -- url update https://example.com/page https://example.com/new
//!
//! # Delete a mapping
//! cargo run --bin admin -- url delete https://example.com/new
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`slug_shortener::config`].

use slug_shortener::application::services::{CreationStatus, ShortenerService};
use slug_shortener::config::{self, Config};
use slug_shortener::domain::entities::UrlRecord;
use slug_shortener::infrastructure::persistence::SqliteUrlRepository;
use slug_shortener::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing slug-shortener.
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
    /// Manage URL mappings
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// URL management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Shorten a long URL
    Create {
        /// Long URL to shorten
        url: String,
    },

    /// Show the mapping for a long URL
    Get {
        /// Long URL to look up
        url: String,
    },

    /// Point a mapping at a new long URL
    Update {
        /// Current long URL
        url: String,

        /// Replacement long URL
        new_url: String,
    },

    /// Delete the mapping for a long URL
    Delete {
        /// Long URL whose mapping is removed
        url: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &config, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches URL management commands through the shortener service.
async fn handle_url_action(action: UrlAction, config: &Config, pool: &SqlitePool) -> Result<()> {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let service = ShortenerService::new(repository, config.domain.clone(), config.slug_length);

    match action {
        UrlAction::Create { url } => create_url(&service, &url).await?,
        UrlAction::Get { url } => get_url(&service, &url).await?,
        UrlAction::Update { url, new_url } => update_url(&service, &url, &new_url).await?,
        UrlAction::Delete { url, yes } => delete_url(&service, &url, yes).await?,
    }

    Ok(())
}

async fn create_url(service: &ShortenerService, url: &str) -> Result<()> {
    println!("{}", "🔗 Shorten URL".bright_blue().bold());
    println!();

    let (record, status) = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    match status {
        CreationStatus::NewlyCreated => {
            println!("{}", "✅ Short URL created".green().bold());
        }
        CreationStatus::AlreadyExists => {
            println!("{}", "⚠️  URL was already shortened".yellow());
        }
    }
    println!();
    print_record(&record);

    Ok(())
}

async fn get_url(service: &ShortenerService, url: &str) -> Result<()> {
    let record = service
        .get_by_long_url(url)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    print_record(&record);
    Ok(())
}

async fn update_url(service: &ShortenerService, url: &str, new_url: &str) -> Result<()> {
    println!("{}", "✏️  Update URL".bright_blue().bold());
    println!();

    let record = service
        .update(url, new_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update URL: {}", e))?;

    println!("{}", "✅ Mapping updated".green().bold());
    println!();
    print_record(&record);

    Ok(())
}

/// Deletes a mapping after showing it and asking for confirmation.
///
/// The slug stays reserved forever; a later shorten of the same long URL
/// gets a new slug.
async fn delete_url(service: &ShortenerService, url: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete URL".bright_blue().bold());
    println!();

    let record = service
        .get_by_long_url(url)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    print_record(&record);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this mapping?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete URL: {}", e))?;

    println!();
    println!("{}", "✅ Mapping deleted".green().bold());
    println!();

    Ok(())
}

fn print_record(record: &UrlRecord) {
    println!("  Slug:      {}", record.slug.cyan());
    println!("  Short URL: {}", record.short_url.bright_yellow().bold());
    println!("  Long URL:  {}", record.long_url.bright_white());
    println!(
        "  Created:   {}",
        record
            .created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!(
        "  Updated:   {}",
        record
            .updated_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();
}

/// Displays mapping counts.
///
/// Shows:
/// - Live mappings
/// - Deleted mappings (their slugs are never reissued)
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let live_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE deleted_at IS NULL")
        .fetch_one(pool)
        .await?;

    let deleted_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM urls WHERE deleted_at IS NOT NULL")
            .fetch_one(pool)
            .await?;

    println!(
        "  Live URLs:    {}",
        live_count.to_string().bright_green().bold()
    );
    println!(
        "  Deleted URLs: {}",
        deleted_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
