//! CLI administration tool for url-shortener.
//!
//! Runs batch URL deletions and database checks directly against PostgreSQL,
//! without going through the HTTP boundary.
//!
//! # Usage
//!
//! ```bash
//! # Mark a user's URLs as deleted
//! cargo run --bin admin -- urls delete --user 42 abc12 xyz99
//!
//! # Same, with 32 worker lanes and no confirmation prompt
//! cargo run --bin admin -- urls delete --user 42 --workers 32 --yes abc12 xyz99
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` (required)
//! - `DELETE_WORKERS`, `RUST_LOG`, `LOG_FORMAT` and pool settings, see `config`
//!
//! Pressing Ctrl-C during a deletion cancels it; nothing is applied.

use url_shortener::application::services::DeletionService;
use url_shortener::config::{self, Config};
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::{self, PgUrlRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing url-shortener.
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
    /// Manage short URLs
    Urls {
        #[command(subcommand)]
        action: UrlsAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum UrlsAction {
    /// Mark URLs owned by a user as deleted
    Delete {
        /// Owner of the URLs
        #[arg(short, long)]
        user: String,

        /// Worker lanes (defaults to DELETE_WORKERS)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,

        /// Short URL identifiers
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    if !config.has_database() {
        anyhow::bail!("DATABASE_URL (or DB_USER and friends) must be set");
    }

    let pool = persistence::connect(&config)
        .await
        .context("Failed to connect to database")?;
    let repository: Arc<dyn UrlRepository> = Arc::new(PgUrlRepository::new(Arc::new(pool)));

    match cli.command {
        Commands::Urls { action } => handle_urls_action(action, repository, &config).await?,
        Commands::Db { action } => handle_db_action(action, repository).await?,
    }

    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Dispatches short URL commands.
async fn handle_urls_action(
    action: UrlsAction,
    repository: Arc<dyn UrlRepository>,
    config: &Config,
) -> Result<()> {
    match action {
        UrlsAction::Delete {
            user,
            workers,
            yes,
            ids,
        } => {
            let workers = workers.unwrap_or(config.delete_workers);
            let service = DeletionService::new(repository).with_workers(workers);
            delete_urls(&service, user, ids, yes).await?;
        }
    }

    Ok(())
}

async fn delete_urls(
    service: &DeletionService<dyn UrlRepository>,
    user: String,
    ids: Vec<String>,
    yes: bool,
) -> Result<()> {
    println!(
        "{} {} URL(s) of user {}",
        "🗑️  Deleting".bright_blue().bold(),
        ids.len().to_string().bright_white(),
        user.bright_white()
    );

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Continue?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let started = Instant::now();
    service
        .delete_urls(&cancel, &user, ids)
        .await
        .context("Failed to delete URLs")?;

    if cancel.is_cancelled() {
        println!("{}", "⚠️  Deletion interrupted".yellow().bold());
    } else {
        println!(
            "{} in {:?} ({} workers)",
            "✅ URLs marked as deleted".green().bold(),
            started.elapsed(),
            service.workers()
        );
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, repository: Arc<dyn UrlRepository>) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            repository.ping().await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
