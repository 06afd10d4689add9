//! CLI administration tool for golinks.
//!
//! Manages links directly in the SQLite database, without going through the
//! HTTP admin API. The same validation and conflict rules apply.
//!
//! # Usage
//!
//! ```bash
//! # Add a link
//! cargo run --bin golinks-admin -- link add wiki https://wiki.example.com
//!
//! # List all links
//! cargo run --bin golinks-admin -- link list
//!
//! # Remove a link (asks for confirmation unless -y)
//! cargo run --bin golinks-admin -- link remove wiki
//!
//! # Check the database
//! cargo run --bin golinks-admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DB_PATH`: SQLite database file (default: `./data/links.db`), overridden by `--db`

use golinks::application::services::LinkService;
use golinks::config::DEFAULT_DB_PATH;
use golinks::infrastructure::database;
use golinks::infrastructure::persistence::SqliteLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;
use std::time::Duration;

type Service = LinkService<SqliteLinkRepository>;

/// CLI tool for managing golinks.
#[derive(Parser)]
#[command(name = "golinks-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database file (defaults to $DB_PATH or ./data/links.db)
    #[arg(long, global = true)]
    db: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Add a new link
    Add {
        /// Slug, e.g. "wiki" for go/wiki
        slug: String,

        /// Destination URL (http:// or https://)
        url: String,
    },

    /// Remove a link
    Remove {
        slug: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all links, newest first
    List,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Open the database, apply migrations and report the link count
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let db_path = cli
        .db
        .or_else(|| std::env::var("DB_PATH").ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

    let pool = database::connect(&db_path, 1, Duration::from_secs(5)).await?;
    database::run_migrations(&pool)
        .await
        .context("Failed to apply database migrations")?;

    let service = LinkService::new(Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone()))));

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service, &db_path).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &Service) -> Result<()> {
    match action {
        LinkAction::Add { slug, url } => add_link(service, &slug, &url).await,
        LinkAction::Remove { slug, yes } => remove_link(service, &slug, yes).await,
        LinkAction::List => list_links(service).await,
    }
}

async fn add_link(service: &Service, slug: &str, url: &str) -> Result<()> {
    let link = service
        .add(slug, url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add link: {}", e))?;

    println!(
        "{} go/{} {} {}",
        "✓ Added".green().bold(),
        link.slug.cyan(),
        "→".bright_black(),
        link.url
    );

    Ok(())
}

/// Removes a link, asking for confirmation (default: No) unless `skip_confirm`.
async fn remove_link(service: &Service, slug: &str, skip_confirm: bool) -> Result<()> {
    let link = service
        .resolve(slug.trim())
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", e, slug.trim()))?;

    println!("  Slug: {}", link.slug.cyan());
    println!("  URL:  {}", link.url);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let removed = service
        .remove(&link.slug)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove link: {}", e))?;

    println!("{} go/{}", "✓ Removed".green().bold(), removed.cyan());

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
///   Slug                 Created           URL
///   ──────────────────────────────────────────────────────────────
///   wiki                 2026-01-15 10:30  https://wiki.example.com
/// ```
async fn list_links(service: &Service) -> Result<()> {
    let links = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links yet".yellow());
        println!();
        println!(
            "  Add one with: {} link add <slug> <url>",
            "golinks-admin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<20} {:<17} {}",
        "Slug".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for link in &links {
        println!(
            "  {:<20} {:<17} {}",
            link.slug.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &Service, db_path: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            let count = service
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            println!("{}", "✓ Database OK".green().bold());
            println!("  Path:  {}", db_path.bright_white());
            println!("  Links: {}", count.to_string().bright_green().bold());
        }
    }

    Ok(())
}
