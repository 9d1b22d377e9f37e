//! `planner-admin`: migrate, seed and inspect a planner database.

mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planner::{Migrator, Planner, PlannerConfig, seed_default_users};
use planner_db::redact_credentials_in_dsn;

/// Planner admin - schema and demo data management
#[derive(Parser)]
#[command(name = "planner-admin")]
#[command(about = "Planner admin - schema and demo data management")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Database DSN override (takes precedence over config and environment)
    #[arg(long)]
    dsn: Option<String>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,
    /// Apply migrations, then insert the default demo users
    Seed,
    /// Validate configuration, connect, and report pending migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = PlannerConfig::load(cli.config.as_deref())?;
    if let Some(dsn) = cli.dsn.clone() {
        config.database.dsn = dsn;
        config.validate()?;
    }

    logging::init(&config.logging, cli.verbose)?;

    if cli.print_config {
        println!("{}", render_config(&config)?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Migrate => migrate(&config).await,
        Commands::Seed => seed(&config).await,
        Commands::Check => check(&config).await,
    }
}

/// Pretty JSON of the effective configuration with DSN credentials masked.
fn render_config(config: &PlannerConfig) -> Result<String> {
    let mut shown = config.clone();
    shown.database.dsn = redact_credentials_in_dsn(&shown.database.dsn);
    serde_json::to_string_pretty(&shown).context("failed to render configuration")
}

async fn migrate(config: &PlannerConfig) -> Result<()> {
    let planner = Planner::init(config).await?;
    planner.db().clone().close().await?;
    println!("Migrations applied");
    Ok(())
}

async fn seed(config: &PlannerConfig) -> Result<()> {
    let planner = Planner::init(config).await?;
    let created = seed_default_users(&planner.unit_of_work()).await?;
    planner.db().clone().close().await?;
    println!("Seeded {created} default user(s)");
    Ok(())
}

async fn check(config: &PlannerConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    let db = config.database.connect().await?;
    db.ping().await?;
    let pending = db.pending_migrations::<Migrator>().await?;
    let engine = db.engine();
    db.close().await?;

    println!("Configuration is valid");
    println!(
        "Database: {} ({})",
        engine.as_str(),
        redact_credentials_in_dsn(&config.database.dsn)
    );
    if pending.is_empty() {
        println!("Schema is up to date");
    } else {
        println!("Pending migrations:");
        for name in &pending {
            println!("  {name}");
        }
    }
    Ok(())
}
