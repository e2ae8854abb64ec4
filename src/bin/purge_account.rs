//! Operator tool that purges a single account and everything it owns.
//!
//! Looks the account up by email first, then by chat platform user id, and
//! runs the same teardown the dashboard's clear-data endpoint uses. By
//! default the account row and its login records go too; pass
//! `--keep-account` to wipe only the workload data.

use std::env;

use clap::Parser;
use sea_orm::{ConnectOptions, Database};
use tracing_subscriber::{fmt, EnvFilter};

use tally::server::{
    error::{config::ConfigError, Error},
    service::lifecycle::LifecycleService,
};

/// `purge-account` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "purge-account",
    about = "Delete an account and all data it owns, matched by email or chat user id",
    version
)]
struct CliArgs {
    /// Email address or chat platform user id of the account to purge.
    #[arg(value_name = "identifier")]
    identifier: String,
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Keep the account row and login records, deleting only workload data.
    #[arg(long = "keep-account")]
    keep_account: bool,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    dotenvy::dotenv().ok();
    let args = CliArgs::parse();
    let database_url = resolve_database_url(args.database_url)?;

    let mut opt = ConnectOptions::new(&database_url);
    opt.sqlx_logging(false);
    let db = Database::connect(opt).await?;

    let lifecycle_service = LifecycleService::new(&db);
    let result = lifecycle_service
        .purge_by_identifier(&args.identifier, !args.keep_account)
        .await?;

    let Some((account_id, cleared)) = result else {
        eprintln!("No account matches '{}'", args.identifier);
        std::process::exit(1);
    };

    println!("account_id={}", account_id);
    println!("timers={}", cleared.timers);
    println!("invoices={}", cleared.invoices);
    println!("projects={}", cleared.projects);
    println!("side_projects={}", cleared.side_projects);
    println!("clients={}", cleared.clients);
    println!("external_logins={}", cleared.external_logins);
    println!("sessions={}", cleared.sessions);
    println!("account_deleted={}", cleared.account_deleted);

    Ok(())
}

fn resolve_database_url(explicit: Option<String>) -> Result<String, Error> {
    if let Some(value) = explicit {
        return Ok(value);
    }

    env::var("DATABASE_URL")
        .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()).into())
}
