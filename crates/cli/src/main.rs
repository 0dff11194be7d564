//! `persons` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`    start the API server.
//! - `migrate`  run pending database migrations.
//! - `validate` validate a person JSON file.
//! - `table`    print the records as a sorted table.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use client::{PersonsClient, SortKey, SortOrder, TableView};
use domain::{validate_new_person, PersonInput};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_DATABASE_URL: &str = "sqlite://persons.db?mode=rwc";

#[derive(Parser)]
#[command(name = "persons", about = "CRUD service for person records", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        #[arg(long, env = "PERSONS_BIND", default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,
        #[arg(long, default_value_t = 10)]
        max_connections: u32,
        /// Directory with the built frontend, served next to the API.
        #[arg(long, env = "PERSONS_STATIC_DIR")]
        static_dir: Option<PathBuf>,
    },
    /// Run pending database migrations.
    Migrate {
        #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
        database_url: String,
    },
    /// Validate a person JSON file.
    Validate {
        /// Path to the person JSON file.
        path: PathBuf,
    },
    /// Fetch all records from a running server and print them.
    Table {
        #[arg(long, env = "PERSONS_URL", default_value = "http://localhost:8080")]
        url: String,
        /// Column to sort by: id, fname, lname or age.
        #[arg(long, default_value = "id")]
        sort: SortKey,
        #[arg(long)]
        desc: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { bind, database_url, max_connections, static_dir } => {
            let pool = db::pool::create_pool(&database_url, max_connections)
                .await
                .context("failed to connect to database")?;
            db::pool::run_migrations(&pool).await.context("migration failed")?;
            info!("Starting API server on {bind}");
            api::serve(&bind, pool, static_dir).await?;
        }
        Command::Migrate { database_url } => {
            info!("Running migrations against {database_url}");
            let pool = db::pool::create_pool(&database_url, 2)
                .await
                .context("failed to connect to database")?;
            db::pool::run_migrations(&pool).await.context("migration failed")?;
            info!("Migrations applied successfully");
        }
        Command::Validate { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read file {}", path.display()))?;
            let input: PersonInput = serde_json::from_str(&content).context("invalid JSON")?;

            match validate_new_person(&input) {
                Ok(person) => {
                    println!("Person is valid: {} {}, age {}", person.fname, person.lname, person.age);
                }
                Err(e) => {
                    eprintln!("Validation failed:");
                    for message in e.messages() {
                        eprintln!("  - {message}");
                    }
                    std::process::exit(1);
                }
            }
        }
        Command::Table { url, sort, desc } => {
            let client = PersonsClient::new(url);
            let mut view = TableView::new();
            view.set_sort_order(SortOrder { key: sort, ascending: !desc });

            let mut ok = true;
            view.refresh(&client, &mut |success: bool, message: &str, errors: &[String]| {
                if !success {
                    ok = false;
                    warn!("Failed to load persons: {message}");
                    for e in errors {
                        eprintln!("  - {e}");
                    }
                }
            })
            .await;

            if !ok {
                anyhow::bail!("could not fetch persons from {}", client.base_url());
            }
            print!("{}", view.render());
        }
    }

    Ok(())
}
