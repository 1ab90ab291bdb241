//! Atelier CLI - Marketplace lead desk
//!
//! Usage:
//!   atelier init                          Initialize database
//!   atelier brands add NAME               Add a brand
//!   atelier import --brand B --file CSV   Import a product catalogue
//!   atelier estimate --brand B -m MSG     Estimate an inquiry's value
//!   atelier serve --port 3000             Start web server

mod cli;
mod commands;


use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use atelier_core::config::AtelierConfig;

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = AtelierConfig::load(cli.config.as_deref())?;

    // --db wins over the configured path
    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.database));

    match cli.command {
        Commands::Init => commands::cmd_init(&db_path),
        Commands::Brands { action } => {
            let db = commands::open_db(&db_path)?;
            match action {
                None | Some(BrandsAction::List) => commands::cmd_brands_list(&db),
                Some(BrandsAction::Add {
                    name,
                    category,
                    location,
                    price_range,
                }) => commands::cmd_brands_add(&db, &name, &category, &location, &price_range),
            }
        }
        Commands::Import { brand, file } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_import(&db, &brand, &file)
        }
        Commands::Leads { brand, status } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_leads_list(&db, brand.as_deref(), status.as_deref())
        }
        Commands::Estimate {
            brand,
            message,
            inquiry_type,
            company,
            json,
        } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_estimate(
                &db,
                &brand,
                &message,
                &inquiry_type,
                company.as_deref(),
                json,
            )
            .await
        }
        Commands::Status => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_status(&db)
        }
        Commands::Serve {
            port,
            host,
            no_auth,
        } => {
            let db = commands::open_db(&db_path)?;
            commands::cmd_serve(db, &config, &host, port, no_auth).await
        }
    }
}
