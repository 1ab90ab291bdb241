//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Atelier - Lead desk for a fashion-brand marketplace
#[derive(Parser)]
#[command(name = "atelier")]
#[command(about = "Brand directory, catalogue import, and lead revenue estimation", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path (defaults to the configured path, then atelier.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file path (overrides ATELIER_CONFIG and the default location)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Manage the brand directory
    Brands {
        #[command(subcommand)]
        action: Option<BrandsAction>,
    },

    /// Import a brand's product catalogue from CSV
    Import {
        /// Brand name or ID
        #[arg(short, long)]
        brand: String,

        /// CSV file to import (title,category,price,sale_price,custom,in_stock)
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List recorded leads
    Leads {
        /// Filter by brand name or ID
        #[arg(short, long)]
        brand: Option<String>,

        /// Filter by status: new, contacted, qualified, closed
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Estimate the revenue potential of an inquiry
    Estimate {
        /// Brand name or ID
        #[arg(short, long)]
        brand: String,

        /// The inquiry message
        #[arg(short, long)]
        message: String,

        /// Inquiry type
        #[arg(long, default_value = "general")]
        inquiry_type: String,

        /// Customer's company name (applies the corporate multiplier)
        #[arg(long)]
        company: Option<String>,

        /// Print the raw estimate as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show database overview
    Status,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a
        /// network. By default, the server requires a bearer API key.
        #[arg(long)]
        no_auth: bool,
    },
}

#[derive(Subcommand)]
pub enum BrandsAction {
    /// List all brands
    List,

    /// Add a brand
    Add {
        /// Brand name
        name: String,

        /// Brand category (e.g. "Bridal", "Haute Couture")
        #[arg(short, long, default_value = "")]
        category: String,

        /// Brand location
        #[arg(short, long, default_value = "")]
        location: String,

        /// Display price range (e.g. "$500 - $3,000")
        #[arg(long, default_value = "")]
        price_range: String,
    },
}
