//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `resolve_brand` - Look up a brand by name or ID
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Database overview

use std::path::Path;

use anyhow::{bail, Context, Result};
use atelier_core::db::Database;
use atelier_core::models::Brand;

/// Open the database, creating it if necessary
pub fn open_db(db_path: &Path) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    Database::new(path_str).context("Failed to open database")
}

/// Resolve a brand argument that may be a numeric ID or a name
pub fn resolve_brand(db: &Database, brand: &str) -> Result<Brand> {
    let found = if let Ok(id) = brand.parse::<i64>() {
        db.get_brand(id)?
    } else {
        db.get_brand_by_name(brand)?
    };

    match found {
        Some(brand) => Ok(brand),
        None => bail!("Brand '{}' not found. Run 'atelier brands' to list brands.", brand),
    }
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let _db = open_db(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add a brand: atelier brands add \"Maison Lumière\" --category Bridal");
    println!("  2. Import its catalogue: atelier import --brand \"Maison Lumière\" --file products.csv");
    println!("  3. Start the API: atelier serve");

    Ok(())
}

pub fn cmd_status(db: &Database) -> Result<()> {
    println!("📊 Atelier Status");
    println!("   ─────────────────────────────");
    println!("   Database: {}", db.path());
    println!("   Brands: {}", db.brand_count()?);
    println!("   Products: {}", db.product_count()?);
    println!("   Leads: {}", db.lead_count()?);

    Ok(())
}
