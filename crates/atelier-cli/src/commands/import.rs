//! Product catalogue import command

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use atelier_core::db::Database;
use atelier_core::import::import_products_csv;

use super::resolve_brand;

pub fn cmd_import(db: &Database, brand: &str, file: &Path) -> Result<()> {
    let brand = resolve_brand(db, brand)?;

    println!("📥 Importing catalogue for '{}' from {}...", brand.name, file.display());

    let reader = File::open(file)
        .with_context(|| format!("Cannot open CSV file {}", file.display()))?;
    let summary = import_products_csv(db, brand.id, reader)?;

    println!("   Imported: {}", summary.imported);
    println!("   Updated: {}", summary.updated);
    if summary.skipped > 0 {
        println!("   ⚠️  Skipped: {} (missing title or unparseable price)", summary.skipped);
    }

    let snapshot = db.brand_pricing_snapshot(brand.id)?;
    if snapshot.has_pricing_data {
        println!(
            "   Pricing: {} products, average ${:.0} (${:.0} - ${:.0})",
            snapshot.total_products,
            snapshot.price_range.average,
            snapshot.price_range.min,
            snapshot.price_range.max
        );
    } else {
        println!("   ⚠️  No priced products yet - estimates will use category defaults");
    }

    Ok(())
}
