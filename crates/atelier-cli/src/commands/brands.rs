//! Brand directory commands

use anyhow::Result;
use atelier_core::db::Database;

pub fn cmd_brands_list(db: &Database) -> Result<()> {
    let brands = db.list_brands()?;

    if brands.is_empty() {
        println!("No brands yet. Add one with 'atelier brands add <name>'.");
        return Ok(());
    }

    println!("{:<5} {:<28} {:<16} {:<16} PRODUCTS", "ID", "NAME", "CATEGORY", "LOCATION");
    for brand in brands {
        let products = db.list_products(brand.id)?.len();
        println!(
            "{:<5} {:<28} {:<16} {:<16} {}",
            brand.id, brand.name, brand.category, brand.location, products
        );
    }

    Ok(())
}

pub fn cmd_brands_add(
    db: &Database,
    name: &str,
    category: &str,
    location: &str,
    price_range: &str,
) -> Result<()> {
    let id = db.upsert_brand(name, category, location, price_range)?;
    println!("✅ Brand '{}' ready (id {})", name, id);
    Ok(())
}
