//! Product catalogue CSV import
//!
//! Expected header: `title,category,price,sale_price,custom,in_stock`.
//! Rows without a title or with an unparseable price are skipped and
//! counted. Import is idempotent per (brand, title).

use std::io::Read;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::db::{Database, ProductUpsert};
use crate::error::Result;
use crate::models::NewProduct;

/// Accounting for a single import run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Raw CSV row before validation
#[derive(Debug, Deserialize)]
struct ProductRecord {
    title: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    sale_price: Option<String>,
    #[serde(default)]
    custom: Option<String>,
    #[serde(default)]
    in_stock: Option<String>,
}

/// Import a brand's product catalogue from CSV
pub fn import_products_csv(
    db: &Database,
    brand_id: i64,
    reader: impl Read,
) -> Result<ImportSummary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut summary = ImportSummary::default();

    for record in csv_reader.deserialize::<ProductRecord>() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Skipping malformed CSV row");
                summary.skipped += 1;
                continue;
            }
        };

        if record.title.is_empty() {
            summary.skipped += 1;
            continue;
        }

        let price = match parse_optional_price(record.price.as_deref()) {
            Ok(p) => p,
            Err(raw) => {
                warn!(title = %record.title, raw = %raw, "Skipping row with unparseable price");
                summary.skipped += 1;
                continue;
            }
        };
        let sale_price = match parse_optional_price(record.sale_price.as_deref()) {
            Ok(p) => p,
            Err(raw) => {
                warn!(title = %record.title, raw = %raw, "Skipping row with unparseable sale price");
                summary.skipped += 1;
                continue;
            }
        };

        let product = NewProduct {
            title: record.title,
            category: record.category.filter(|c| !c.is_empty()),
            price,
            sale_price,
            is_custom: parse_flag(record.custom.as_deref()),
            in_stock: record
                .in_stock
                .as_deref()
                .map(|v| parse_flag(Some(v)))
                .unwrap_or(true),
        };

        match db.upsert_product(brand_id, &product)? {
            ProductUpsert::Inserted(id) => {
                debug!(id, title = %product.title, "Imported product");
                summary.imported += 1;
            }
            ProductUpsert::Updated(id) => {
                debug!(id, title = %product.title, "Updated product");
                summary.updated += 1;
            }
        }
    }

    Ok(summary)
}

/// Parse a price cell, tolerating currency symbols and thousands separators.
/// `Ok(None)` for an empty cell, `Err(raw)` when the cell is non-empty but
/// yields no parseable number.
fn parse_optional_price(raw: Option<&str>) -> std::result::Result<Option<f64>, String> {
    let raw = match raw {
        Some(r) if !r.trim().is_empty() => r.trim(),
        _ => return Ok(None),
    };

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|_| raw.to_string())
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("true") | Some("yes") | Some("1")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_brand(db: &Database) -> i64 {
        db.upsert_brand("Maison Lumière", "Bridal", "Paris", "")
            .unwrap()
    }

    const CSV: &str = "\
title,category,price,sale_price,custom,in_stock
Aurore,wedding,\"$2,400\",,true,yes
Brise,evening,900,750,false,yes
Lune,wedding,not-a-price,,true,yes
,wedding,100,,false,yes
";

    #[test]
    fn test_import_accounting() {
        let db = Database::in_memory().unwrap();
        let brand_id = seed_brand(&db);

        let summary = import_products_csv(&db, brand_id, CSV.as_bytes()).unwrap();
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.updated, 0);
        assert_eq!(summary.skipped, 2);

        let products = db.list_products(brand_id).unwrap();
        assert_eq!(products.len(), 2);

        let aurore = products.iter().find(|p| p.title == "Aurore").unwrap();
        assert_eq!(aurore.price, Some(2400.0));
        assert!(aurore.is_custom);
    }

    #[test]
    fn test_reimport_updates_existing() {
        let db = Database::in_memory().unwrap();
        let brand_id = seed_brand(&db);

        import_products_csv(&db, brand_id, CSV.as_bytes()).unwrap();
        let summary = import_products_csv(&db, brand_id, CSV.as_bytes()).unwrap();

        assert_eq!(summary.imported, 0);
        assert_eq!(summary.updated, 2);
        assert_eq!(summary.skipped, 2);
        assert_eq!(db.list_products(brand_id).unwrap().len(), 2);
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(parse_optional_price(None), Ok(None));
        assert_eq!(parse_optional_price(Some("")), Ok(None));
        assert_eq!(parse_optional_price(Some("1200")), Ok(Some(1200.0)));
        assert_eq!(parse_optional_price(Some("$1,200.50")), Ok(Some(1200.5)));
        assert_eq!(
            parse_optional_price(Some("call us")),
            Err("call us".to_string())
        );
    }
}
