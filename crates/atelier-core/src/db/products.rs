//! Product catalogue operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::{NewProduct, Product};
use crate::pricing::{snapshot_from_products, BrandPricingSnapshot};

/// Outcome of a product upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductUpsert {
    Inserted(i64),
    Updated(i64),
}

impl Database {
    /// Insert a product, or update the existing one with the same title on
    /// the same brand
    pub fn upsert_product(&self, brand_id: i64, product: &NewProduct) -> Result<ProductUpsert> {
        let conn = self.conn()?;

        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM products WHERE brand_id = ? AND title = ?",
                params![brand_id, product.title],
                |row| row.get(0),
            )
            .ok();

        if let Some(id) = existing {
            conn.execute(
                "UPDATE products
                 SET category = ?, price = ?, sale_price = ?, is_custom = ?, in_stock = ?
                 WHERE id = ?",
                params![
                    product.category,
                    product.price,
                    product.sale_price,
                    product.is_custom,
                    product.in_stock,
                    id
                ],
            )?;
            return Ok(ProductUpsert::Updated(id));
        }

        conn.execute(
            "INSERT INTO products (brand_id, title, category, price, sale_price, is_custom, in_stock)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                brand_id,
                product.title,
                product.category,
                product.price,
                product.sale_price,
                product.is_custom,
                product.in_stock
            ],
        )?;

        Ok(ProductUpsert::Inserted(conn.last_insert_rowid()))
    }

    /// List a brand's products
    pub fn list_products(&self, brand_id: i64) -> Result<Vec<Product>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, brand_id, title, category, price, sale_price, is_custom, in_stock, created_at
             FROM products WHERE brand_id = ? ORDER BY title",
        )?;

        let products = stmt
            .query_map(params![brand_id], map_product_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(products)
    }

    /// Count products across all brands
    pub fn product_count(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Build the pricing snapshot for a brand from its current catalogue
    pub fn brand_pricing_snapshot(&self, brand_id: i64) -> Result<BrandPricingSnapshot> {
        let products = self.list_products(brand_id)?;
        Ok(snapshot_from_products(&products))
    }
}

fn map_product_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Product> {
    let created_at_str: String = row.get(8)?;
    Ok(Product {
        id: row.get(0)?,
        brand_id: row.get(1)?,
        title: row.get(2)?,
        category: row.get(3)?,
        price: row.get(4)?,
        sale_price: row.get(5)?,
        is_custom: row.get(6)?,
        in_stock: row.get(7)?,
        created_at: parse_datetime(&created_at_str),
    })
}
