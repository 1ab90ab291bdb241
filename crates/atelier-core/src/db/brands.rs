//! Brand directory operations

use rusqlite::params;

use super::{parse_datetime, Database};
use crate::error::Result;
use crate::models::Brand;

impl Database {
    /// Create or get a brand by name
    pub fn upsert_brand(
        &self,
        name: &str,
        category: &str,
        location: &str,
        price_range: &str,
    ) -> Result<i64> {
        let conn = self.conn()?;

        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM brands WHERE name = ?",
                params![name],
                |row| row.get(0),
            )
            .ok();

        if let Some(id) = existing {
            return Ok(id);
        }

        conn.execute(
            "INSERT INTO brands (name, category, location, price_range) VALUES (?, ?, ?, ?)",
            params![name, category, location, price_range],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Get a brand by ID
    pub fn get_brand(&self, id: i64) -> Result<Option<Brand>> {
        let conn = self.conn()?;
        let brand = conn
            .query_row(
                "SELECT id, name, category, location, price_range, created_at
                 FROM brands WHERE id = ?",
                params![id],
                map_brand_row,
            )
            .ok();

        Ok(brand)
    }

    /// Get a brand by exact name
    pub fn get_brand_by_name(&self, name: &str) -> Result<Option<Brand>> {
        let conn = self.conn()?;
        let brand = conn
            .query_row(
                "SELECT id, name, category, location, price_range, created_at
                 FROM brands WHERE name = ?",
                params![name],
                map_brand_row,
            )
            .ok();

        Ok(brand)
    }

    /// List all brands
    pub fn list_brands(&self) -> Result<Vec<Brand>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, category, location, price_range, created_at
             FROM brands ORDER BY name",
        )?;

        let brands = stmt
            .query_map([], map_brand_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(brands)
    }

    /// Count brands in the directory
    pub fn brand_count(&self) -> Result<i64> {
        let conn = self.conn()?;
        let count = conn.query_row("SELECT COUNT(*) FROM brands", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn map_brand_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Brand> {
    let created_at_str: String = row.get(5)?;
    Ok(Brand {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        location: row.get(3)?,
        price_range: row.get(4)?,
        created_at: parse_datetime(&created_at_str),
    })
}
