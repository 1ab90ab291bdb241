//! Database access layer with connection pooling and migrations
//!
//! This module is organized by domain:
//! - `brands` - Brand directory operations
//! - `products` - Product catalogue CRUD and pricing snapshots
//! - `leads` - Lead intake, dedup, and status updates

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::error::Result;

mod brands;
mod leads;
mod products;

pub use leads::lead_dedup_hash;
pub use products::ProductUpsert;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a SQLite datetime string into a DateTime<Utc>
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    // SQLite stores as "YYYY-MM-DD HH:MM:SS" format
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

/// Database wrapper with connection pooling
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Database {
    /// Create a new database connection pool and run migrations
    pub fn new(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let db = Self {
            pool,
            db_path: path.to_string(),
        };
        db.run_migrations()?;

        Ok(db)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a throwaway database (for testing)
    ///
    /// Note: Uses a temporary file rather than `:memory:` because pooled
    /// connections would each see their own private in-memory database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = format!(
            "{}/atelier_test_{}_{}.db",
            std::env::temp_dir().display(),
            std::process::id(),
            id
        );

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::new(&path)
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- Enable foreign keys
            PRAGMA foreign_keys = ON;

            -- WAL mode: better concurrency, readers don't block writers
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: good balance of safety and performance
            PRAGMA synchronous = NORMAL;

            -- Designer brands
            CREATE TABLE IF NOT EXISTS brands (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL UNIQUE,
                category TEXT NOT NULL DEFAULT '',
                location TEXT NOT NULL DEFAULT '',
                price_range TEXT NOT NULL DEFAULT '',
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            -- Product catalogue
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY,
                brand_id INTEGER NOT NULL REFERENCES brands(id),
                title TEXT NOT NULL,
                category TEXT,
                price REAL,
                sale_price REAL,
                is_custom INTEGER NOT NULL DEFAULT 0,
                in_stock INTEGER NOT NULL DEFAULT 1,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
                UNIQUE(brand_id, title)
            );

            CREATE INDEX IF NOT EXISTS idx_products_brand ON products(brand_id);

            -- Customer inquiries with the estimate captured at intake
            CREATE TABLE IF NOT EXISTS leads (
                id INTEGER PRIMARY KEY,
                brand_id INTEGER NOT NULL REFERENCES brands(id),
                customer_name TEXT NOT NULL,
                customer_email TEXT NOT NULL,
                message TEXT NOT NULL,
                inquiry_type TEXT NOT NULL DEFAULT 'general',
                company_name TEXT,
                location TEXT,
                referral_source TEXT,
                status TEXT NOT NULL DEFAULT 'new',
                dedup_hash TEXT NOT NULL UNIQUE,
                estimated_value INTEGER NOT NULL,
                confidence_score INTEGER NOT NULL,
                pricing_source TEXT NOT NULL,
                recommended_follow_up TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );

            CREATE INDEX IF NOT EXISTS idx_leads_brand ON leads(brand_id);
            CREATE INDEX IF NOT EXISTS idx_leads_status ON leads(status);
            "#,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_idempotent() {
        let db = Database::in_memory().unwrap();
        // Running migrations again must not fail
        db.run_migrations().unwrap();
        assert_eq!(db.brand_count().unwrap(), 0);
    }
}
