//! Brand data provider seams
//!
//! The estimation engine reads brand data through these traits so tests and
//! alternative backends can substitute in-memory implementations. The
//! SQLite-backed [`Database`] implements both.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::error::{Error, Result};
use crate::pricing::BrandPricingSnapshot;

/// Brand metadata consumed by the base-value resolver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandInfo {
    pub name: String,
    pub category: String,
    pub price_range: String,
    pub location: String,
}

impl BrandInfo {
    /// All-empty info used when the brand lookup fails
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Read-only access to a brand's aggregate product pricing
#[async_trait]
pub trait BrandPricingProvider: Send + Sync {
    async fn pricing_snapshot(&self, brand_id: i64) -> Result<BrandPricingSnapshot>;
}

/// Read-only access to brand category/location metadata
#[async_trait]
pub trait BrandInfoProvider: Send + Sync {
    async fn brand_info(&self, brand_id: i64) -> Result<BrandInfo>;
}

#[async_trait]
impl BrandPricingProvider for Database {
    async fn pricing_snapshot(&self, brand_id: i64) -> Result<BrandPricingSnapshot> {
        self.brand_pricing_snapshot(brand_id)
    }
}

#[async_trait]
impl BrandInfoProvider for Database {
    async fn brand_info(&self, brand_id: i64) -> Result<BrandInfo> {
        let brand = self
            .get_brand(brand_id)?
            .ok_or_else(|| Error::NotFound(format!("Brand {} not found", brand_id)))?;

        Ok(BrandInfo {
            name: brand.name,
            category: brand.category,
            price_range: brand.price_range,
            location: brand.location,
        })
    }
}
