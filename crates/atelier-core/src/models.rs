//! Domain models for Atelier

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::estimate::PricingSource;

/// A designer brand listed on the marketplace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    /// Free-form category ("Bridal", "Haute Couture", ...). Matched
    /// case-insensitively against the base-value table when the brand has
    /// no usable product pricing.
    pub category: String,
    pub location: String,
    /// Display string shown on the brand page, e.g. "$500 - $3,000"
    pub price_range: String,
    pub created_at: DateTime<Utc>,
}

/// A product in a brand's catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub brand_id: i64,
    pub title: String,
    /// Project-category name ("wedding", "evening", ...) used for
    /// per-category price averages
    pub category: Option<String>,
    pub price: Option<f64>,
    pub sale_price: Option<f64>,
    /// True for made-to-order/tailored pieces
    pub is_custom: bool,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The price that counts for statistics: sale price when set and
    /// positive, otherwise the list price when positive.
    pub fn effective_price(&self) -> Option<f64> {
        self.sale_price
            .filter(|p| *p > 0.0)
            .or(self.price)
            .filter(|p| *p > 0.0)
    }
}

/// Fields accepted when creating or importing a product
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

/// Lifecycle status of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Qualified,
    Closed,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::Qualified => "qualified",
            Self::Closed => "closed",
        }
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "contacted" => Ok(Self::Contacted),
            "qualified" => Ok(Self::Qualified),
            "closed" => Ok(Self::Closed),
            _ => Err(format!("Unknown lead status: {}", s)),
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A customer inquiry directed at a brand, with the revenue estimate
/// captured at intake time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub brand_id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub message: String,
    pub inquiry_type: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub referral_source: Option<String>,
    pub status: LeadStatus,
    /// SHA-256 over brand + email + message, used to reject duplicate
    /// submissions
    pub dedup_hash: String,
    pub estimated_value: i64,
    pub confidence_score: i64,
    pub pricing_source: PricingSource,
    pub recommended_follow_up: String,
    pub created_at: DateTime<Utc>,
}

/// Fields accepted when recording a lead
#[derive(Debug, Clone, Deserialize)]
pub struct NewLead {
    pub customer_name: String,
    pub customer_email: String,
    pub message: String,
    #[serde(default = "default_inquiry_type")]
    pub inquiry_type: String,
    pub company_name: Option<String>,
    pub location: Option<String>,
    pub referral_source: Option<String>,
}

fn default_inquiry_type() -> String {
    "general".to_string()
}
