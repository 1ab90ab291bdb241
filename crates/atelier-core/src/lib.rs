//! Atelier Core Library
//!
//! Shared functionality for the Atelier marketplace lead desk:
//! - Database access and migrations (brands, products, leads)
//! - Brand pricing statistics aggregation
//! - Lead revenue estimation engine with injectable data providers
//! - Product catalogue CSV import
//! - Application configuration

pub mod config;
pub mod db;
pub mod error;
pub mod estimate;
pub mod import;
pub mod models;
pub mod pricing;
pub mod providers;

pub use config::AtelierConfig;
pub use db::{lead_dedup_hash, Database, ProductUpsert};
pub use error::{Error, Result};
pub use estimate::{
    CustomerDetails, LeadEstimate, MessageAnalysis, MessageAnalyzer, Multipliers, PricingSource,
    ProjectType, RevenueEstimator, UrgencyLevel, ValueBreakdown,
};
pub use import::{import_products_csv, ImportSummary};
pub use models::{Brand, Lead, LeadStatus, NewLead, NewProduct, Product};
pub use pricing::{snapshot_from_products, BrandPricingSnapshot, CustomVsReady, PriceRange};
pub use providers::{BrandInfo, BrandInfoProvider, BrandPricingProvider};
