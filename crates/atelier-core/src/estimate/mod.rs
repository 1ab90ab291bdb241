//! Lead revenue estimation
//!
//! Turns a customer inquiry into an estimated monetary value with a
//! confidence score, pricing provenance, multiplier breakdown, and a
//! recommended follow-up action:
//!
//! 1. [`analyzer`] classifies the message (project type, quantity, budget,
//!    urgency, detail signals)
//! 2. [`base_value`] resolves a price point from brand pricing data, or a
//!    category table when none exists
//! 3. [`multipliers`] derives the scalar adjustments
//! 4. [`confidence`] scores how much real data backed the result
//! 5. [`follow_up`] recommends the next action
//! 6. [`engine`] orchestrates the steps over injected providers and owns
//!    the degraded/fallback paths

pub mod analyzer;
pub mod base_value;
pub mod confidence;
pub mod engine;
pub mod follow_up;
pub mod multipliers;
pub mod types;

pub use analyzer::MessageAnalyzer;
pub use engine::RevenueEstimator;
pub use types::{
    CustomerDetails, LeadEstimate, MessageAnalysis, Multipliers, PricingSource, ProjectType,
    UrgencyLevel, ValueBreakdown,
};
