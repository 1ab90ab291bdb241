//! Follow-up recommendation
//!
//! Ordered rules, first match wins. Value thresholds outrank urgency so a
//! large opportunity is never demoted to a generic urgent reply.

use crate::pricing::BrandPricingSnapshot;

use super::types::{MessageAnalysis, UrgencyLevel};

/// Generic text used by the message-only fallback estimate.
pub const FALLBACK_FOLLOW_UP: &str = "Standard follow-up recommended.";

/// Recommend the next action for a lead.
pub fn recommend(
    estimated_value: i64,
    analysis: &MessageAnalysis,
    pricing: &BrandPricingSnapshot,
) -> &'static str {
    if estimated_value > 10_000 {
        "High-value lead - Schedule consultation within 24 hours"
    } else if estimated_value > 5_000 {
        "Significant opportunity - Send detailed portfolio and pricing guide"
    } else if analysis.urgency_level == UrgencyLevel::Urgent {
        "Urgent inquiry - Respond immediately with availability"
    } else if !pricing.has_pricing_data {
        "Add product pricing data to improve lead estimation accuracy"
    } else {
        "Standard follow-up - Respond within business hours with consultation offer"
    }
}
