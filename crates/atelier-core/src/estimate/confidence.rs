//! Confidence scoring
//!
//! Reflects how much real data backed an estimate: brand pricing data and
//! explicit customer signals raise it, heavy multiplier stacking lowers it.

use crate::pricing::BrandPricingSnapshot;

use super::types::{MessageAnalysis, Multipliers};

pub const MIN_CONFIDENCE: i64 = 20;
pub const MAX_CONFIDENCE: i64 = 95;

/// Score confidence for an estimate, clamped to [20, 95].
pub fn score_confidence(
    pricing: &BrandPricingSnapshot,
    analysis: &MessageAnalysis,
    multipliers: &Multipliers,
) -> i64 {
    let mut score: i64 = 50;

    if pricing.has_pricing_data {
        score += 30;
    }
    if analysis.has_specific_details {
        score += 15;
    }
    if analysis.mentioned_budget > 0 {
        score += 20;
    }
    // Stacked multipliers mean the estimate leans on weak text signals
    if multipliers.product() > 3.0 {
        score -= 15;
    }

    score.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::types::{ProjectType, UrgencyLevel};
    use crate::pricing::{CustomVsReady, PriceRange};

    fn analysis(budget: i64, details: bool) -> MessageAnalysis {
        MessageAnalysis {
            project_type: ProjectType::General,
            quantity: 1,
            mentioned_budget: budget,
            urgency_level: UrgencyLevel::Normal,
            message_length: 10,
            has_specific_details: details,
        }
    }

    fn snapshot(has_data: bool) -> BrandPricingSnapshot {
        BrandPricingSnapshot {
            total_products: if has_data { 3 } else { 0 },
            price_range: PriceRange::default(),
            category_averages: Default::default(),
            custom_vs_ready: CustomVsReady::default(),
            has_pricing_data: has_data,
        }
    }

    #[test]
    fn test_base_score_without_signals() {
        let score = score_confidence(&snapshot(false), &analysis(0, false), &Multipliers::neutral());
        assert_eq!(score, 50);
    }

    #[test]
    fn test_all_positive_signals_clamp_to_max() {
        // 50 + 30 + 15 + 20 = 115, clamped to 95
        let score = score_confidence(&snapshot(true), &analysis(5000, true), &Multipliers::neutral());
        assert_eq!(score, MAX_CONFIDENCE);
    }

    #[test]
    fn test_multiplier_stacking_penalty() {
        let stacked = Multipliers {
            project: 1.3,
            quantity: 2.6,
            urgency: 1.4,
            luxury: 1.0,
            corporate: 1.0,
        };
        assert!(stacked.product() > 3.0);

        let score = score_confidence(&snapshot(false), &analysis(0, false), &stacked);
        assert_eq!(score, 35);
    }

    #[test]
    fn test_score_stays_within_bounds() {
        let stacked = Multipliers {
            project: 1.3,
            quantity: 5.0,
            urgency: 1.4,
            luxury: 1.5,
            corporate: 1.2,
        };
        let score = score_confidence(&snapshot(false), &analysis(0, false), &stacked);
        assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&score));
    }
}
