//! Revenue estimation engine
//!
//! Composes the message analyzer, base-value resolver, multiplier rules,
//! confidence scorer, and follow-up recommender over two injected data
//! providers. `estimate` never fails: a single failed provider degrades to
//! safe defaults, and when brand data is entirely unavailable the engine
//! falls back to a message-only estimate tagged `industry_fallback`.

use std::sync::Arc;

use tracing::warn;

use crate::pricing::BrandPricingSnapshot;
use crate::providers::{BrandInfo, BrandInfoProvider, BrandPricingProvider};

use super::analyzer::MessageAnalyzer;
use super::base_value::resolve_base_value;
use super::confidence::score_confidence;
use super::follow_up::{recommend, FALLBACK_FOLLOW_UP};
use super::multipliers::compute_multipliers;
use super::types::{CustomerDetails, LeadEstimate, PricingSource, ValueBreakdown};

/// Base value used by the message-only fallback path.
const FALLBACK_BASE_VALUE: f64 = 2000.0;

/// Confidence reported for fallback estimates.
const FALLBACK_CONFIDENCE: i64 = 40;

/// Stateless estimator over injected brand-data providers.
///
/// Each call builds its own analysis values, so concurrent calls need no
/// coordination.
pub struct RevenueEstimator {
    pricing: Arc<dyn BrandPricingProvider>,
    info: Arc<dyn BrandInfoProvider>,
    analyzer: MessageAnalyzer,
}

impl RevenueEstimator {
    pub fn new(pricing: Arc<dyn BrandPricingProvider>, info: Arc<dyn BrandInfoProvider>) -> Self {
        Self {
            pricing,
            info,
            analyzer: MessageAnalyzer::new(),
        }
    }

    /// Estimate the revenue potential of a lead.
    ///
    /// The two provider fetches are independent and issued concurrently.
    /// One failed fetch degrades that input to an empty default; both
    /// failing switches to the fallback estimate.
    pub async fn estimate(
        &self,
        brand_id: i64,
        message: &str,
        inquiry_type: &str,
        customer: Option<&CustomerDetails>,
    ) -> LeadEstimate {
        let (pricing_res, info_res) = tokio::join!(
            self.pricing.pricing_snapshot(brand_id),
            self.info.brand_info(brand_id)
        );

        if pricing_res.is_err() && info_res.is_err() {
            warn!(brand_id, "Brand data unavailable, using fallback estimate");
            return fallback_estimate(message);
        }

        let pricing = match pricing_res {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(brand_id, error = %e, "Pricing fetch failed, assuming no pricing data");
                BrandPricingSnapshot::empty()
            }
        };

        let brand = match info_res {
            Ok(info) => info,
            Err(e) => {
                warn!(brand_id, error = %e, "Brand info fetch failed, assuming empty brand");
                BrandInfo::empty()
            }
        };

        let analysis = self.analyzer.analyze(message, inquiry_type);
        let (base_value, pricing_source) = resolve_base_value(&pricing, &brand, &analysis);
        let multipliers = compute_multipliers(&self.analyzer, message, customer);

        let final_value = base_value * multipliers.product();
        let estimated_value = final_value.round().max(0.0) as i64;

        let confidence_score = score_confidence(&pricing, &analysis, &multipliers);
        let follow_up = recommend(estimated_value, &analysis, &pricing);

        LeadEstimate {
            estimated_value,
            confidence_score,
            pricing_source,
            breakdown: ValueBreakdown {
                base_value: base_value.round() as i64,
                project_multiplier: multipliers.project,
                quantity_multiplier: multipliers.quantity,
                urgency_multiplier: multipliers.urgency,
                luxury_multiplier: multipliers.luxury,
                final_value: estimated_value,
            },
            recommended_follow_up: follow_up.to_string(),
        }
    }
}

/// Message-only estimate used when brand data cannot be retrieved at all.
///
/// A single keyword multiplier applies, checked in fixed priority order:
/// wedding (2.5), luxury (2.0), urgent (1.3).
fn fallback_estimate(message: &str) -> LeadEstimate {
    let lower = message.to_lowercase();

    let multiplier = if lower.contains("wedding") {
        2.5
    } else if lower.contains("luxury") {
        2.0
    } else if lower.contains("urgent") {
        1.3
    } else {
        1.0
    };

    let estimated_value = (FALLBACK_BASE_VALUE * multiplier).round() as i64;

    LeadEstimate {
        estimated_value,
        confidence_score: FALLBACK_CONFIDENCE,
        pricing_source: PricingSource::IndustryFallback,
        breakdown: ValueBreakdown {
            base_value: FALLBACK_BASE_VALUE.round() as i64,
            project_multiplier: multiplier,
            quantity_multiplier: 1.0,
            urgency_multiplier: 1.0,
            luxury_multiplier: 1.0,
            final_value: estimated_value,
        },
        recommended_follow_up: FALLBACK_FOLLOW_UP.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::pricing::{CustomVsReady, PriceRange};
    use async_trait::async_trait;

    struct FakePricing(Option<BrandPricingSnapshot>);

    #[async_trait]
    impl BrandPricingProvider for FakePricing {
        async fn pricing_snapshot(&self, _brand_id: i64) -> Result<BrandPricingSnapshot> {
            self.0
                .clone()
                .ok_or_else(|| Error::Provider("pricing unavailable".to_string()))
        }
    }

    struct FakeInfo(Option<BrandInfo>);

    #[async_trait]
    impl BrandInfoProvider for FakeInfo {
        async fn brand_info(&self, _brand_id: i64) -> Result<BrandInfo> {
            self.0
                .clone()
                .ok_or_else(|| Error::Provider("brand unavailable".to_string()))
        }
    }

    fn estimator(
        pricing: Option<BrandPricingSnapshot>,
        info: Option<BrandInfo>,
    ) -> RevenueEstimator {
        RevenueEstimator::new(Arc::new(FakePricing(pricing)), Arc::new(FakeInfo(info)))
    }

    fn bridal_brand() -> BrandInfo {
        BrandInfo {
            name: "Maison Lumière".to_string(),
            category: "Bridal".to_string(),
            price_range: "$1,000 - $8,000".to_string(),
            location: "Paris".to_string(),
        }
    }

    fn snapshot_with_average(average: f64) -> BrandPricingSnapshot {
        BrandPricingSnapshot {
            total_products: 6,
            price_range: PriceRange {
                min: 200.0,
                max: 1500.0,
                average,
            },
            category_averages: Default::default(),
            custom_vs_ready: CustomVsReady::default(),
            has_pricing_data: true,
        }
    }

    #[tokio::test]
    async fn test_wedding_lead_without_pricing_data() {
        // Bridal brand, no products: base 4000 * 2.5, urgency 1.4 on top
        let est = estimator(Some(BrandPricingSnapshot::empty()), Some(bridal_brand()));
        let result = est
            .estimate(1, "I need a wedding dress, urgent, budget $5000", "custom", None)
            .await;

        assert_eq!(result.pricing_source, PricingSource::CategoryAverage);
        assert_eq!(result.breakdown.base_value, 10_000);
        assert_eq!(result.breakdown.urgency_multiplier, 1.4);
        assert_eq!(result.estimated_value, 14_000);
        assert_eq!(result.breakdown.final_value, result.estimated_value);
        // 50 + 20 for the mentioned budget
        assert_eq!(result.confidence_score, 70);
        assert!(result.recommended_follow_up.starts_with("High-value lead"));
    }

    #[tokio::test]
    async fn test_casual_lead_uses_brand_average() {
        let est = estimator(Some(snapshot_with_average(650.0)), Some(bridal_brand()));
        let result = est.estimate(1, "Looking for a casual blouse", "general", None).await;

        assert_eq!(result.pricing_source, PricingSource::BrandProducts);
        assert_eq!(result.estimated_value, 650);
        assert_eq!(result.breakdown.base_value, 650);
        assert_eq!(result.breakdown.project_multiplier, 1.0);
        assert_eq!(result.breakdown.quantity_multiplier, 1.0);
    }

    #[tokio::test]
    async fn test_total_provider_failure_falls_back() {
        let est = estimator(None, None);
        let result = est.estimate(7, "luxury custom gown", "custom", None).await;

        assert_eq!(result.pricing_source, PricingSource::IndustryFallback);
        assert_eq!(result.confidence_score, 40);
        // luxury keyword: 2000 * 2.0
        assert_eq!(result.estimated_value, 4_000);
        assert_eq!(result.recommended_follow_up, FALLBACK_FOLLOW_UP);
    }

    #[tokio::test]
    async fn test_fallback_keyword_priority() {
        let est = estimator(None, None);

        // wedding outranks luxury and urgent
        let result = est
            .estimate(7, "urgent luxury wedding piece", "general", None)
            .await;
        assert_eq!(result.estimated_value, 5_000);

        let result = est.estimate(7, "urgent repair", "general", None).await;
        assert_eq!(result.estimated_value, 2_600);

        let result = est.estimate(7, "hello there", "general", None).await;
        assert_eq!(result.estimated_value, 2_000);
    }

    #[tokio::test]
    async fn test_single_provider_failure_degrades_without_fallback() {
        // Pricing down, brand info up: the category table still applies
        let est = estimator(None, Some(bridal_brand()));
        let result = est.estimate(1, "a wedding dress", "general", None).await;

        assert_eq!(result.pricing_source, PricingSource::CategoryAverage);
        assert_eq!(result.estimated_value, 10_000);

        // Brand info down, pricing up: product average still applies
        let est = estimator(Some(snapshot_with_average(800.0)), None);
        let result = est.estimate(1, "a blouse", "general", None).await;
        assert_eq!(result.pricing_source, PricingSource::BrandProducts);
        assert_eq!(result.estimated_value, 800);
    }

    #[tokio::test]
    async fn test_pricing_source_never_brand_products_without_data() {
        let est = estimator(Some(BrandPricingSnapshot::empty()), Some(bridal_brand()));
        let result = est.estimate(1, "anything at all", "general", None).await;
        assert_ne!(result.pricing_source, PricingSource::BrandProducts);
    }

    #[tokio::test]
    async fn test_estimates_are_deterministic() {
        let est = estimator(Some(snapshot_with_average(900.0)), Some(bridal_brand()));
        let first = est
            .estimate(1, "3 dresses in premium silk fabric", "general", None)
            .await;
        let second = est
            .estimate(1, "3 dresses in premium silk fabric", "general", None)
            .await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_quantity_is_monotonic() {
        let est = estimator(Some(snapshot_with_average(900.0)), Some(bridal_brand()));
        let one = est.estimate(1, "I need a dress", "general", None).await;
        let three = est.estimate(1, "I need 3 dresses", "general", None).await;
        assert!(three.estimated_value >= one.estimated_value);
    }

    #[tokio::test]
    async fn test_corporate_multiplier_in_value_but_not_breakdown() {
        let est = estimator(Some(snapshot_with_average(1000.0)), Some(bridal_brand()));
        let customer = CustomerDetails {
            company_name: Some("Studio GmbH".to_string()),
            ..Default::default()
        };
        let result = est
            .estimate(1, "office wear for the team", "corporate", Some(&customer))
            .await;

        // 1000 * 1.2 corporate; the breakdown's four multipliers are all 1.0
        assert_eq!(result.estimated_value, 1_200);
        assert_eq!(result.breakdown.project_multiplier, 1.0);
        assert_eq!(result.breakdown.quantity_multiplier, 1.0);
        assert_eq!(result.breakdown.urgency_multiplier, 1.0);
        assert_eq!(result.breakdown.luxury_multiplier, 1.0);
        assert_eq!(result.breakdown.final_value, 1_200);
    }

    #[tokio::test]
    async fn test_estimated_value_is_non_negative() {
        let est = estimator(Some(BrandPricingSnapshot::empty()), Some(bridal_brand()));
        let result = est.estimate(1, "consultation only", "consultation", None).await;
        assert!(result.estimated_value >= 0);
        assert!((20..=95).contains(&result.confidence_score));
    }
}
