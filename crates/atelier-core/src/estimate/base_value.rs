//! Base value resolution
//!
//! Prefers the brand's own product pricing statistics; falls back to a
//! brand-category base-value table scaled by project type when the brand has
//! no usable pricing data.

use crate::pricing::BrandPricingSnapshot;
use crate::providers::BrandInfo;

use super::types::{MessageAnalysis, PricingSource, ProjectType};

/// Resolve the unadjusted price point for a lead and report which data
/// source produced it.
///
/// Resolution order with real pricing data:
/// 1. average price of the brand's products in the detected project category
/// 2. the brand's custom-work average, for custom projects
/// 3. the brand's overall average price
pub fn resolve_base_value(
    pricing: &BrandPricingSnapshot,
    brand: &BrandInfo,
    analysis: &MessageAnalysis,
) -> (f64, PricingSource) {
    if pricing.has_pricing_data && pricing.price_range.average > 0.0 {
        let value = pricing
            .category_averages
            .get(analysis.project_type.as_str())
            .copied()
            .filter(|avg| *avg > 0.0)
            .or_else(|| {
                (analysis.project_type == ProjectType::Custom
                    && pricing.custom_vs_ready.custom_avg > 0.0)
                    .then_some(pricing.custom_vs_ready.custom_avg)
            })
            .unwrap_or(pricing.price_range.average);

        return (value, PricingSource::BrandProducts);
    }

    let base = category_base_value(&brand.category) * project_type_factor(analysis.project_type);
    (base, PricingSource::CategoryAverage)
}

/// Typical price point per brand category, matched case-insensitively.
/// Unrecognized categories fall back to 2000.
fn category_base_value(category: &str) -> f64 {
    match category.to_lowercase().as_str() {
        "luxury" => 5000.0,
        "haute couture" => 8000.0,
        "bridal" => 4000.0,
        "evening wear" => 3000.0,
        "formal" => 2500.0,
        "ready-to-wear" => 2000.0,
        "contemporary" => 1800.0,
        "accessories" => 800.0,
        "sustainable" => 2200.0,
        "streetwear" => 1200.0,
        _ => 2000.0,
    }
}

/// Scale applied to the category base value per detected project type.
fn project_type_factor(project_type: ProjectType) -> f64 {
    match project_type {
        ProjectType::Wedding => 2.5,
        ProjectType::RedCarpet => 3.0,
        ProjectType::Evening => 1.8,
        ProjectType::Corporate => 1.4,
        ProjectType::Custom => 2.0,
        ProjectType::Consultation => 0.3,
        ProjectType::Alteration => 0.4,
        ProjectType::Casual | ProjectType::General => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::types::UrgencyLevel;
    use crate::pricing::{CustomVsReady, PriceRange};

    fn analysis_for(project_type: ProjectType) -> MessageAnalysis {
        MessageAnalysis {
            project_type,
            quantity: 1,
            mentioned_budget: 0,
            urgency_level: UrgencyLevel::Normal,
            message_length: 0,
            has_specific_details: false,
        }
    }

    fn snapshot_with_average(average: f64) -> BrandPricingSnapshot {
        BrandPricingSnapshot {
            total_products: 4,
            price_range: PriceRange {
                min: 100.0,
                max: 2000.0,
                average,
            },
            category_averages: Default::default(),
            custom_vs_ready: CustomVsReady::default(),
            has_pricing_data: true,
        }
    }

    fn brand(category: &str) -> BrandInfo {
        BrandInfo {
            name: "Test Atelier".to_string(),
            category: category.to_string(),
            price_range: String::new(),
            location: String::new(),
        }
    }

    #[test]
    fn test_category_average_wins_over_overall_average() {
        let mut pricing = snapshot_with_average(650.0);
        pricing.category_averages.insert("wedding".to_string(), 1800.0);

        let (value, source) =
            resolve_base_value(&pricing, &brand("Bridal"), &analysis_for(ProjectType::Wedding));
        assert_eq!(value, 1800.0);
        assert_eq!(source, PricingSource::BrandProducts);
    }

    #[test]
    fn test_custom_average_used_for_custom_projects() {
        let mut pricing = snapshot_with_average(650.0);
        pricing.custom_vs_ready.custom_avg = 2400.0;

        let (value, source) =
            resolve_base_value(&pricing, &brand("Bridal"), &analysis_for(ProjectType::Custom));
        assert_eq!(value, 2400.0);
        assert_eq!(source, PricingSource::BrandProducts);

        // Non-custom projects ignore the custom average
        let (value, _) =
            resolve_base_value(&pricing, &brand("Bridal"), &analysis_for(ProjectType::Evening));
        assert_eq!(value, 650.0);
    }

    #[test]
    fn test_overall_average_as_last_real_data_resort() {
        let pricing = snapshot_with_average(650.0);
        let (value, source) =
            resolve_base_value(&pricing, &brand("Bridal"), &analysis_for(ProjectType::Casual));
        assert_eq!(value, 650.0);
        assert_eq!(source, PricingSource::BrandProducts);
    }

    #[test]
    fn test_category_table_fallback() {
        let pricing = BrandPricingSnapshot::empty();

        // bridal 4000 * wedding 2.5 = 10000
        let (value, source) =
            resolve_base_value(&pricing, &brand("Bridal"), &analysis_for(ProjectType::Wedding));
        assert_eq!(value, 10000.0);
        assert_eq!(source, PricingSource::CategoryAverage);

        // haute couture 8000 * red carpet 3.0
        let (value, _) = resolve_base_value(
            &pricing,
            &brand("Haute Couture"),
            &analysis_for(ProjectType::RedCarpet),
        );
        assert_eq!(value, 24000.0);

        // unknown category defaults to 2000, general factor 1.0
        let (value, _) = resolve_base_value(
            &pricing,
            &brand("Avant Garde"),
            &analysis_for(ProjectType::General),
        );
        assert_eq!(value, 2000.0);

        // consultation discounts heavily
        let (value, _) = resolve_base_value(
            &pricing,
            &brand("Luxury"),
            &analysis_for(ProjectType::Consultation),
        );
        assert_eq!(value, 1500.0);
    }

    #[test]
    fn test_zero_average_disables_product_pricing() {
        // has_pricing_data set but average zero: fall through to the table
        let mut pricing = snapshot_with_average(0.0);
        pricing.category_averages.insert("wedding".to_string(), 1800.0);

        let (_, source) =
            resolve_base_value(&pricing, &brand("Bridal"), &analysis_for(ProjectType::Wedding));
        assert_eq!(source, PricingSource::CategoryAverage);
    }
}
