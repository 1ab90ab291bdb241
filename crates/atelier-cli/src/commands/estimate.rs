//! Ad-hoc estimation command

use std::sync::Arc;

use anyhow::Result;
use atelier_core::db::Database;
use atelier_core::estimate::{CustomerDetails, RevenueEstimator};

use super::resolve_brand;

pub async fn cmd_estimate(
    db: &Database,
    brand: &str,
    message: &str,
    inquiry_type: &str,
    company: Option<&str>,
    json: bool,
) -> Result<()> {
    let brand = resolve_brand(db, brand)?;

    let customer = company.map(|name| CustomerDetails {
        company_name: Some(name.to_string()),
        ..Default::default()
    });

    let estimator = RevenueEstimator::new(Arc::new(db.clone()), Arc::new(db.clone()));
    let estimate = estimator
        .estimate(brand.id, message, inquiry_type, customer.as_ref())
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
        return Ok(());
    }

    println!("💰 Estimate for '{}'", brand.name);
    println!("   ─────────────────────────────");
    println!("   Estimated value: ${}", estimate.estimated_value);
    println!("   Confidence: {}%", estimate.confidence_score);
    println!("   Pricing source: {}", estimate.pricing_source);
    println!();
    println!("   Base value: ${}", estimate.breakdown.base_value);
    println!("   Multipliers: project {:.1} × quantity {:.1} × urgency {:.1} × luxury {:.1}",
        estimate.breakdown.project_multiplier,
        estimate.breakdown.quantity_multiplier,
        estimate.breakdown.urgency_multiplier,
        estimate.breakdown.luxury_multiplier,
    );
    println!();
    println!("   👉 {}", estimate.recommended_follow_up);

    Ok(())
}
