//! Multiplier computation
//!
//! Each multiplier is derived independently from the raw message (lower-cased)
//! or the customer metadata; they combine multiplicatively in the engine.

use super::analyzer::MessageAnalyzer;
use super::types::{CustomerDetails, Multipliers};

const LUXURY_KEYWORDS: &[&str] = &["luxury", "premium", "high-end", "exclusive", "designer"];

/// Quantity multipliers are capped so bulk inquiries don't dominate the
/// estimate.
const MAX_QUANTITY_MULTIPLIER: f64 = 5.0;

/// Compute the five value multipliers for an inquiry.
pub fn compute_multipliers(
    analyzer: &MessageAnalyzer,
    message: &str,
    customer: Option<&CustomerDetails>,
) -> Multipliers {
    let lower = message.to_lowercase();

    let project = if lower.contains("complex") || lower.contains("detailed") {
        1.3
    } else {
        1.0
    };

    let count = analyzer.extract_quantity(message);
    let quantity = if count > 1 {
        (1.0 + f64::from(count - 1) * 0.8).min(MAX_QUANTITY_MULTIPLIER)
    } else {
        1.0
    };

    // "urgent"/"asap" outrank "rush" when both appear
    let urgency = if lower.contains("urgent") || lower.contains("asap") {
        1.4
    } else if lower.contains("rush") {
        1.2
    } else {
        1.0
    };

    let luxury = if LUXURY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        1.5
    } else {
        1.0
    };

    let corporate = match customer.and_then(|c| c.company_name.as_deref()) {
        Some(name) if !name.trim().is_empty() => 1.2,
        _ => 1.0,
    };

    Multipliers {
        project,
        quantity,
        urgency,
        luxury,
        corporate,
    }
}
