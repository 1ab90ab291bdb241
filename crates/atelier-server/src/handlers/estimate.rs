//! Ad-hoc estimation handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use atelier_core::estimate::{CustomerDetails, LeadEstimate};

use crate::{AppError, AppState};

/// Request body for POST /api/estimate
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub brand_id: i64,
    pub message: String,
    #[serde(default = "default_inquiry_type")]
    pub inquiry_type: String,
    pub customer_details: Option<CustomerDetails>,
}

fn default_inquiry_type() -> String {
    "general".to_string()
}

/// POST /api/estimate - Estimate a lead's revenue potential without
/// recording anything.
///
/// Always returns 200 with an estimate; when brand data cannot be fetched
/// the result carries `pricing_source == "industry_fallback"` instead of an
/// error (callers distinguish real from fallback estimates that way).
pub async fn estimate_lead(
    State(state): State<Arc<AppState>>,
    Json(body): Json<EstimateRequest>,
) -> Result<Json<LeadEstimate>, AppError> {
    let estimate = state
        .estimator
        .estimate(
            body.brand_id,
            &body.message,
            &body.inquiry_type,
            body.customer_details.as_ref(),
        )
        .await;

    Ok(Json(estimate))
}
