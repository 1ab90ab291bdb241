//! HTTP request handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};

mod brands;
mod estimate;
mod leads;

pub use brands::{
    create_brand, create_product, get_brand, get_brand_pricing, list_brands, list_products,
};
pub use estimate::estimate_lead;
pub use leads::{create_lead, get_lead, list_leads, update_lead_status};

/// Response body for the health endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub brands: i64,
    pub products: i64,
    pub leads: i64,
}

/// GET /api/health - liveness check with store counts
pub async fn health(State(state): State<Arc<AppState>>) -> Result<Json<HealthResponse>, AppError> {
    Ok(Json(HealthResponse {
        status: "ok",
        brands: state.db.brand_count()?,
        products: state.db.product_count()?,
        leads: state.db.lead_count()?,
    }))
}
