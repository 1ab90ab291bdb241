//! Brand and product handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use atelier_core::models::{Brand, NewProduct, Product};
use atelier_core::pricing::BrandPricingSnapshot;

use crate::{AppError, AppState};

/// Request body for creating a brand
#[derive(Debug, Deserialize)]
pub struct CreateBrandRequest {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price_range: String,
}

/// GET /api/brands - List the brand directory
pub async fn list_brands(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Brand>>, AppError> {
    Ok(Json(state.db.list_brands()?))
}

/// POST /api/brands - Create a brand (idempotent by name)
pub async fn create_brand(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateBrandRequest>,
) -> Result<Json<Brand>, AppError> {
    if body.name.trim().is_empty() {
        return Err(AppError::bad_request("Brand name is required"));
    }

    let id = state.db.upsert_brand(
        body.name.trim(),
        &body.category,
        &body.location,
        &body.price_range,
    )?;

    let brand = state
        .db
        .get_brand(id)?
        .ok_or_else(|| AppError::not_found("Brand not found after creation"))?;

    Ok(Json(brand))
}

/// GET /api/brands/:id - Get a single brand
pub async fn get_brand(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Brand>, AppError> {
    let brand = state
        .db
        .get_brand(id)?
        .ok_or_else(|| AppError::not_found("Brand not found"))?;

    Ok(Json(brand))
}

/// GET /api/brands/:id/products - List a brand's catalogue
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Product>>, AppError> {
    state
        .db
        .get_brand(id)?
        .ok_or_else(|| AppError::not_found("Brand not found"))?;

    Ok(Json(state.db.list_products(id)?))
}

/// POST /api/brands/:id/products - Add or update a product
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<NewProduct>,
) -> Result<Json<Vec<Product>>, AppError> {
    state
        .db
        .get_brand(id)?
        .ok_or_else(|| AppError::not_found("Brand not found"))?;

    if body.title.trim().is_empty() {
        return Err(AppError::bad_request("Product title is required"));
    }

    state.db.upsert_product(id, &body)?;

    Ok(Json(state.db.list_products(id)?))
}

/// GET /api/brands/:id/pricing - Aggregate pricing snapshot for a brand
pub async fn get_brand_pricing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<BrandPricingSnapshot>, AppError> {
    state
        .db
        .get_brand(id)?
        .ok_or_else(|| AppError::not_found("Brand not found"))?;

    Ok(Json(state.db.brand_pricing_snapshot(id)?))
}
