//! Lead intake and tracking handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use atelier_core::error::Error;
use atelier_core::estimate::{CustomerDetails, LeadEstimate};
use atelier_core::models::{Lead, LeadStatus, NewLead};

use crate::{AppError, AppState, SuccessResponse};

/// Request body for recording a lead
#[derive(Debug, Deserialize)]
pub struct CreateLeadRequest {
    pub brand_id: i64,
    #[serde(flatten)]
    pub lead: NewLead,
}

/// Response for a recorded lead: the row id plus the estimate captured at
/// intake
#[derive(Debug, Serialize)]
pub struct CreateLeadResponse {
    pub lead_id: i64,
    pub estimate: LeadEstimate,
}

/// Query parameters for listing leads
#[derive(Debug, Deserialize)]
pub struct LeadQuery {
    pub brand_id: Option<i64>,
    /// Filter by status (new, contacted, qualified, closed)
    pub status: Option<String>,
}

/// Request body for updating a lead's status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// POST /api/leads - Record a lead and capture its revenue estimate
pub async fn create_lead(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateLeadRequest>,
) -> Result<Json<CreateLeadResponse>, AppError> {
    state
        .db
        .get_brand(body.brand_id)?
        .ok_or_else(|| AppError::not_found("Brand not found"))?;

    if body.lead.customer_email.trim().is_empty() {
        return Err(AppError::bad_request("Customer email is required"));
    }

    let customer = CustomerDetails {
        company_name: body.lead.company_name.clone(),
        location: body.lead.location.clone(),
        referral_source: body.lead.referral_source.clone(),
    };

    let estimate = state
        .estimator
        .estimate(
            body.brand_id,
            &body.lead.message,
            &body.lead.inquiry_type,
            Some(&customer),
        )
        .await;

    let lead_id = match state.db.insert_lead(body.brand_id, &body.lead, &estimate) {
        Ok(id) => id,
        Err(Error::Duplicate(msg)) => return Err(AppError::conflict(&msg)),
        Err(e) => return Err(e.into()),
    };

    Ok(Json(CreateLeadResponse { lead_id, estimate }))
}

/// GET /api/leads - List leads with optional brand/status filters
pub async fn list_leads(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LeadQuery>,
) -> Result<Json<Vec<Lead>>, AppError> {
    let status = match params.status.as_deref() {
        Some(raw) => Some(
            raw.parse::<LeadStatus>()
                .map_err(|e| AppError::bad_request(&e))?,
        ),
        None => None,
    };

    Ok(Json(state.db.list_leads(params.brand_id, status)?))
}

/// GET /api/leads/:id - Get a single lead
pub async fn get_lead(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Lead>, AppError> {
    let lead = state
        .db
        .get_lead(id)?
        .ok_or_else(|| AppError::not_found("Lead not found"))?;

    Ok(Json(lead))
}

/// POST /api/leads/:id/status - Move a lead through its lifecycle
pub async fn update_lead_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let status = body
        .status
        .parse::<LeadStatus>()
        .map_err(|e| AppError::bad_request(&e))?;

    match state.db.update_lead_status(id, status) {
        Ok(()) => Ok(Json(SuccessResponse { success: true })),
        Err(Error::NotFound(msg)) => Err(AppError::not_found(&msg)),
        Err(e) => Err(e.into()),
    }
}
