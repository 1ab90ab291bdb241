//! Atelier Web Server
//!
//! Axum-based REST API for the Atelier marketplace lead desk.
//!
//! Security features:
//! - Bearer API-key authentication (secure by default, use --no-auth for
//!   local dev)
//! - Restrictive CORS policy
//! - Security headers on every response
//! - Sanitized error responses

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{error, info, warn};

use atelier_core::db::Database;
use atelier_core::estimate::RevenueEstimator;

mod handlers;


/// Authorization header for API key auth
const AUTHORIZATION_HEADER: &str = "authorization";

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Whether authentication is required (secure by default)
    pub require_auth: bool,
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// API keys for back-office access
    /// Format: "Bearer <key>" in Authorization header
    pub api_keys: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            require_auth: true,
            allowed_origins: vec![],
            api_keys: vec![],
        }
    }
}

/// Shared application state
pub struct AppState {
    pub db: Database,
    pub estimator: RevenueEstimator,
    pub config: ServerConfig,
}

/// Generic success body for mutation endpoints
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Authentication middleware - validates bearer API keys
///
/// Keys are compared using constant-time comparison to prevent timing
/// attacks.
async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.require_auth {
        return next.run(request).await;
    }

    let api_key_valid = request
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(|key| validate_api_key(key, &state.config.api_keys))
        .unwrap_or(false);

    if api_key_valid {
        return next.run(request).await;
    }

    warn!(path = %request.uri().path(), "Unauthorized request - no valid auth");
    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({
            "error": "Authentication required"
        })),
    )
        .into_response()
}

/// Validate an API key against the configured keys using constant-time
/// comparison.
fn validate_api_key(provided: &str, valid_keys: &[String]) -> bool {
    use subtle::ConstantTimeEq;

    let provided_bytes = provided.as_bytes();

    for key in valid_keys {
        let key_bytes = key.as_bytes();
        // Only compare if lengths match (constant-time for same-length keys)
        if provided_bytes.len() == key_bytes.len() && bool::from(provided_bytes.ct_eq(key_bytes)) {
            return true;
        }
    }
    false
}

/// Build the application router
pub fn create_router(db: Database, config: ServerConfig) -> Router {
    let estimator = RevenueEstimator::new(Arc::new(db.clone()), Arc::new(db.clone()));

    let state = Arc::new(AppState {
        db,
        estimator,
        config: config.clone(),
    });

    let api_routes = Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Brands
        .route(
            "/brands",
            get(handlers::list_brands).post(handlers::create_brand),
        )
        .route("/brands/:id", get(handlers::get_brand))
        .route(
            "/brands/:id/products",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/brands/:id/pricing",
            get(handlers::get_brand_pricing),
        )
        // Estimation (ad hoc, nothing persisted)
        .route("/estimate", post(handlers::estimate_lead))
        // Leads
        .route(
            "/leads",
            get(handlers::list_leads).post(handlers::create_lead),
        )
        .route("/leads/:id", get(handlers::get_lead))
        .route(
            "/leads/:id/status",
            post(handlers::update_lead_status),
        );

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    };

    Router::new()
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

/// Start the server
pub async fn serve(db: Database, host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    if !config.require_auth {
        warn!("⚠️  Authentication disabled - do not expose to network!");
    } else if config.api_keys.is_empty() {
        warn!("⚠️  Authentication enabled but no API keys configured - all requests will be rejected");
    }

    let app = create_router(db, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn conflict(msg: &str) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: msg.to_string(),
            internal: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
