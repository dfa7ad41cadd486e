//! Admin Handlers
//!
//! HTTP handlers for admin password setup and login.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::api::AppState;
use crate::error::Result;
use crate::models::{
    AdminStatusResponse, LoginResponse, PasswordRequest, SetupResponse,
};

/// Handler for GET /api/admin/status
pub async fn status_handler(State(state): State<AppState>) -> Result<Json<AdminStatusResponse>> {
    Ok(Json(AdminStatusResponse {
        configured: state.admin.is_configured()?,
    }))
}

/// Handler for POST /api/admin/setup
///
/// Only succeeds while no password is set.
pub async fn setup_handler(
    State(state): State<AppState>,
    Json(req): Json<PasswordRequest>,
) -> Result<(StatusCode, Json<SetupResponse>)> {
    state.admin.setup(req.password).await?;
    info!("admin password configured");
    Ok((StatusCode::CREATED, Json(SetupResponse::created())))
}

/// Handler for POST /api/admin/login
pub async fn login_handler(
    State(state): State<AppState>,
    Json(req): Json<PasswordRequest>,
) -> Result<Json<LoginResponse>> {
    state.admin.login(req.password).await?;
    info!("admin login accepted");
    Ok(Json(LoginResponse {
        authenticated: true,
    }))
}
