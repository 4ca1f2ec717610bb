//! Admin login backed by a server-side cookie session.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_sessions::Session;

use super::validation::validate_credentials;
use super::{ApiError, ApiJson, ApiResponse, AppState};
use crate::constants::session::ADMIN_KEY;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub username: String,
}

#[derive(Serialize)]
pub struct AdminInfoResponse {
    pub username: String,
    pub created_at: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// The admin bound to the request's session cookie.
///
/// Extraction fails with 401 when the session is missing, expired or was
/// logged out.
pub struct AdminSession {
    pub username: String,
}

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| ApiError::internal(msg))?;

        let username = session
            .get::<String>(ADMIN_KEY)
            .await
            .map_err(session_error)?
            .ok_or_else(|| ApiError::unauthorized("Please log in to access the admin dashboard"))?;

        Ok(Self { username })
    }
}

/// Route layer for the dashboard. Tags the request span with the admin.
pub async fn require_admin(admin: AdminSession, request: Request, next: Next) -> Response {
    tracing::Span::current().record("user_id", admin.username.as_str());
    next.run(request).await
}

/// `POST /api/auth/login`
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let (username, password) = validate_credentials(&payload.username, &payload.password)?;

    let admin = state.auth_service().login(username, password).await?;

    // New id on login so a pre-login cookie cannot ride the admin session
    session.cycle_id().await.map_err(session_error)?;
    session
        .insert(ADMIN_KEY, &admin.username)
        .await
        .map_err(session_error)?;

    Ok(Json(ApiResponse::success(LoginResponse {
        username: admin.username,
    })))
}

/// `POST /api/auth/logout`
///
/// Deletes the server-side session, so the old cookie stops working even if
/// a client keeps sending it.
pub async fn logout(session: Session) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if let Ok(Some(username)) = session.get::<String>(ADMIN_KEY).await {
        tracing::info!(username = %username, "Admin logged out");
    }

    session.flush().await.map_err(session_error)?;

    Ok(Json(ApiResponse::success(MessageResponse {
        message: "You have been logged out successfully".to_string(),
    })))
}

/// `GET /api/auth/me`
pub async fn get_current_admin(
    State(state): State<Arc<AppState>>,
    admin: AdminSession,
) -> Result<Json<ApiResponse<AdminInfoResponse>>, ApiError> {
    let admin = state.auth_service().get_admin(&admin.username).await?;

    Ok(Json(ApiResponse::success(AdminInfoResponse {
        username: admin.username,
        created_at: admin.created_at,
    })))
}

fn session_error(e: tower_sessions::session::Error) -> ApiError {
    ApiError::internal(format!("Session error: {e}"))
}
