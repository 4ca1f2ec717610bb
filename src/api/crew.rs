//! Crew registration, public tracking and the admin dashboard.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::validation::validate_crew_id;
use super::{
    ApiError, ApiJson, ApiResponse, AppState, CrewMemberDto, RegistrationResponse, TrackRequest,
    TrackResponse,
};
use crate::domain::StageInfo;
use crate::domain::status;
use crate::models::crew::{CrewRegistration, CrewStats};

/// `POST /api/crew/register`
///
/// Public. New records start at the first stage.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<CrewRegistration>,
) -> Result<(StatusCode, Json<ApiResponse<RegistrationResponse>>), ApiError> {
    let crew = state.crew_service().register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RegistrationResponse::from(crew))),
    ))
}

/// `POST /api/track`
///
/// Public status lookup by passport number.
pub async fn track(
    State(state): State<Arc<AppState>>,
    ApiJson(payload): ApiJson<TrackRequest>,
) -> Result<Json<ApiResponse<TrackResponse>>, ApiError> {
    let crew = state.crew_service().track(&payload.passport).await?;
    Ok(Json(ApiResponse::success(TrackResponse::from(crew))))
}

/// `GET /api/stages`
pub async fn list_stages() -> Json<ApiResponse<Vec<StageInfo>>> {
    Json(ApiResponse::success(status::stages()))
}

/// `GET /api/crew`
pub async fn list_crew(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CrewMemberDto>>>, ApiError> {
    let crew = state.crew_service().list().await?;
    Ok(Json(ApiResponse::success(
        crew.into_iter().map(CrewMemberDto::from).collect(),
    )))
}

/// `GET /api/crew/stats`
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<CrewStats>>, ApiError> {
    let stats = state.crew_service().stats().await?;
    Ok(Json(ApiResponse::success(stats)))
}

/// `GET /api/crew/{id}`
pub async fn get_crew(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CrewMemberDto>>, ApiError> {
    let id = validate_crew_id(id)?;
    let crew = state.crew_service().get(id).await?;
    Ok(Json(ApiResponse::success(CrewMemberDto::from(crew))))
}

/// `POST /api/crew/{id}/advance`
///
/// 409 once the record is at the final stage.
pub async fn advance_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<CrewMemberDto>>, ApiError> {
    let id = validate_crew_id(id)?;
    let crew = state.crew_service().advance(id).await?;
    Ok(Json(ApiResponse::success(CrewMemberDto::from(crew))))
}
