use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::profile::{ProfileListItem, StoredProfile};
use crate::profiles::service::{DeleteOutcome, LoadedProfile};
use crate::render::{render_document, RenderTarget};
use crate::schema::validate;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileRequest {
    pub profile_id: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub profile_id: String,
}

/// GET /api/v1/profiles
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileListItem>>, AppError> {
    Ok(Json(state.profiles.list_profiles().await?))
}

/// POST /api/v1/profiles
pub async fn handle_create(
    State(state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<LoadedProfile>), AppError> {
    let created = state.profiles.create_profile(&req.profile_id).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/v1/profiles/active
pub async fn handle_get_active(
    State(state): State<AppState>,
) -> Result<Json<LoadedProfile>, AppError> {
    Ok(Json(state.profiles.active_profile().await?))
}

/// PUT /api/v1/profiles/active
pub async fn handle_set_active(
    State(state): State<AppState>,
    Json(req): Json<SetActiveRequest>,
) -> Result<Json<LoadedProfile>, AppError> {
    Ok(Json(state.profiles.set_active_profile(&req.profile_id).await?))
}

/// GET /api/v1/profiles/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<LoadedProfile>, AppError> {
    Ok(Json(state.profiles.load_profile(&profile_id).await?))
}

/// PUT /api/v1/profiles/:id
///
/// The body is validated strictly; a 400 lists every violation.
pub async fn handle_save(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    Json(raw): Json<Value>,
) -> Result<Json<StoredProfile>, AppError> {
    let resume = validate(&raw)?;
    Ok(Json(state.profiles.save_profile(&profile_id, &resume).await?))
}

/// DELETE /api/v1/profiles/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<DeleteOutcome>, AppError> {
    Ok(Json(state.profiles.delete_profile(&profile_id).await?))
}

/// POST /api/v1/profiles/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<Json<StoredProfile>, AppError> {
    Ok(Json(state.profiles.reset_profile(&profile_id).await?))
}

/// GET /api/v1/profiles/:id/render/:target
pub async fn handle_render(
    State(state): State<AppState>,
    Path((profile_id, target)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let target: RenderTarget = target.parse().map_err(AppError::NotFound)?;
    let loaded = state.profiles.load_profile(&profile_id).await?;
    Ok(Html(render_document(&loaded.profile.resume, target)))
}
