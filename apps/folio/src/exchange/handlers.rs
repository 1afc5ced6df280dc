use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::exchange::{export_resume_json, import_resume_json, RESUME_FILE_NAME};
use crate::profiles::service::LoadedProfile;
use crate::state::AppState;

/// GET /api/v1/profiles/:id/export
pub async fn handle_export(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let loaded = state.profiles.load_profile(&profile_id).await?;
    let body = export_resume_json(&loaded.profile.resume)?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{RESUME_FILE_NAME}\""),
            ),
        ],
        body,
    ))
}

/// POST /api/v1/profiles/:id/import
pub async fn handle_import(
    State(state): State<AppState>,
    Path(profile_id): Path<String>,
    body: Bytes,
) -> Result<Json<LoadedProfile>, AppError> {
    let migrated = import_resume_json(&body, state.config.max_upload_bytes)?;
    let loaded = state.profiles.save_migrated(&profile_id, migrated).await?;
    Ok(Json(loaded))
}
