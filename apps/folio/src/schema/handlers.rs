use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::models::resume::Resume;
use crate::schema::{migrate, validate, MigrationStatus, ValidationErrors};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume: Option<Resume>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ValidationErrors>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrateResponse {
    pub resume: Resume,
    pub status: MigrationStatus,
    pub recovered: bool,
}

/// POST /api/v1/validate
///
/// Always 200: the outcome is in the body, listing every violation.
pub async fn handle_validate(Json(raw): Json<Value>) -> Json<ValidateResponse> {
    Json(match validate(&raw) {
        Ok(resume) => ValidateResponse {
            valid: true,
            resume: Some(resume),
            errors: None,
        },
        Err(errors) => ValidateResponse {
            valid: false,
            resume: None,
            errors: Some(errors),
        },
    })
}

/// POST /api/v1/migrate
pub async fn handle_migrate(Json(raw): Json<Value>) -> Json<MigrateResponse> {
    let migrated = migrate(&raw);
    let recovered = migrated.was_recovered();
    Json(MigrateResponse {
        resume: migrated.resume,
        status: migrated.status,
        recovered,
    })
}
