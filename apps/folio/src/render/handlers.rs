use axum::{extract::Path, response::Html, Json};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::render::{render_document, RenderTarget};
use crate::schema::migrate;

/// POST /api/v1/render/:target
///
/// Renders an unsaved record. The body is migrated first, so any JSON value
/// produces a page.
pub async fn handle_render_preview(
    Path(target): Path<String>,
    Json(raw): Json<Value>,
) -> Result<Html<String>, AppError> {
    let target: RenderTarget = target.parse().map_err(AppError::NotFound)?;
    let migrated = migrate(&raw);
    if migrated.was_recovered() {
        warn!("Preview input was recovered ({:?}) before rendering", migrated.status);
    }
    Ok(Html(render_document(&migrated.resume, target)))
}
