//! The `resume.json` exchange format: the bare record, no envelope.

pub mod handlers;

use anyhow::Context;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::resume::Resume;
use crate::schema::{migrate, Migrated};

pub const RESUME_FILE_NAME: &str = "resume.json";

/// Serializes `resume` with two-space indentation and fields in schema order.
pub fn export_resume_json(resume: &Resume) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(resume).context("Failed to serialize resume")?)
}

/// Parses an uploaded file and migrates it to the current shape. Only
/// malformed or oversize payloads are rejected; any JSON value migrates.
pub fn import_resume_json(bytes: &[u8], max_bytes: usize) -> Result<Migrated, AppError> {
    if bytes.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "{RESUME_FILE_NAME} must be at most {max_bytes} bytes"
        )));
    }
    let raw: Value = serde_json::from_slice(bytes)
        .map_err(|e| AppError::Validation(format!("{RESUME_FILE_NAME} is not valid JSON: {e}")))?;
    Ok(migrate(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{default_resume, validate, MigrationStatus};

    #[test]
    fn test_export_round_trips_byte_for_byte() {
        let exported = export_resume_json(&default_resume()).unwrap();
        let parsed: Value = serde_json::from_str(&exported).unwrap();
        let revalidated = validate(&parsed).unwrap();
        assert_eq!(export_resume_json(&revalidated).unwrap(), exported);
    }

    #[test]
    fn test_export_uses_two_space_indent_and_field_order() {
        let exported = export_resume_json(&default_resume()).unwrap();
        assert!(exported.starts_with("{\n  \"basics\": {\n    \"name\": "));
        let positions: Vec<usize> = [
            "basics",
            "links",
            "skills",
            "experience",
            "projects",
            "education",
            "ui",
        ]
        .iter()
        .map(|key| exported.find(&format!("\n  \"{key}\":")).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_import_rejects_non_json() {
        let err = import_resume_json(b"name: Alex", 1024).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_import_rejects_oversize_payload() {
        let err = import_resume_json(&[b' '; 32], 16).unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
    }

    #[test]
    fn test_import_migrates_any_json() {
        let migrated = import_resume_json(b"[1, 2, 3]", 1024).unwrap();
        assert_eq!(migrated.status, MigrationStatus::Defaulted);
        assert_eq!(migrated.resume, default_resume());

        let exported = export_resume_json(&default_resume()).unwrap();
        let migrated = import_resume_json(exported.as_bytes(), 64 * 1024).unwrap();
        assert_eq!(migrated.status, MigrationStatus::Valid);
    }
}
