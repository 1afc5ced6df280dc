//! Profile lifecycle: bootstrap, load (with migration), save, create, delete,
//! reset, and the active-profile preference.

use std::sync::Arc;

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::models::profile::{
    ProfileListItem, ProfileRow, StoredProfile, ACTIVE_PROFILE_SEGMENT, DEFAULT_PROFILE_ID,
};
use crate::models::resume::Resume;
use crate::profiles::store::ProfileStore;
use crate::schema::{default_resume, migrate, validate_resume, Migrated, MigrationStatus};

/// A profile as handed to callers, with the outcome of migrating its stored
/// record. `recovered` is true whenever user data was replaced by defaults.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedProfile {
    pub profile: StoredProfile,
    pub status: MigrationStatus,
    pub recovered: bool,
}

impl LoadedProfile {
    fn new(profile: StoredProfile, status: MigrationStatus) -> Self {
        Self {
            profile,
            status,
            recovered: status.is_recovery(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutcome {
    pub deleted: String,
    pub active_profile_id: String,
}

/// Rejects ids that cannot be addressed as a single `/profiles/:id` segment.
fn check_profile_id(profile_id: &str) -> Result<(), AppError> {
    if profile_id == ACTIVE_PROFILE_SEGMENT {
        return Err(AppError::Validation(format!(
            "Profile name '{ACTIVE_PROFILE_SEGMENT}' is reserved."
        )));
    }
    if profile_id.contains('/') {
        return Err(AppError::Validation(
            "Profile name must not contain '/'.".to_string(),
        ));
    }
    Ok(())
}

/// Current time as RFC 3339 UTC with millisecond precision.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn ProfileStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// Seeds the default profile on first run and resolves the active profile.
    /// Returns the active profile id.
    pub async fn bootstrap(&self) -> Result<String, AppError> {
        let profiles = self.store.list().await?;
        if profiles.is_empty() {
            info!("No profiles found; seeding '{DEFAULT_PROFILE_ID}'");
            self.save_profile(DEFAULT_PROFILE_ID, &default_resume())
                .await?;
        }

        let mut active = self
            .store
            .active_profile()
            .await?
            .unwrap_or_else(|| DEFAULT_PROFILE_ID.to_string());
        if self.store.get(&active).await?.is_none() {
            warn!("Active profile '{active}' no longer exists; falling back to default");
            active = DEFAULT_PROFILE_ID.to_string();
        }
        self.store.set_active_profile(&active).await?;

        info!("Active profile: {active}");
        Ok(active)
    }

    /// Loads a profile, migrating its stored record to the current shape.
    /// A missing profile yields the default record without persisting it.
    pub async fn load_profile(&self, profile_id: &str) -> Result<LoadedProfile, AppError> {
        let Some(row) = self.store.get(profile_id).await? else {
            debug!("Profile '{profile_id}' not stored; returning the default record");
            return Ok(LoadedProfile::new(
                StoredProfile {
                    profile_id: profile_id.to_string(),
                    resume: default_resume(),
                    updated_at: now_timestamp(),
                },
                MigrationStatus::Valid,
            ));
        };

        let raw: Value = serde_json::from_str(&row.resume).unwrap_or_else(|e| {
            warn!("Stored record for '{profile_id}' is not valid JSON: {e}");
            Value::Null
        });
        let Migrated { resume, status } = migrate(&raw);
        if status != MigrationStatus::Valid {
            info!("Loaded profile '{profile_id}' with status {status:?}");
        }

        Ok(LoadedProfile::new(
            StoredProfile {
                profile_id: row.profile_id,
                resume,
                updated_at: row.updated_at,
            },
            status,
        ))
    }

    /// Validates and writes `resume` wholesale under `profile_id`.
    pub async fn save_profile(
        &self,
        profile_id: &str,
        resume: &Resume,
    ) -> Result<StoredProfile, AppError> {
        check_profile_id(profile_id)?;
        validate_resume(resume)?;

        let row = ProfileRow {
            profile_id: profile_id.to_string(),
            resume: serde_json::to_string(resume).context("Failed to serialize resume")?,
            updated_at: now_timestamp(),
        };
        if !self.store.put(&row).await? {
            debug!("Skipped stale write for profile '{profile_id}'; returning the stored copy");
            return Ok(self.load_profile(profile_id).await?.profile);
        }

        Ok(StoredProfile {
            profile_id: row.profile_id,
            resume: resume.clone(),
            updated_at: row.updated_at,
        })
    }

    /// Persists an already-migrated record, keeping its migration status.
    pub async fn save_migrated(
        &self,
        profile_id: &str,
        migrated: Migrated,
    ) -> Result<LoadedProfile, AppError> {
        let profile = self.save_profile(profile_id, &migrated.resume).await?;
        Ok(LoadedProfile::new(profile, migrated.status))
    }

    pub async fn list_profiles(&self) -> Result<Vec<ProfileListItem>, AppError> {
        Ok(self.store.list().await?)
    }

    /// Creates a profile seeded with the default record and makes it active.
    pub async fn create_profile(&self, name: &str) -> Result<LoadedProfile, AppError> {
        let profile_id = name.trim();
        if profile_id.is_empty() {
            return Err(AppError::Validation("Profile name is required.".to_string()));
        }
        check_profile_id(profile_id)?;
        if self.store.get(profile_id).await?.is_some() {
            return Err(AppError::Conflict("Profile already exists.".to_string()));
        }

        let profile = self.save_profile(profile_id, &default_resume()).await?;
        self.store.set_active_profile(profile_id).await?;
        info!("Created profile '{profile_id}'");

        Ok(LoadedProfile::new(profile, MigrationStatus::Valid))
    }

    /// Removes a profile. The default profile is never deleted. When the
    /// deleted profile was active, activity moves to the default profile, or
    /// to the first remaining one if the default is absent.
    pub async fn delete_profile(&self, profile_id: &str) -> Result<DeleteOutcome, AppError> {
        if profile_id == DEFAULT_PROFILE_ID {
            return Err(AppError::Forbidden(
                "The default profile cannot be deleted.".to_string(),
            ));
        }
        if !self.store.delete(profile_id).await? {
            return Err(AppError::NotFound(format!("Profile '{profile_id}'")));
        }
        info!("Deleted profile '{profile_id}'");

        let mut active = self
            .store
            .active_profile()
            .await?
            .unwrap_or_else(|| DEFAULT_PROFILE_ID.to_string());

        if active == profile_id {
            let remaining = self.store.list().await?;
            active = if remaining.iter().any(|p| p.profile_id == DEFAULT_PROFILE_ID) {
                DEFAULT_PROFILE_ID.to_string()
            } else {
                remaining
                    .into_iter()
                    .next()
                    .map(|p| p.profile_id)
                    .unwrap_or_else(|| DEFAULT_PROFILE_ID.to_string())
            };
            self.store.set_active_profile(&active).await?;
            info!("Active profile switched to '{active}'");
        }

        Ok(DeleteOutcome {
            deleted: profile_id.to_string(),
            active_profile_id: active,
        })
    }

    /// Overwrites the profile with the default record.
    pub async fn reset_profile(&self, profile_id: &str) -> Result<StoredProfile, AppError> {
        info!("Resetting profile '{profile_id}' to the default record");
        self.save_profile(profile_id, &default_resume()).await
    }

    pub async fn set_active_profile(&self, profile_id: &str) -> Result<LoadedProfile, AppError> {
        if self.store.get(profile_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Profile '{profile_id}'")));
        }
        self.store.set_active_profile(profile_id).await?;
        self.load_profile(profile_id).await
    }

    pub async fn active_profile(&self) -> Result<LoadedProfile, AppError> {
        let active = self
            .store
            .active_profile()
            .await?
            .unwrap_or_else(|| DEFAULT_PROFILE_ID.to_string());
        self.load_profile(&active).await
    }
}
