use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::resume::Resume;

/// The `"default"` profile always exists and cannot be deleted.
pub const DEFAULT_PROFILE_ID: &str = "default";

/// Path segment of the active-profile routes; never usable as a profile id.
pub const ACTIVE_PROFILE_SEGMENT: &str = "active";

/// Raw row from the `profiles` table. `resume` is the JSON text exactly as it
/// was written, which may predate the current schema.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub profile_id: String,
    pub resume: String,
    pub updated_at: String,
}

/// A profile whose resume has been validated (or migrated) into the current shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub profile_id: String,
    pub resume: Resume,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileListItem {
    pub profile_id: String,
    pub updated_at: String,
}
