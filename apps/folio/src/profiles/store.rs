use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::profile::{ProfileListItem, ProfileRow};

const ACTIVE_PROFILE_KEY: &str = "active_profile";

/// Durable keyed storage for profile records and the active-profile pointer.
///
/// Records are stored as raw JSON text; interpreting them (validation,
/// migration) is the caller's job.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, profile_id: &str) -> Result<Option<ProfileRow>, sqlx::Error>;

    /// Writes `row` unless the stored copy carries a newer `updated_at`.
    /// Returns false when the write was skipped as stale.
    async fn put(&self, row: &ProfileRow) -> Result<bool, sqlx::Error>;

    /// Returns false when no such profile existed.
    async fn delete(&self, profile_id: &str) -> Result<bool, sqlx::Error>;

    /// All profiles ordered by id.
    async fn list(&self) -> Result<Vec<ProfileListItem>, sqlx::Error>;

    async fn active_profile(&self) -> Result<Option<String>, sqlx::Error>;

    async fn set_active_profile(&self, profile_id: &str) -> Result<(), sqlx::Error>;
}

/// SQLite-backed store. One row per profile plus a `settings` key/value table.
#[derive(Clone)]
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn get(&self, profile_id: &str) -> Result<Option<ProfileRow>, sqlx::Error> {
        sqlx::query_as::<_, ProfileRow>(
            "SELECT profile_id, resume, updated_at FROM profiles WHERE profile_id = ?",
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn put(&self, row: &ProfileRow) -> Result<bool, sqlx::Error> {
        // RFC 3339 UTC timestamps with fixed precision compare correctly as text.
        let result = sqlx::query(
            r#"
            INSERT INTO profiles (profile_id, resume, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(profile_id) DO UPDATE SET
                resume = excluded.resume,
                updated_at = excluded.updated_at
            WHERE excluded.updated_at >= profiles.updated_at
            "#,
        )
        .bind(&row.profile_id)
        .bind(&row.resume)
        .bind(&row.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, profile_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE profile_id = ?")
            .bind(profile_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<ProfileListItem>, sqlx::Error> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT profile_id, updated_at FROM profiles ORDER BY profile_id")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(profile_id, updated_at)| ProfileListItem {
                profile_id,
                updated_at,
            })
            .collect())
    }

    async fn active_profile(&self) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
            .bind(ACTIVE_PROFILE_KEY)
            .fetch_optional(&self.pool)
            .await
    }

    async fn set_active_profile(&self, profile_id: &str) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(ACTIVE_PROFILE_KEY)
        .bind(profile_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    async fn store() -> SqliteProfileStore {
        let pool = create_pool("sqlite::memory:").await.unwrap();
        SqliteProfileStore::new(pool)
    }

    fn row(id: &str, resume: &str, updated_at: &str) -> ProfileRow {
        ProfileRow {
            profile_id: id.to_string(),
            resume: resume.to_string(),
            updated_at: updated_at.to_string(),
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = store().await;
        assert!(store
            .put(&row("work", "{}", "2026-01-01T00:00:00.000Z"))
            .await
            .unwrap());

        let fetched = store.get("work").await.unwrap().unwrap();
        assert_eq!(fetched.resume, "{}");
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stale_write_is_skipped() {
        let store = store().await;
        store
            .put(&row("work", "\"new\"", "2026-01-02T00:00:00.000Z"))
            .await
            .unwrap();

        let applied = store
            .put(&row("work", "\"old\"", "2026-01-01T00:00:00.000Z"))
            .await
            .unwrap();

        assert!(!applied);
        assert_eq!(store.get("work").await.unwrap().unwrap().resume, "\"new\"");
    }

    #[tokio::test]
    async fn test_list_is_sorted() {
        let store = store().await;
        for id in ["zeta", "alpha", "default"] {
            store
                .put(&row(id, "{}", "2026-01-01T00:00:00.000Z"))
                .await
                .unwrap();
        }
        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.profile_id)
            .collect();
        assert_eq!(ids, vec!["alpha", "default", "zeta"]);
    }

    #[tokio::test]
    async fn test_delete_and_active_pointer() {
        let store = store().await;
        store
            .put(&row("work", "{}", "2026-01-01T00:00:00.000Z"))
            .await
            .unwrap();

        assert_eq!(store.active_profile().await.unwrap(), None);
        store.set_active_profile("work").await.unwrap();
        store.set_active_profile("default").await.unwrap();
        assert_eq!(
            store.active_profile().await.unwrap().as_deref(),
            Some("default")
        );

        assert!(store.delete("work").await.unwrap());
        assert!(!store.delete("work").await.unwrap());
    }

    #[tokio::test]
    async fn test_file_backed_store_persists_across_pools() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("folio.db").display());

        let pool = create_pool(&url).await.unwrap();
        SqliteProfileStore::new(pool.clone())
            .put(&row("work", "{}", "2026-01-01T00:00:00.000Z"))
            .await
            .unwrap();
        pool.close().await;

        let reopened = SqliteProfileStore::new(create_pool(&url).await.unwrap());
        assert!(reopened.get("work").await.unwrap().is_some());
    }
}
