//! Text record type and repository.

use sqlx::SqlitePool;

use crate::{Result, SharebinError};

/// A stored text snippet.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TextRecord {
    /// Unique text ID, assigned on insert.
    pub id: i64,
    /// The snippet content.
    pub content: String,
    /// Creation timestamp in epoch milliseconds.
    pub create_time: i64,
    /// Optional free-text note.
    pub remark: Option<String>,
    /// Argon2 hash of the access password. `None` means unprotected.
    pub password: Option<String>,
}

impl TextRecord {
    /// Whether a password is required to read this record.
    pub fn is_protected(&self) -> bool {
        self.password.is_some()
    }
}

/// Data for creating a new text record.
#[derive(Debug, Clone)]
pub struct NewTextRecord {
    /// The snippet content.
    pub content: String,
    /// Optional free-text note.
    pub remark: Option<String>,
    /// Argon2 hash of the access password, if any.
    pub password: Option<String>,
}

/// Repository for text record CRUD operations.
pub struct TextRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TextRepository<'a> {
    /// Create a new TextRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new text record.
    pub async fn create(&self, new_text: &NewTextRecord) -> Result<TextRecord> {
        let create_time = chrono::Utc::now().timestamp_millis();

        let result = sqlx::query(
            "INSERT INTO texts (content, create_time, remark, password)
             VALUES (?, ?, ?, ?)",
        )
        .bind(&new_text.content)
        .bind(create_time)
        .bind(&new_text.remark)
        .bind(&new_text.password)
        .execute(self.pool)
        .await
        .map_err(|e| SharebinError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| SharebinError::NotFound(format!("text with id {id}")))
    }

    /// Get a text record by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<TextRecord>> {
        let record = sqlx::query_as::<_, TextRecord>(
            "SELECT id, content, create_time, remark, password
             FROM texts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| SharebinError::Database(e.to_string()))?;

        Ok(record)
    }

    /// List all text records, newest first.
    pub async fn list(&self) -> Result<Vec<TextRecord>> {
        let records = sqlx::query_as::<_, TextRecord>(
            "SELECT id, content, create_time, remark, password
             FROM texts ORDER BY create_time DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| SharebinError::Database(e.to_string()))?;

        Ok(records)
    }

    /// Delete a text record by ID.
    ///
    /// Returns true if a record was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM texts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| SharebinError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    fn sample_text(content: &str) -> NewTextRecord {
        NewTextRecord {
            content: content.to_string(),
            remark: None,
            password: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let db = setup_db().await;
        let repo = TextRepository::new(db.pool());

        let record = repo.create(&sample_text("hello world")).await.unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.content, "hello world");
        assert!(record.create_time > 0);

        let fetched = repo.get_by_id(record.id).await.unwrap().unwrap();
        assert_eq!(fetched.content, "hello world");
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = setup_db().await;
        let repo = TextRepository::new(db.pool());

        repo.create(&sample_text("one")).await.unwrap();
        repo.create(&sample_text("two")).await.unwrap();

        let records = repo.list().await.unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = setup_db().await;
        let repo = TextRepository::new(db.pool());

        let record = repo.create(&sample_text("bye")).await.unwrap();
        assert!(repo.delete(record.id).await.unwrap());
        assert!(!repo.delete(record.id).await.unwrap());
        assert!(repo.get_by_id(record.id).await.unwrap().is_none());
    }
}
