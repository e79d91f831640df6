//! File record type and repository.

use sqlx::SqlitePool;

use crate::{Result, SharebinError};

/// A stored file: metadata plus the raw payload.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FileRecord {
    /// Unique file ID, assigned on insert.
    pub id: i64,
    /// Display name used for downloads.
    pub file_name: String,
    /// MIME type, declared by the uploader or inferred from the extension.
    pub file_type: String,
    /// Raw payload. Opaque, never validated.
    pub data: Vec<u8>,
    /// Creation timestamp in epoch milliseconds.
    pub create_time: i64,
    /// Optional free-text note.
    pub remark: Option<String>,
    /// Argon2 hash of the access password. `None` means unprotected.
    pub password: Option<String>,
}

impl FileRecord {
    /// Whether a password is required to read this record.
    pub fn is_protected(&self) -> bool {
        self.password.is_some()
    }
}

/// Data for creating a new file record.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    /// Display name used for downloads.
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// Raw payload.
    pub data: Vec<u8>,
    /// Optional free-text note.
    pub remark: Option<String>,
    /// Argon2 hash of the access password, if any.
    pub password: Option<String>,
}

/// Repository for file record CRUD operations.
pub struct FileRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FileRepository<'a> {
    /// Create a new FileRepository with the given database pool reference.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new file record.
    ///
    /// The creation timestamp is stamped here; returns the stored record
    /// with its assigned ID.
    pub async fn create(&self, new_file: &NewFileRecord) -> Result<FileRecord> {
        let create_time = chrono::Utc::now().timestamp_millis();

        let result = sqlx::query(
            "INSERT INTO files (file_name, file_type, data, create_time, remark, password)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new_file.file_name)
        .bind(&new_file.file_type)
        .bind(&new_file.data)
        .bind(create_time)
        .bind(&new_file.remark)
        .bind(&new_file.password)
        .execute(self.pool)
        .await
        .map_err(|e| SharebinError::Database(e.to_string()))?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .ok_or_else(|| SharebinError::NotFound(format!("file with id {id}")))
    }

    /// Get a file record by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<FileRecord>> {
        let record = sqlx::query_as::<_, FileRecord>(
            "SELECT id, file_name, file_type, data, create_time, remark, password
             FROM files WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| SharebinError::Database(e.to_string()))?;

        Ok(record)
    }

    /// List all file records, newest first.
    pub async fn list(&self) -> Result<Vec<FileRecord>> {
        let records = sqlx::query_as::<_, FileRecord>(
            "SELECT id, file_name, file_type, data, create_time, remark, password
             FROM files ORDER BY create_time DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await
        .map_err(|e| SharebinError::Database(e.to_string()))?;

        Ok(records)
    }

    /// Delete a file record by ID.
    ///
    /// Returns true if a record was deleted, false if not found.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| SharebinError::Database(e.to_string()))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all file records.
    pub async fn count(&self) -> Result<i64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM files")
            .fetch_one(self.pool)
            .await
            .map_err(|e| SharebinError::Database(e.to_string()))?;
        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    fn sample_file(name: &str) -> NewFileRecord {
        NewFileRecord {
            file_name: name.to_string(),
            file_type: "application/octet-stream".to_string(),
            data: b"payload".to_vec(),
            remark: None,
            password: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamp() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        let record = repo.create(&sample_file("a.bin")).await.unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.file_name, "a.bin");
        assert_eq!(record.data, b"payload");
        assert!(record.create_time > 0);
        assert!(!record.is_protected());
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        assert!(repo.get_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        repo.create(&sample_file("first.bin")).await.unwrap();
        repo.create(&sample_file("second.bin")).await.unwrap();
        repo.create(&sample_file("third.bin")).await.unwrap();

        let records = repo.list().await.unwrap();
        assert_eq!(records.len(), 3);

        // Newest first; id is the tie-break for same-millisecond inserts
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        for pair in records.windows(2) {
            assert!(pair[0].create_time >= pair[1].create_time);
        }
    }

    #[tokio::test]
    async fn test_delete() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        let record = repo.create(&sample_file("gone.bin")).await.unwrap();

        assert!(repo.delete(record.id).await.unwrap());
        assert!(repo.get_by_id(record.id).await.unwrap().is_none());
        assert!(!repo.delete(record.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        let first = repo.create(&sample_file("a.bin")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.create(&sample_file("b.bin")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_stores_password_hash_and_remark() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        let mut new_file = sample_file("locked.bin");
        new_file.remark = Some("a note".to_string());
        new_file.password = Some("$argon2id$fake".to_string());

        let record = repo.create(&new_file).await.unwrap();
        assert_eq!(record.remark.as_deref(), Some("a note"));
        assert!(record.is_protected());
    }

    #[tokio::test]
    async fn test_count() {
        let db = setup_db().await;
        let repo = FileRepository::new(db.pool());

        assert_eq!(repo.count().await.unwrap(), 0);
        repo.create(&sample_file("a.bin")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
