//! Text service: storage, retrieval with password gating, listing, deletion.

use sqlx::SqlitePool;

use crate::auth::{hash_password, verify_password};
use crate::{Result, SharebinError};

use super::repository::{NewTextRecord, TextRecord, TextRepository};

/// Placeholder returned in place of the real content when a protected
/// record is read without credentials.
pub const MASKED_CONTENT: &str = "*****";

/// Request data for storing a text snippet.
#[derive(Debug, Clone)]
pub struct StoreText {
    /// The snippet content.
    pub content: String,
    /// Optional free-text note.
    pub remark: Option<String>,
    /// Optional plaintext access password.
    pub password: Option<String>,
}

impl StoreText {
    /// Create a new store request.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            remark: None,
            password: None,
        }
    }

    /// Set the remark.
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = Some(remark.into());
        self
    }

    /// Set the access password.
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Service for text record operations.
pub struct TextService<'a> {
    texts: TextRepository<'a>,
}

impl<'a> TextService<'a> {
    /// Create a new TextService on the given pool.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            texts: TextRepository::new(pool),
        }
    }

    /// Store a text snippet. A blank password stores it unprotected.
    pub async fn store(&self, upload: StoreText) -> Result<TextRecord> {
        let password = match upload.password.as_deref() {
            Some(p) => hash_password(p)?,
            None => None,
        };

        self.texts
            .create(&NewTextRecord {
                content: upload.content,
                remark: upload.remark,
                password,
            })
            .await
    }

    /// Fetch a text record without credentials.
    ///
    /// For a protected record the returned copy has its content replaced
    /// by [`MASKED_CONTENT`]. The persisted record is never modified.
    pub async fn fetch(&self, id: i64) -> Result<TextRecord> {
        let mut record = self
            .texts
            .get_by_id(id)
            .await?
            .ok_or_else(|| SharebinError::NotFound(format!("text with id {id}")))?;

        if record.is_protected() {
            record.content = MASKED_CONTENT.to_string();
        }
        Ok(record)
    }

    /// Fetch a text record with a password.
    ///
    /// Unprotected records ignore the supplied password entirely.
    pub async fn fetch_with_password(&self, id: i64, password: &str) -> Result<TextRecord> {
        let record = self
            .texts
            .get_by_id(id)
            .await?
            .ok_or_else(|| SharebinError::NotFound(format!("text with id {id}")))?;

        if let Some(ref hash) = record.password {
            if !verify_password(password, hash) {
                return Err(SharebinError::InvalidPassword);
            }
        }
        Ok(record)
    }

    /// List all text records, newest first.
    ///
    /// Records are returned as stored; the presentation layer masks the
    /// content of protected entries.
    pub async fn list(&self) -> Result<Vec<TextRecord>> {
        self.texts.list().await
    }

    /// Delete a text record.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.texts.delete(id).await? {
            return Err(SharebinError::NotFound(format!("text with id {id}")));
        }
        Ok(())
    }
}
