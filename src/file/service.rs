//! File service: upload, retrieval with password gating, listing, deletion.

use sqlx::SqlitePool;

use crate::auth::{hash_password, verify_password};
use crate::{Result, SharebinError};

use super::repository::{FileRecord, FileRepository, NewFileRecord};
use super::GENERIC_BINARY_TYPE;

/// Placeholder returned in place of the real file name when a protected
/// record is read without credentials.
pub const MASKED_FILE_NAME: &str = "*****";

/// Request data for storing a file.
#[derive(Debug, Clone)]
pub struct StoreFile {
    /// File name as supplied by the uploader.
    pub file_name: String,
    /// Content type declared by the uploader, if any.
    pub content_type: Option<String>,
    /// Raw payload.
    pub data: Vec<u8>,
    /// Optional free-text note.
    pub remark: Option<String>,
    /// Optional plaintext access password.
    pub password: Option<String>,
}

impl StoreFile {
    /// Create a new store request.
    pub fn new(file_name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            data,
            remark: None,
            password: None,
        }
    }

    /// Set the declared content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
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

/// Service for file record operations.
pub struct FileService<'a> {
    files: FileRepository<'a>,
}

impl<'a> FileService<'a> {
    /// Create a new FileService on the given pool.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self {
            files: FileRepository::new(pool),
        }
    }

    /// Store an uploaded file.
    ///
    /// The file name is reduced to its final path component; the content
    /// type falls back to extension inference when none is declared. A
    /// blank password stores the record unprotected.
    pub async fn store(&self, upload: StoreFile) -> Result<FileRecord> {
        let file_name = sanitize_file_name(&upload.file_name)?;
        let file_type = resolve_content_type(&file_name, upload.content_type.as_deref());

        let password = match upload.password.as_deref() {
            Some(p) => hash_password(p)?,
            None => None,
        };

        self.files
            .create(&NewFileRecord {
                file_name,
                file_type,
                data: upload.data,
                remark: upload.remark,
                password,
            })
            .await
    }

    /// Store raw bytes as an unprotected generic binary file.
    ///
    /// Used for text-as-file uploads; no remark, no password.
    pub async fn store_raw(&self, file_name: &str, data: Vec<u8>) -> Result<FileRecord> {
        self.files
            .create(&NewFileRecord {
                file_name: file_name.to_string(),
                file_type: GENERIC_BINARY_TYPE.to_string(),
                data,
                remark: None,
                password: None,
            })
            .await
    }

    /// Fetch a file record without credentials.
    ///
    /// For a protected record the returned copy has its file name replaced
    /// by [`MASKED_FILE_NAME`]; the payload is left as stored. The
    /// persisted record is never modified.
    pub async fn fetch(&self, id: i64) -> Result<FileRecord> {
        let mut record = self
            .files
            .get_by_id(id)
            .await?
            .ok_or_else(|| SharebinError::NotFound(format!("file with id {id}")))?;

        if record.is_protected() {
            record.file_name = MASKED_FILE_NAME.to_string();
        }
        Ok(record)
    }

    /// Fetch a file record with a password.
    ///
    /// Unprotected records ignore the supplied password entirely.
    pub async fn fetch_with_password(&self, id: i64, password: &str) -> Result<FileRecord> {
        let record = self
            .files
            .get_by_id(id)
            .await?
            .ok_or_else(|| SharebinError::NotFound(format!("file with id {id}")))?;

        if let Some(ref hash) = record.password {
            if !verify_password(password, hash) {
                return Err(SharebinError::InvalidPassword);
            }
        }
        Ok(record)
    }

    /// List all file records, newest first. No masking is applied here;
    /// the presentation layer decides which metadata to expose.
    pub async fn list(&self) -> Result<Vec<FileRecord>> {
        self.files.list().await
    }

    /// Delete a file record.
    ///
    /// Deletion is unconditional; there is no ownership or password check
    /// beyond the record existing.
    pub async fn delete(&self, id: i64) -> Result<()> {
        if !self.files.delete(id).await? {
            return Err(SharebinError::NotFound(format!("file with id {id}")));
        }
        Ok(())
    }
}

/// Reduce a file name to its final path component.
///
/// Separators are stripped so an uploaded name can never address another
/// path; a name that is empty or a bare `..` after cleaning is rejected.
fn sanitize_file_name(name: &str) -> Result<String> {
    let cleaned = name
        .trim()
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or("")
        .to_string();

    if cleaned.is_empty() || cleaned == "." || cleaned == ".." {
        return Err(SharebinError::Validation(format!(
            "invalid file name: {name:?}"
        )));
    }
    Ok(cleaned)
}

/// Pick the content type for an upload.
///
/// A non-empty declared type wins; otherwise the type is inferred from
/// the file extension.
fn resolve_content_type(file_name: &str, declared: Option<&str>) -> String {
    match declared {
        Some(ct) if !ct.is_empty() => ct.to_string(),
        _ => content_type_for(file_name).to_string(),
    }
}

/// Infer a content type from the file extension (case-insensitive).
///
/// Only a fixed set of extensions maps to a concrete type; everything
/// else downloads as a generic binary.
fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("doc") => "application/msword",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("xls") => "application/vnd.ms-excel",
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => GENERIC_BINARY_TYPE,
    }
}
