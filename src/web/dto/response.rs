//! Response DTOs for the Web API.
//!
//! All fields serialize in camelCase, which is the wire format clients
//! of this API expect.

use serde::Serialize;
use utoipa::ToSchema;

/// Upload limit configuration response.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadConfigResponse {
    /// Maximum upload size in megabytes.
    pub max_file_size: u64,
}

/// Metadata returned after a file upload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadResponse {
    /// Assigned file ID.
    pub id: i64,
    /// Stored file name.
    pub file_name: String,
    /// Stored content type.
    pub file_type: String,
    /// Payload size in bytes.
    pub size: usize,
    /// Optional note.
    pub remark: Option<String>,
    /// Creation timestamp in epoch milliseconds.
    pub create_time: i64,
}

/// File metadata in listings.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileInfoResponse {
    /// File ID.
    pub id: i64,
    /// File name.
    pub file_name: String,
    /// Content type.
    pub file_type: String,
    /// Payload size in bytes.
    pub size: usize,
    /// Creation timestamp in epoch milliseconds.
    pub create_time: i64,
    /// Optional note.
    pub remark: Option<String>,
    /// Whether a password is required to download.
    pub password_protected: bool,
}

/// Metadata returned after a text upload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextUploadResponse {
    /// Assigned text ID.
    pub id: i64,
    /// Stored content.
    pub content: String,
    /// Optional note.
    pub remark: Option<String>,
    /// Creation timestamp in epoch milliseconds.
    pub create_time: i64,
}

/// A text snippet in fetch and list responses.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextResponse {
    /// Text ID.
    pub id: i64,
    /// Content, masked for protected records read without credentials.
    pub content: String,
    /// Optional note.
    pub remark: Option<String>,
    /// Creation timestamp in epoch milliseconds.
    pub create_time: i64,
    /// Whether a password is required to read the content.
    pub password_protected: bool,
}
