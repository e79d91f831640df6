//! Request DTOs for the Web API.
//!
//! Required fields are deserialized as options and checked in the
//! handlers, so a missing field answers with the uniform 400 error body
//! instead of the framework's rejection.

use serde::Deserialize;

/// Password verification request (form).
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    /// Plaintext password to check.
    pub password: Option<String>,
}

/// Text snippet upload request (form).
#[derive(Debug, Deserialize)]
pub struct TextUploadRequest {
    /// Snippet content.
    pub content: Option<String>,
    /// Optional note.
    #[serde(default)]
    pub remark: Option<String>,
    /// Optional access password.
    #[serde(default)]
    pub password: Option<String>,
}

/// Text-as-file upload request (form).
#[derive(Debug, Deserialize)]
pub struct TextAsFileRequest {
    /// Content stored as the file payload.
    pub content: Option<String>,
    /// Download name for the new file.
    #[serde(rename = "fileName")]
    pub file_name: Option<String>,
}

/// Query parameter carrying an optional password.
#[derive(Debug, Deserialize)]
pub struct PasswordQuery {
    /// Plaintext password, if supplied.
    pub password: Option<String>,
}
