//! API handlers for the Web API.

pub mod file;
pub mod text;

use std::sync::Arc;

use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle.
    pub db: Arc<Database>,
    /// Maximum upload size in megabytes.
    pub max_file_size_mb: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Arc<Database>, max_file_size_mb: u64) -> Self {
        Self {
            db,
            max_file_size_mb,
        }
    }

    /// Maximum upload size in bytes.
    pub fn max_upload_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}
