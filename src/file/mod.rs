//! File records: persistence and business logic.

mod repository;
mod service;

pub use repository::{FileRecord, FileRepository, NewFileRecord};
pub use service::{FileService, StoreFile, MASKED_FILE_NAME};

/// Content type used when nothing better can be determined.
pub const GENERIC_BINARY_TYPE: &str = "application/octet-stream";
