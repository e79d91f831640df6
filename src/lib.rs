//! sharebin - a small file and text sharing service.
//!
//! Files and text snippets are stored as rows in SQLite (payloads live in
//! BLOB columns) and served over a JSON/multipart REST API. Individual
//! records can be protected with a password.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod text;
pub mod web;

pub use auth::{hash_password, verify_password};
pub use config::Config;
pub use db::Database;
pub use error::{Result, SharebinError};
pub use file::{FileRecord, FileRepository, FileService, NewFileRecord, StoreFile};
pub use text::{NewTextRecord, StoreText, TextRecord, TextRepository, TextService};
pub use web::WebServer;
