//! Database schema and migrations for sharebin.
//!
//! Migrations are applied sequentially when the database is opened.

/// Database migrations.
///
/// Each migration is a SQL script executed in order. The schema_version
/// table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: files table
    r#"
-- File records; the payload lives in the data BLOB column
CREATE TABLE files (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    file_name   TEXT NOT NULL,
    file_type   TEXT NOT NULL,
    data        BLOB NOT NULL,
    create_time INTEGER NOT NULL,           -- epoch milliseconds
    remark      TEXT,
    password    TEXT                        -- Argon2 hash, NULL = unprotected
);

CREATE INDEX idx_files_create_time ON files(create_time);
"#,
    // v2: texts table
    r#"
-- Text snippet records
CREATE TABLE texts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    content     TEXT NOT NULL,
    create_time INTEGER NOT NULL,           -- epoch milliseconds
    remark      TEXT,
    password    TEXT                        -- Argon2 hash, NULL = unprotected
);

CREATE INDEX idx_texts_create_time ON texts(create_time);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_not_empty() {
        assert!(!MIGRATIONS.is_empty());
    }

    #[test]
    fn test_first_migration_contains_files_table() {
        let first = MIGRATIONS[0];
        assert!(first.contains("CREATE TABLE files"));
        assert!(first.contains("file_name"));
        assert!(first.contains("file_type"));
        assert!(first.contains("data"));
        assert!(first.contains("password"));
    }

    #[test]
    fn test_second_migration_contains_texts_table() {
        let second = MIGRATIONS[1];
        assert!(second.contains("CREATE TABLE texts"));
        assert!(second.contains("content"));
        assert!(second.contains("create_time"));
        assert!(second.contains("password"));
    }

    #[test]
    fn test_migrations_are_valid_sql() {
        for migration in MIGRATIONS {
            assert!(!migration.trim().is_empty());
            assert!(
                migration.contains("CREATE TABLE")
                    || migration.contains("ALTER TABLE")
                    || migration.contains("CREATE INDEX")
            );
        }
    }
}
