//! SQL DDL for initializing the credential storage.

/// SQLite schema:
/// - `username` TEXT PRIMARY KEY, so duplicate registrations fail at the storage layer
/// - `password` TEXT NOT NULL, the bcrypt hash (cost and salt embedded)
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    username TEXT NOT NULL PRIMARY KEY,
    password TEXT NOT NULL
);
"#;
