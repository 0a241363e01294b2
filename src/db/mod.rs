//! Database module: the `users` credential table.
//!
//! Layout:
//! - `models.rs`: Rust struct mirroring a `users` row
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: pooled storage handle with insert and lookup

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::DbUser;
pub use schema::SQLITE_INIT;
pub use sqlite::{SqlitePool, UsersStorage};
