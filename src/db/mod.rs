//! Database module: connection, schema and repositories.
//!
//! Layout:
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool setup and the parameterized query primitives
//! - `models.rs`: row → domain type conversions
//! - `employees.rs` / `devices.rs`: typed queries per table

pub mod devices;
pub mod employees;
pub mod models;
pub mod schema;
pub mod sqlite;

pub use schema::SQLITE_INIT;
pub use sqlite::{ExecResult, SqlValue, SqlitePool, Store};
