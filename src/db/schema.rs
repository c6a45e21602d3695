//! SQL DDL for the registry tables.
//! SQLite-first design; `created_at` is filled by the store at insert time.

/// SQLite schema with:
/// - `employees.id` / `devices.id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `role` and `type` stored as TEXT; the closed sets are enforced in Rust
/// - `devices.owner_id` nullable FK to `employees(id)`; deleting an employee
///   unassigns its devices
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    role TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS devices (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    device_name TEXT NOT NULL,
    type TEXT NOT NULL,
    owner_id INTEGER NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    FOREIGN KEY (owner_id) REFERENCES employees(id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_devices_owner_id ON devices(owner_id);
"#;
