use crate::error::RegistryError;
use crate::types::{Device, DeviceType, Employee, Role};
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Layout of SQLite's `CURRENT_TIMESTAMP` (always UTC).
const SQLITE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn row_to_employee(row: SqliteRow) -> Result<Employee, RegistryError> {
    let id: i64 = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    let role_str: String = row.try_get("role")?;
    let created_at_str: String = row.try_get("created_at")?;

    let role: Role = role_str
        .parse()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Employee {
        id,
        name,
        role,
        created_at: parse_timestamp(&created_at_str)?,
    })
}

pub(crate) fn row_to_device(row: SqliteRow) -> Result<Device, RegistryError> {
    let id: i64 = row.try_get("id")?;
    let device_name: String = row.try_get("device_name")?;
    let type_str: String = row.try_get("type")?;
    let owner_id: Option<i64> = row.try_get("owner_id")?;
    let created_at_str: String = row.try_get("created_at")?;

    let device_type: DeviceType = type_str
        .parse()
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

    Ok(Device {
        id,
        device_name,
        device_type,
        owner_id,
        created_at: parse_timestamp(&created_at_str)?,
    })
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RegistryError> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, SQLITE_TIMESTAMP_FORMAT) {
        return Ok(naive.and_utc());
    }
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| sqlx::Error::Decode(Box::new(e)))?
        .with_timezone(&Utc);
    Ok(parsed)
}
