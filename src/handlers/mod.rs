pub mod devices;
pub mod employees;
pub mod health;

use crate::error::{EntityKind, RegistryError};

/// Path ids that are not integers cannot name a row.
pub(crate) fn parse_id(raw: &str, kind: EntityKind) -> Result<i64, RegistryError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| RegistryError::NotFound(kind))
}
