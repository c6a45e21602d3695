use crate::db::Store;
use crate::error::RegistryError;
use crate::types::Employee;
use tracing::debug;

/// Resolve a device's declared owner.
///
/// `None` skips the check (the device is stored unassigned). A reference to a
/// missing employee yields `RegistryError::InvalidOwner` so the caller never
/// reaches the write.
pub async fn resolve_owner(
    store: &Store,
    owner_id: Option<i64>,
) -> Result<Option<Employee>, RegistryError> {
    let Some(owner_id) = owner_id else {
        return Ok(None);
    };
    match store.get_employee(owner_id).await? {
        Some(owner) => Ok(Some(owner)),
        None => {
            debug!(owner_id, "owner reference does not resolve");
            Err(RegistryError::InvalidOwner(owner_id))
        }
    }
}
