use crate::db::Store;
use crate::error::{EntityKind, RegistryError};
use crate::service::owner::resolve_owner;
use crate::service::validation::validate_device;
use crate::types::{Device, DeviceInput};
use tracing::info;

/// Device operations: validate, check the owner reference, persist.
pub struct DeviceService {
    store: Store,
}

impl DeviceService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Device>, RegistryError> {
        self.store.list_devices().await
    }

    pub async fn get(&self, id: i64) -> Result<Device, RegistryError> {
        self.store
            .get_device(id)
            .await?
            .ok_or(RegistryError::NotFound(EntityKind::Device))
    }

    pub async fn create(&self, input: &DeviceInput) -> Result<Device, RegistryError> {
        let device = validate_device(input)?;
        resolve_owner(&self.store, device.owner_id).await?;
        let id = self.store.insert_device(&device).await?;
        info!(
            id,
            device_name = %device.device_name,
            owner_id = ?device.owner_id,
            "device created"
        );
        self.reload(id).await
    }

    /// Full replace; an omitted `owner_id` unassigns the device.
    pub async fn update(&self, id: i64, input: &DeviceInput) -> Result<Device, RegistryError> {
        let device = validate_device(input)?;
        self.get(id).await?;
        resolve_owner(&self.store, device.owner_id).await?;
        self.store.replace_device(id, &device).await?;
        info!(id, owner_id = ?device.owner_id, "device updated");
        self.reload(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RegistryError> {
        self.get(id).await?;
        self.store.delete_device(id).await?;
        info!(id, "device deleted");
        Ok(())
    }

    async fn reload(&self, id: i64) -> Result<Device, RegistryError> {
        self.store
            .get_device(id)
            .await?
            .ok_or(RegistryError::Storage(sqlx::Error::RowNotFound))
    }
}
