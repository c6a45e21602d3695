use crate::db::models::row_to_device;
use crate::db::sqlite::{SqlValue, Store};
use crate::error::RegistryError;
use crate::types::{Device, NewDevice};

const SELECT_DEVICE: &str = "SELECT id, device_name, type, owner_id, created_at FROM devices";

impl Store {
    pub async fn list_devices(&self) -> Result<Vec<Device>, RegistryError> {
        let sql = format!("{SELECT_DEVICE} ORDER BY id");
        let rows = self.fetch_all(&sql, &[]).await?;
        rows.into_iter().map(row_to_device).collect()
    }

    pub async fn get_device(&self, id: i64) -> Result<Option<Device>, RegistryError> {
        let sql = format!("{SELECT_DEVICE} WHERE id = ?");
        self.fetch_one(&sql, &[id.into()])
            .await?
            .map(row_to_device)
            .transpose()
    }

    pub async fn insert_device(&self, device: &NewDevice) -> Result<i64, RegistryError> {
        let res = self
            .execute(
                "INSERT INTO devices (device_name, type, owner_id) VALUES (?, ?, ?)",
                &device_params(device),
            )
            .await?;
        Ok(res.last_insert_id)
    }

    pub async fn replace_device(&self, id: i64, device: &NewDevice) -> Result<u64, RegistryError> {
        let mut params = device_params(device).to_vec();
        params.push(SqlValue::Integer(id));
        let res = self
            .execute(
                "UPDATE devices SET device_name = ?, type = ?, owner_id = ? WHERE id = ?",
                &params,
            )
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn delete_device(&self, id: i64) -> Result<u64, RegistryError> {
        let res = self
            .execute("DELETE FROM devices WHERE id = ?", &[id.into()])
            .await?;
        Ok(res.rows_affected)
    }
}

fn device_params(device: &NewDevice) -> [SqlValue; 3] {
    [
        device.device_name.as_str().into(),
        device.device_type.as_str().into(),
        device.owner_id.into(),
    ]
}
