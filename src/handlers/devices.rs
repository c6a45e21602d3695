use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::{EntityKind, RegistryError};
use crate::handlers::parse_id;
use crate::middleware::json::ApiJson;
use crate::router::RegistryState;
use crate::service::DeviceService;
use crate::types::{Device, DeviceInput};

pub async fn list_devices(
    State(state): State<RegistryState>,
) -> Result<Json<Vec<Device>>, RegistryError> {
    let devices = DeviceService::new(state.store.clone()).list().await?;
    Ok(Json(devices))
}

pub async fn get_device(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<Json<Device>, RegistryError> {
    let id = parse_id(&id, EntityKind::Device)?;
    let device = DeviceService::new(state.store.clone()).get(id).await?;
    Ok(Json(device))
}

pub async fn create_device(
    State(state): State<RegistryState>,
    ApiJson(input): ApiJson<DeviceInput>,
) -> Result<impl IntoResponse, RegistryError> {
    let device = DeviceService::new(state.store.clone())
        .create(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(device)))
}

pub async fn update_device(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<DeviceInput>,
) -> Result<Json<Device>, RegistryError> {
    let id = parse_id(&id, EntityKind::Device)?;
    let device = DeviceService::new(state.store.clone())
        .update(id, &input)
        .await?;
    Ok(Json(device))
}

pub async fn delete_device(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, RegistryError> {
    let id = parse_id(&id, EntityKind::Device)?;
    DeviceService::new(state.store.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
