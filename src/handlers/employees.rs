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
use crate::service::EmployeeService;
use crate::types::{Employee, EmployeeInput};

/// GET /employees
pub async fn list_employees(
    State(state): State<RegistryState>,
) -> Result<Json<Vec<Employee>>, RegistryError> {
    let employees = EmployeeService::new(state.store.clone()).list().await?;
    Ok(Json(employees))
}

/// GET /employees/{id}
pub async fn get_employee(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, RegistryError> {
    let id = parse_id(&id, EntityKind::Employee)?;
    let employee = EmployeeService::new(state.store.clone()).get(id).await?;
    Ok(Json(employee))
}

/// POST /employees -> 201 with the stored record.
pub async fn create_employee(
    State(state): State<RegistryState>,
    ApiJson(input): ApiJson<EmployeeInput>,
) -> Result<impl IntoResponse, RegistryError> {
    let employee = EmployeeService::new(state.store.clone())
        .create(&input)
        .await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// PUT /employees/{id}
pub async fn update_employee(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<EmployeeInput>,
) -> Result<Json<Employee>, RegistryError> {
    let id = parse_id(&id, EntityKind::Employee)?;
    let employee = EmployeeService::new(state.store.clone())
        .update(id, &input)
        .await?;
    Ok(Json(employee))
}

/// DELETE /employees/{id} -> 204
pub async fn delete_employee(
    State(state): State<RegistryState>,
    Path(id): Path<String>,
) -> Result<StatusCode, RegistryError> {
    let id = parse_id(&id, EntityKind::Employee)?;
    EmployeeService::new(state.store.clone()).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
