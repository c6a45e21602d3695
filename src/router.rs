use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::any::Any;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::error;

use crate::db::Store;
use crate::error::ErrorBody;
use crate::handlers::{devices, employees, health};

/// Shared handler state. The store handle is explicit; there is no global.
#[derive(Clone)]
pub struct RegistryState {
    pub store: Store,
}

impl RegistryState {
    pub fn new(store: Store) -> Self {
        Self { store }
    }
}

pub fn registry_router(state: RegistryState) -> Router {
    Router::new()
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route(
            "/devices",
            get(devices::list_devices).post(devices::create_device),
        )
        .route(
            "/devices/{id}",
            get(devices::get_device)
                .put(devices::update_device)
                .delete(devices::delete_device),
        )
        .route("/health", get(health::health))
        .fallback(route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, axum::Json(ErrorBody::new("Not found")))
}

fn panic_response(_payload: Box<dyn Any + Send + 'static>) -> Response {
    error!("request handler panicked");
    ErrorBody::internal().into_response()
}
