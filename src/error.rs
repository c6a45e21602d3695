use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use std::fmt;
use thiserror::Error as ThisError;
use tracing::error;

/// Body returned for every 5xx; store details stay in the server log.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Employee,
    Device,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Employee => f.write_str("Employee"),
            EntityKind::Device => f.write_str("Device"),
        }
    }
}

#[derive(Debug, ThisError)]
pub enum RegistryError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0} not found")]
    NotFound(EntityKind),

    #[error("Invalid owner_id")]
    InvalidOwner(i64),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Storage(#[from] SqlxError),
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            RegistryError::Validation(_)
            | RegistryError::InvalidOwner(_)
            | RegistryError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::Storage(e) => {
                error!(error = %e, "storage failure");
                return ErrorBody::internal().into_response();
            }
        };
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

/// Standardized API error response body: `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// 500 response with the generic message.
    pub fn internal() -> (StatusCode, Json<ErrorBody>) {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Self::new(INTERNAL_ERROR_MESSAGE)),
        )
    }
}

/// One rejected field of a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    Missing(&'static str),
    Invalid {
        field: &'static str,
        value: String,
        allowed: String,
    },
}

impl FieldIssue {
    pub fn field(&self) -> &'static str {
        match self {
            FieldIssue::Missing(field) => field,
            FieldIssue::Invalid { field, .. } => field,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing(field) => write!(f, "{field} is required"),
            FieldIssue::Invalid {
                field,
                value,
                allowed,
            } => write!(f, "{field} `{value}` must be one of: {allowed}"),
        }
    }
}

/// All field issues found in one request body, in field order.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{}", join_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn fields(&self) -> Vec<&'static str> {
        self.issues.iter().map(FieldIssue::field).collect()
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
