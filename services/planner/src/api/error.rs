//! Problem-details error responses.
//!
//! Every failure leaves the API as `application/problem+json`. The core
//! crates only hand back typed errors; the user-facing wording lives here.

use axum::{
    extract::rejection::JsonRejection,
    http::{header::CONTENT_TYPE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use seatplan_seating::AllocationError;
use serde::Serialize;

use crate::catalog::CatalogError;

/// Message shown when a demand value is rejected.
pub const INVALID_DEMAND_MESSAGE: &str = "Please enter valid student count";

/// Message shown when the catalog cannot seat everyone.
pub const INSUFFICIENT_CAPACITY_MESSAGE: &str = "Not enough seats available";

#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    /// Same text as `detail`; browser clients read `message`.
    pub message: String,
    pub code: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    #[serde(flatten)]
    pub extensions: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl ProblemDetails {
    fn new(status: StatusCode, code: impl Into<String>, detail: impl Into<String>) -> Self {
        let code = code.into();
        let detail = detail.into();
        let title = status
            .canonical_reason()
            .unwrap_or("Unknown Error")
            .to_string();
        Self {
            r#type: format!("https://seatplan.dev/problems/{code}"),
            title,
            status: status.as_u16(),
            message: detail.clone(),
            detail,
            code,
            request_id: "unknown".to_string(),
            details: None,
            extensions: serde_json::Map::new(),
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub problem: Box<ProblemDetails>,
}

impl ApiError {
    fn with_status(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        let problem = Box::new(ProblemDetails::new(status, code, message));
        Self { status, problem }
    }

    pub fn bad_request(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, code, message)
    }

    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::CONFLICT, code, message)
    }

    pub fn unprocessable(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::UNPROCESSABLE_ENTITY, code, message)
    }

    pub fn internal(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(StatusCode::INTERNAL_SERVER_ERROR, code, message)
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.problem.request_id = request_id.into();
        self
    }

    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.problem.details = Some(details);
        self
    }

    pub fn with_extension(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.problem.extensions.insert(key.to_string(), value.into());
        self
    }

    pub fn code(&self) -> &str {
        &self.problem.code
    }
}

impl From<AllocationError> for ApiError {
    fn from(err: AllocationError) -> Self {
        match &err {
            AllocationError::InvalidDemand { .. } => {
                Self::bad_request(err.code(), INVALID_DEMAND_MESSAGE)
            }
            AllocationError::InsufficientCapacity {
                requested,
                available,
            } => Self::unprocessable(err.code(), INSUFFICIENT_CAPACITY_MESSAGE)
                .with_extension("requested", *requested)
                .with_extension("available", *available),
            AllocationError::Internal { .. } => {
                Self::internal(err.code(), "Allocation failed due to an internal error")
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Duplicate(room_id) => Self::conflict(
                "duplicate_room",
                format!("Classroom '{room_id}' already exists. ID must be unique."),
            ),
            CatalogError::NotFound(room_id) => {
                Self::not_found("room_not_found", format!("Classroom '{room_id}' not found"))
            }
            CatalogError::Corrupt { .. } | CatalogError::Backend(_) => {
                tracing::error!(error = %err, "Room catalog failure");
                Self::internal("catalog_unavailable", "Room catalog is unavailable")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("invalid_body", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.problem)).into_response();
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}
