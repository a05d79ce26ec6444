//! Request-scoped context extracted from HTTP requests.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use seatplan_id::RequestId;

use crate::api::error::ApiError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const MAX_REQUEST_ID_LEN: usize = 128;

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = match header_string(&parts.headers, REQUEST_ID_HEADER) {
            Some(id) if id.len() > MAX_REQUEST_ID_LEN => {
                return Err(ApiError::bad_request(
                    "invalid_request_id",
                    format!("{REQUEST_ID_HEADER} must be at most {MAX_REQUEST_ID_LEN} characters"),
                )
                .with_request_id(RequestId::new().to_string()));
            }
            Some(id) => id,
            None => RequestId::new().to_string(),
        };

        Ok(Self { request_id })
    }
}
