//! HTTP client for the seat planner API.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::CliError;

/// API client for communicating with `seatplan-server`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("seatctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CliError> {
        let response = self.client.get(self.url(path)).send().await?;
        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, CliError> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Make a DELETE request.
    pub async fn delete(&self, path: &str) -> Result<(), CliError> {
        let response = self.client.delete(self.url(path)).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            self.handle_error(response).await
        }
    }

    /// Handle a successful or error response.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, CliError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| CliError::Other(anyhow::anyhow!("Failed to parse response: {}", e)))
        } else {
            self.handle_error(response).await
        }
    }

    /// Turn a problem-details body into a [`CliError`].
    async fn handle_error<T>(&self, response: reqwest::Response) -> Result<T, CliError> {
        let status = response.status();

        let problem: ProblemResponse = response.json().await.unwrap_or_else(|_| ProblemResponse {
            code: "unknown".to_string(),
            detail: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            request_id: None,
        });

        Err(CliError::api(
            status.as_u16(),
            problem.code,
            problem.detail,
            problem.request_id,
        ))
    }
}

/// Problem-details body returned by the server on failure.
#[derive(Debug, Deserialize)]
struct ProblemResponse {
    code: String,
    detail: String,
    #[serde(default)]
    request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_url_building() {
        let client = ApiClient::new("http://localhost:8080/").unwrap();
        assert_eq!(
            client.url("/api/classrooms"),
            "http://localhost:8080/api/classrooms"
        );
    }

    #[tokio::test]
    async fn test_post_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/allocate"))
            .and(body_json(json!({ "totalStudents": 25 })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "roomsUsed": 1 })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let body: Value = client
            .post("/api/allocate", &json!({ "totalStudents": 25 }))
            .await
            .unwrap();
        assert_eq!(body["roomsUsed"], 1);
    }

    #[tokio::test]
    async fn test_problem_details_become_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/allocate"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "type": "https://seatplan.dev/problems/insufficient_capacity",
                "title": "Unprocessable Entity",
                "status": 422,
                "detail": "Not enough seats available",
                "message": "Not enough seats available",
                "code": "insufficient_capacity",
                "request_id": "req_abc",
                "requested": 100,
                "available": 90
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let err = client
            .post::<Value, _>("/api/allocate", &json!({ "totalStudents": 100 }))
            .await
            .unwrap_err();

        match err {
            CliError::Api {
                status,
                code,
                message,
                request_id,
            } => {
                assert_eq!(status, 422);
                assert_eq!(code, "insufficient_capacity");
                assert_eq!(message, "Not enough seats available");
                assert_eq!(request_id.as_deref(), Some("req_abc"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).unwrap();
        let err = client.delete("/api/classrooms/A").await.unwrap_err();
        assert_eq!(err.code(), Some("unknown"));
        assert_eq!(err.to_string(), "Bad Gateway");
    }
}
