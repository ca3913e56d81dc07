//! HTTP client for the form gateway
//!
//! Two endpoints: `POST /create-user` registers a user and
//! `GET /get-form?rollNumber=` returns that user's form schema.
//! Requests are sent once; there is no retry and no timeout beyond what
//! reqwest applies.

use super::error::GatewayError;
use super::traits::GatewayApi;
use crate::state::forms::FormStructure;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};

/// Default gateway address
pub const DEFAULT_GATEWAY_URL: &str = "https://dynamic-form-generator-9rl7.onrender.com";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateUserRequest<'a> {
    roll_number: &'a str,
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct GetFormResponse {
    #[serde(default)]
    form: Option<FormStructure>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Client for the form gateway
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for the gateway at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, GatewayError> {
        let raw = format!("{}/{}", self.base_url, path);
        let url = if params.is_empty() {
            Url::parse(&raw)
        } else {
            Url::parse_with_params(&raw, params)
        };
        url.map_err(|e| GatewayError::InvalidUrl(format!("{raw}: {e}")))
    }
}

/// Turn a non-2xx response into `Rejected`, reading `{message}` when present
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await.unwrap_or_default();
    Err(rejection(status, &body))
}

fn rejection(status: StatusCode, body: &[u8]) -> GatewayError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    GatewayError::Rejected {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl GatewayApi for GatewayClient {
    async fn create_user(&self, roll_number: &str, name: &str) -> Result<(), GatewayError> {
        let url = self.endpoint("create-user", &[])?;
        let response = self
            .http
            .post(url)
            .json(&CreateUserRequest { roll_number, name })
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    async fn fetch_form(&self, roll_number: &str) -> Result<Option<FormStructure>, GatewayError> {
        let url = self.endpoint("get-form", &[("rollNumber", roll_number)])?;
        let response = check_status(self.http.get(url).send().await?).await?;
        let body = response.bytes().await?;
        let parsed: GetFormResponse = serde_json::from_slice(&body)?;
        Ok(parsed.form)
    }
}
