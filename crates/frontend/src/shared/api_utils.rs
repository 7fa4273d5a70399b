//! API utilities for frontend-backend communication
//!
//! Every request carries the session cookie (`credentials: include`) and asks
//! for JSON. Failures are folded into [`ApiError`] so pages only ever deal
//! with one error type.

use contracts::shared::api_error::ErrorPayload;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::RequestCredentials;

const TRANSPORT_MESSAGE: &str = "Could not reach the server. Check your connection and try again.";
const DECODE_MESSAGE: &str = "The server sent an unexpected response.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request could not be sent or the body could not be read
    #[error("transport error: {0}")]
    Transport(String),
    /// Non-2xx response
    #[error("server error {status}: {detail}")]
    Server { status: u16, detail: String },
    /// 2xx response with a body that does not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a server error from a failed response body, using `fallback`
    /// when the body carries no `detail`.
    pub fn from_body(status: u16, body: &str, fallback: &str) -> Self {
        Self::Server {
            status,
            detail: ErrorPayload::parse(body).message_or(fallback),
        }
    }

    /// Text shown to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => TRANSPORT_MESSAGE.to_string(),
            Self::Server { detail, .. } => detail.clone(),
            Self::Decode(_) => DECODE_MESSAGE.to_string(),
        }
    }
}

/// Where the backend lives. Resolved once at start-up and handed to every
/// data source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Compile-time `NUTRIMAX_API_BASE`, or same-origin relative paths
    pub fn from_build_env() -> Self {
        Self::new(option_env!("NUTRIMAX_API_BASE").unwrap_or(""))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```rust,ignore
    /// let url = config.url("/products/getAllProducts");
    /// ```
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn prepare(builder: RequestBuilder) -> RequestBuilder {
    builder
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
}

async fn check(response: Response, fallback: &str) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_body(status, &body, fallback))
}

/// GET `path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(
    config: &ApiConfig,
    path: &str,
    fallback: &str,
) -> Result<T, ApiError> {
    let response = prepare(Request::get(&config.url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let response = check(response, fallback).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body and decode the JSON answer
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    config: &ApiConfig,
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<T, ApiError> {
    let response = send_body(Request::post(&config.url(path)), body, fallback).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a JSON body, ignoring the answer
pub async fn post_unit<B: Serialize>(
    config: &ApiConfig,
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<(), ApiError> {
    send_body(Request::post(&config.url(path)), body, fallback).await?;
    Ok(())
}

/// PUT a JSON body, ignoring the answer
pub async fn put_unit<B: Serialize>(
    config: &ApiConfig,
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<(), ApiError> {
    send_body(Request::put(&config.url(path)), body, fallback).await?;
    Ok(())
}

/// DELETE with a JSON body, ignoring the answer
pub async fn delete_unit<B: Serialize>(
    config: &ApiConfig,
    path: &str,
    body: &B,
    fallback: &str,
) -> Result<(), ApiError> {
    send_body(Request::delete(&config.url(path)), body, fallback).await?;
    Ok(())
}

async fn send_body<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
    fallback: &str,
) -> Result<Response, ApiError> {
    let request = prepare(builder)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    check(response, fallback).await
}
