// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP plumbing shared by the event store endpoints.

use calgrid_core::StoreError;
use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::StoreConfig;

/// Error payload returned by the event API.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

/// HTTP client for the event store.
#[derive(Debug)]
pub(crate) struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Builds a request against a path under the base URL.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, format!("{}{path}", self.base_url))
    }

    /// Executes a request and maps error statuses to `StoreError`, decoding
    /// the API's error payload for its message field when one is present.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, StoreError> {
        let resp = req
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        tracing::debug!(status = status.as_u16(), "event store rejected request");
        let message = match resp.json::<ApiErrorBody>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            Ok(body) => body.error,
            Err(_) => String::new(),
        };
        Err(StoreError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
