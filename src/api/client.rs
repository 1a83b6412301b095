//! HTTP plumbing for the attendance API
//!
//! This is the single place requests are issued and responses are normalized:
//! non-2xx statuses become `RollcallError::Api` carrying the HTTP status and
//! the server's `message` field when one is present, JSON bodies are
//! deserialized into explicit schemas, and mutation payloads are drained
//! without being interpreted.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::utils::errors::{Result, RollcallError};

/// Thin client over the remote attendance API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        // Fail fast on a malformed base URL instead of per request
        url::Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("Rollcall-Console/1.0")
            .build()
            .map_err(RollcallError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET a JSON response into an explicit schema
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path);
        debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// GET with query parameters
    pub(crate) async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(url = %url, ?query, "GET");

        let response = self.client.get(&url).query(query).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    /// POST a JSON body, ignoring whatever payload the server returns
    pub(crate) async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.endpoint(path);
        debug!(url = %url, "POST");

        self.finish_mutation(self.client.post(&url).json(body)).await
    }

    /// POST addressed entirely by query parameters, no body
    pub(crate) async fn post_query(&self, path: &str, query: &[(&str, String)]) -> Result<()> {
        let url = self.endpoint(path);
        debug!(url = %url, ?query, "POST");

        self.finish_mutation(self.client.post(&url).query(query)).await
    }

    /// PUT a JSON body, ignoring whatever payload the server returns
    pub(crate) async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.endpoint(path);
        debug!(url = %url, "PUT");

        self.finish_mutation(self.client.put(&url).json(body)).await
    }

    /// DELETE a resource
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.endpoint(path);
        debug!(url = %url, "DELETE");

        self.finish_mutation(self.client.delete(&url)).await
    }

    async fn finish_mutation(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;
        let response = Self::check_status(response).await?;
        // Mutation responses carry nothing the client trusts; displayed truth
        // comes from the re-fetch that follows
        Self::drain_payload(response).await
    }

    /// Read a successful response to completion without interpreting it;
    /// 204 carries no body to read
    async fn drain_payload(response: Response) -> Result<()> {
        if response.status() != StatusCode::NO_CONTENT {
            response.text().await?;
        }
        Ok(())
    }

    /// Surface non-2xx statuses as errors with the server message when present
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            });

        Err(RollcallError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
