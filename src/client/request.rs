//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::error::{ErrorKind, Result};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client,
};

use crate::interface::HttpClient;
use crate::model::dtos::{ApiRequest, Method, RawResponse};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
}

impl NoWasmClient {
    /// Wrap an already configured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl HttpClient for NoWasmClient {
    async fn new() -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client })
    }

    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes())
                    .map_err(|e| ErrorKind::ParseError(e.to_string()))?,
                HeaderValue::from_str(value).map_err(|e| ErrorKind::ParseError(e.to_string()))?,
            );
        }

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url).headers(headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        log::debug!("{} {} -> {}", request.method, request.url, status);

        Ok(RawResponse { status, body })
    }
}
