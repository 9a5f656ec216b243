//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::error::Result;
use gloo_net::http::{Request, RequestBuilder};
use web_sys::RequestCredentials;

use crate::interface::HttpClient;
use crate::model::dtos::{ApiRequest, Method, RawResponse};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient;

impl WasmClient {
    /// Build a request with the method, headers and credentials mode applied
    fn build_request(request: &ApiRequest) -> RequestBuilder {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        builder = builder.credentials(RequestCredentials::SameOrigin);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        builder
    }
}

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(Self)
    }

    async fn execute(&self, request: ApiRequest) -> Result<RawResponse> {
        let builder = Self::build_request(&request);

        let prepared = match request.body {
            Some(body) => builder.body(body)?,
            None => builder.build()?,
        };

        let resp = prepared.send().await?;
        let status = resp.status();

        log::debug!("{} {} -> {}", request.method, request.url, status);

        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }
}
