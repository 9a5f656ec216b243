#![allow(async_fn_in_trait)] // 允许在内部 trait 中使用 async fn

use crate::error::Result;
use crate::model::dtos::{ApiRequest, RawResponse};

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;

    /// Send a fully built request and hand back status + raw body.
    ///
    /// Transport failures surface as errors; any HTTP status, including
    /// 4xx/5xx, is a successful `RawResponse`.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse>;
}

/// Persisted session: an opaque token and the user record as JSON text.
///
/// Every read goes to the backing storage, nothing is cached.
pub trait SessionStore {
    fn token(&self) -> Result<Option<String>>;

    /// Raw JSON of the stored user record.
    fn user(&self) -> Result<Option<String>>;

    /// Write token and user together.
    fn set(&self, token: &str, user: &str) -> Result<()>;

    /// Remove token and user together.
    fn clear(&self) -> Result<()>;
}

/// Page navigation port (hard redirects in the browser).
pub trait Navigator {
    fn redirect(&self, path: &str);
}

/// A navigation element whose visibility and text can be driven.
pub trait NavElement {
    fn set_visible(&self, visible: bool);
    fn set_text(&self, text: &str);
}
