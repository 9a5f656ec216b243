//! Transport module - sends HTTP requests for both WASM and no-WASM environments
//!
//! Both implementations share the `HttpClient` interface; the API layer on
//! top of them never touches the underlying crate directly.

#[cfg(feature = "no-wasm")]
pub mod request;
#[cfg(feature = "no-wasm")]
pub use request::NoWasmClient;

#[cfg(feature = "wasm")]
pub mod gloo;
#[cfg(feature = "wasm")]
pub use gloo::WasmClient;
