pub mod api;
pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod model;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{Error, ErrorKind, Result};
pub use interface::{HttpClient, NavElement, Navigator, SessionStore};

#[cfg(feature = "no-wasm")]
pub use client::NoWasmClient;
#[cfg(feature = "wasm")]
pub use client::WasmClient;
