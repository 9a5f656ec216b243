//! Application module - session handling and navigation state
//!
//! This module sits on top of the API layer: it establishes and tears down
//! sessions, guards pages, and syncs navigation elements with the stored
//! login state.

pub mod auth;
pub mod nav;
pub mod ui;

#[cfg(feature = "no-wasm")]
pub mod print;

pub use auth::*;
pub use nav::*;
pub use ui::*;
