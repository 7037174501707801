//! HTTP client helpers (REST) and their error type.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub mod error;
