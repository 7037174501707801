//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod paging;
pub mod request;
pub mod selection;
pub mod store;
