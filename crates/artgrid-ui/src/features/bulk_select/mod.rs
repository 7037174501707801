//! Bulk-select feature wiring.
//!
//! # Design
//! - Select the first N records of the whole collection in one request.
//! - The dialog only ever adds to the selection.
//! - A failed fetch keeps the dialog open with the error shown.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
