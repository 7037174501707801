//! Persistence and environment helpers for the app shell.

use crate::core::config::{API_BASE_URL_KEY, resolve_api_base_url};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// API base URL: a LocalStorage override when valid, else the public catalog.
pub(crate) fn api_base_url() -> String {
    let stored = match LocalStorage::get::<String>(API_BASE_URL_KEY) {
        Ok(value) => Some(value),
        Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            log_storage_error("get", API_BASE_URL_KEY, &err.to_string());
            None
        }
    };
    let resolved = resolve_api_base_url(stored.as_deref());
    if stored.is_some_and(|value| value.trim().trim_end_matches('/') != resolved) {
        console::warn!("ignoring invalid API base URL override", API_BASE_URL_KEY);
    }
    resolved
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::warn!("storage operation failed", operation, key, detail);
}
