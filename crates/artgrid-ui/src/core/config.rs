//! Runtime configuration for the browser app.

/// Catalog API used when no override is configured.
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// LocalStorage key holding an optional API base URL override.
pub const API_BASE_URL_KEY: &str = "artgrid.api_base_url";

/// Resolve the API base URL from an optional override.
///
/// Overrides are trimmed and stripped of trailing slashes; blank or
/// non-http(s) values fall back to [`DEFAULT_API_BASE_URL`].
#[must_use]
pub fn resolve_api_base_url(override_value: Option<&str>) -> String {
    override_value
        .map(|value| value.trim().trim_end_matches('/'))
        .filter(|value| value.starts_with("http://") || value.starts_with("https://"))
        .map_or_else(|| DEFAULT_API_BASE_URL.to_string(), str::to_string)
}
