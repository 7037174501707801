#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the artwork catalog API.
//!
//! The catalog is a third-party, read-only collection endpoint. These types
//! mirror the subset of its envelope the browser consumes, and keep request
//! path construction next to the payloads so the UI never formats query
//! strings by hand.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection path for artwork listings, relative to the API base URL.
pub const ARTWORKS_PATH: &str = "/artworks";

/// Page size the catalog applies when a request does not specify `limit`.
pub const DEFAULT_PAGE_LIMIT: u32 = 12;

/// Stable integer identifier assigned to an artwork by the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ArtworkId(pub u64);

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ArtworkId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One artwork record as returned by the listing endpoint.
///
/// Only `id` is guaranteed; the catalog emits `null` for the title and the
/// descriptive fields on some of its records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artwork {
    /// Catalog identifier.
    pub id: ArtworkId,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Place the artwork originates from.
    #[serde(default)]
    pub place_of_origin: Option<String>,
    /// Multi-line artist attribution string.
    #[serde(default)]
    pub artist_display: Option<String>,
    /// Inscription text, when recorded.
    #[serde(default)]
    pub inscriptions: Option<String>,
    /// First year of the artwork's creation range.
    #[serde(default)]
    pub date_start: Option<i32>,
    /// Last year of the artwork's creation range.
    #[serde(default)]
    pub date_end: Option<i32>,
}

/// Pagination metadata attached to every listing envelope.
///
/// `limit`-only requests return partially meaningful values here; callers
/// that issue them should rely on `data` alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Total number of records in the collection.
    #[serde(default)]
    pub total: u64,
    /// Page size applied to the request.
    #[serde(default)]
    pub limit: u32,
    /// 1-based page number the envelope represents.
    #[serde(default)]
    pub current_page: u32,
    /// Zero-based offset of the first record, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    /// Total page count, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl Pagination {
    /// Page size to use for display math, falling back to the catalog default
    /// when the envelope reports zero.
    #[must_use]
    pub const fn effective_limit(&self) -> u32 {
        if self.limit == 0 {
            DEFAULT_PAGE_LIMIT
        } else {
            self.limit
        }
    }
}

/// Listing envelope: one page of artworks plus pagination metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtworkPage {
    /// Records in catalog order.
    #[serde(default)]
    pub data: Vec<Artwork>,
    /// Pagination metadata for the request that produced `data`.
    #[serde(default)]
    pub pagination: Pagination,
}

impl ArtworkPage {
    /// Identifiers of the records in this page, in order.
    #[must_use]
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.data.iter().map(|art| art.id).collect()
    }
}

/// Error document the catalog returns alongside non-success statuses.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    /// HTTP status echoed in the body.
    #[serde(default)]
    pub status: Option<u16>,
    /// Short error title.
    #[serde(default)]
    pub error: Option<String>,
    /// Longer diagnostic message.
    #[serde(default)]
    pub detail: Option<String>,
}

impl ApiErrorBody {
    /// Most specific human-readable message carried by the body.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        [&self.detail, &self.error]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
            .cloned()
    }
}

/// Listing requests the UI issues against [`ARTWORKS_PATH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtworkQuery {
    /// Fetch one page (1-based) at the catalog's default page size.
    Page(u32),
    /// Fetch the first `n` records of the collection in a single response.
    Limit(u32),
}

impl ArtworkQuery {
    /// Path plus query string relative to the API base URL.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Page(page) => format!("{ARTWORKS_PATH}?page={}", (*page).max(1)),
            Self::Limit(limit) => format!("{ARTWORKS_PATH}?limit={limit}"),
        }
    }

    /// Absolute URL for this query against `base_url`.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_clamps_to_first_page() {
        assert_eq!(ArtworkQuery::Page(0).path(), "/artworks?page=1");
        assert_eq!(ArtworkQuery::Page(4).path(), "/artworks?page=4");
    }

    #[test]
    fn limit_query_targets_collection_head() {
        assert_eq!(ArtworkQuery::Limit(20).path(), "/artworks?limit=20");
    }

    #[test]
    fn url_joins_without_double_slash() {
        let url = ArtworkQuery::Page(2).url("https://api.artic.edu/api/v1/");
        assert_eq!(url, "https://api.artic.edu/api/v1/artworks?page=2");
    }

    #[test]
    fn effective_limit_falls_back_on_zero() {
        let pagination = Pagination::default();
        assert_eq!(pagination.effective_limit(), DEFAULT_PAGE_LIMIT);
        let pagination = Pagination {
            limit: 25,
            ..Pagination::default()
        };
        assert_eq!(pagination.effective_limit(), 25);
    }

    #[test]
    fn error_body_prefers_detail() {
        let body = ApiErrorBody {
            status: Some(403),
            error: Some("Forbidden".into()),
            detail: Some("Max limit is 100".into()),
        };
        assert_eq!(body.message().as_deref(), Some("Max limit is 100"));
        let body = ApiErrorBody {
            detail: Some("  ".into()),
            ..ApiErrorBody::default()
        };
        assert_eq!(body.message(), None);
    }
}
