//! Synthetic catalog fixtures.
//!
//! Identifiers are assigned sequentially across the whole collection, so page
//! `p` of size `l` holds ids `(p-1)*l + 1 ..= p*l` (truncated at `total`).
//! That keeps cross-page selection tests readable.

use anyhow::Context;
use artgrid_api_models::{Artwork, ArtworkId, ArtworkPage, Pagination};

/// Build a single artwork with deterministic descriptive fields.
#[must_use]
pub fn artwork(id: u64) -> Artwork {
    let year = 1800 + i32::try_from(id % 200).unwrap_or(0);
    Artwork {
        id: ArtworkId(id),
        title: Some(format!("Artwork {id}")),
        place_of_origin: (id % 3 != 0).then(|| "France".to_string()),
        artist_display: Some(format!("Artist {id}")),
        inscriptions: (id % 2 == 0).then(|| format!("signed lower right ({id})")),
        date_start: Some(year),
        date_end: Some(year + 2),
    }
}

/// Build page `page` (1-based) of a collection holding `total` records.
#[must_use]
pub fn page_of(page: u32, limit: u32, total: u64) -> ArtworkPage {
    let page = page.max(1);
    let first = u64::from(page - 1) * u64::from(limit) + 1;
    let last = (u64::from(page) * u64::from(limit)).min(total);
    let data = (first..=last).map(artwork).collect();
    let total_pages = if limit == 0 {
        1
    } else {
        u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
    };
    ArtworkPage {
        data,
        pagination: Pagination {
            total,
            limit,
            current_page: page,
            offset: Some(first - 1),
            total_pages: Some(total_pages),
        },
    }
}

/// Build the response to a `limit=n` request: the first `n` records.
#[must_use]
pub fn head_of(limit: u32, total: u64) -> ArtworkPage {
    page_of(1, limit, total)
}

/// Identifiers for a contiguous id range, inclusive.
#[must_use]
pub fn ids(range: std::ops::RangeInclusive<u64>) -> Vec<ArtworkId> {
    range.map(ArtworkId).collect()
}

/// Decode a raw JSON listing body.
///
/// # Errors
/// Returns an error when `raw` is not a valid listing envelope.
pub fn decode_page(raw: &str) -> anyhow::Result<ArtworkPage> {
    serde_json::from_str(raw).context("listing fixture is not a valid envelope")
}
