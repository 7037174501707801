//! Artwork rows and pure selection transformations for testing outside wasm.

use crate::core::selection::SelectionStore;
use crate::features::artworks::actions::SelectionAction;
use artgrid_api_models::{Artwork, ArtworkId};

/// Placeholder shown for fields the catalog leaves empty.
pub const EMPTY_CELL: &str = "–";

/// Column headings in render order, after the selection column.
pub const COLUMNS: [&str; 6] = [
    "TITLE",
    "PLACE OF ORIGIN",
    "ARTIST",
    "INSCRIPTIONS",
    "START DATE",
    "END DATE",
];

/// Display projection of an [`Artwork`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtworkRow {
    /// Catalog identifier.
    pub id: ArtworkId,
    /// Title, or a dash when blank.
    pub title: String,
    /// Place of origin, or a dash.
    pub place_of_origin: String,
    /// Artist attribution, or a dash.
    pub artist: String,
    /// Inscriptions, or a dash.
    pub inscriptions: String,
    /// Start year, or a dash.
    pub date_start: String,
    /// End year, or a dash.
    pub date_end: String,
}

impl ArtworkRow {
    /// Cell texts in [`COLUMNS`] order.
    #[must_use]
    pub fn cells(&self) -> [&str; 6] {
        [
            self.title.as_str(),
            self.place_of_origin.as_str(),
            self.artist.as_str(),
            self.inscriptions.as_str(),
            self.date_start.as_str(),
            self.date_end.as_str(),
        ]
    }
}

impl From<&Artwork> for ArtworkRow {
    fn from(value: &Artwork) -> Self {
        Self {
            id: value.id,
            title: text_or_dash(value.title.as_deref()),
            place_of_origin: text_or_dash(value.place_of_origin.as_deref()),
            artist: text_or_dash(value.artist_display.as_deref()),
            inscriptions: text_or_dash(value.inscriptions.as_deref()),
            date_start: year_or_dash(value.date_start),
            date_end: year_or_dash(value.date_end),
        }
    }
}

fn text_or_dash(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map_or_else(|| EMPTY_CELL.to_string(), str::to_string)
}

fn year_or_dash(value: Option<i32>) -> String {
    value.map_or_else(|| EMPTY_CELL.to_string(), |year| year.to_string())
}

/// Ids checked on the visible page after a single-row checkbox event.
#[must_use]
pub fn checked_after_toggle(
    rows: &[Artwork],
    selection: &SelectionStore,
    id: ArtworkId,
    checked: bool,
) -> Vec<ArtworkId> {
    rows.iter()
        .map(|row| row.id)
        .filter(|row_id| {
            if *row_id == id {
                checked
            } else {
                selection.contains(*row_id)
            }
        })
        .collect()
}

/// Ids checked on the visible page after the header checkbox changes.
#[must_use]
pub fn checked_after_toggle_all(rows: &[Artwork], checked: bool) -> Vec<ArtworkId> {
    if checked {
        rows.iter().map(|row| row.id).collect()
    } else {
        Vec::new()
    }
}

/// Apply a table checkbox event to the selection.
///
/// The full visible id set is always passed to the reconcile so that only rows
/// on this page can be unchecked.
pub fn apply_selection_action(
    selection: &mut SelectionStore,
    rows: &[Artwork],
    action: SelectionAction,
) {
    let newly_checked = match action {
        SelectionAction::Row { id, checked } => checked_after_toggle(rows, selection, id, checked),
        SelectionAction::AllVisible { checked } => checked_after_toggle_all(rows, checked),
    };
    let visible: Vec<ArtworkId> = rows.iter().map(|row| row.id).collect();
    selection.reconcile_visible_page(&visible, &newly_checked);
}
