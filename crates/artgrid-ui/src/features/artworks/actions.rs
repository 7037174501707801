//! Artwork table actions.
//!
//! # Design
//! - Capture user intent separate from rendering.
//! - Actions are UI-only and never perform side effects.

use artgrid_api_models::ArtworkId;

/// Checkbox events emitted by the artwork table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    /// A single row checkbox changed.
    Row {
        /// Row whose checkbox changed.
        id: ArtworkId,
        /// New checked state.
        checked: bool,
    },
    /// The header checkbox changed; applies to visible rows only.
    AllVisible {
        /// New checked state.
        checked: bool,
    },
}

/// Selection-count indicator text.
#[must_use]
pub fn selection_label(count: usize) -> String {
    if count == 1 {
        "Selected: 1 row".to_string()
    } else {
        format!("Selected: {count} rows")
    }
}
