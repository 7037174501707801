//! Bulk-select dialog state.
//!
//! # Design
//! - The count input is kept as raw text and validated on submit.
//! - Each opening of the dialog gets a session number; a response is accepted
//!   only for the session that issued it, and only while it is still busy.

use crate::core::selection::SelectionStore;
use artgrid_api_models::ArtworkId;

/// Reasons a bulk count is rejected before any request is issued.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BulkCountError {
    /// Nothing was entered.
    #[error("enter the number of rows to select")]
    Empty,
    /// Input was not a whole number.
    #[error("row count must be a whole number")]
    NotANumber,
    /// Input was zero or negative.
    #[error("row count must be greater than zero")]
    NotPositive,
    /// Input does not fit a request limit.
    #[error("row count is too large")]
    TooLarge,
}

/// Reasons a submit is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BulkSubmitError {
    /// The dialog is not open.
    #[error("bulk-select dialog is closed")]
    Closed,
    /// A request from this dialog is already in flight.
    #[error("a bulk selection is already in progress")]
    Busy,
    /// The count failed validation.
    #[error(transparent)]
    Count(#[from] BulkCountError),
}

/// Parse the requested row count.
///
/// # Errors
/// Returns a [`BulkCountError`] for empty, non-integer, non-positive or
/// oversized input.
pub fn parse_bulk_count(input: &str) -> Result<u32, BulkCountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BulkCountError::Empty);
    }
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| BulkCountError::NotANumber)?;
    if value <= 0 {
        return Err(BulkCountError::NotPositive);
    }
    u32::try_from(value).map_err(|_| BulkCountError::TooLarge)
}

/// Contents of an open dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkDialog {
    /// Raw count input.
    pub input: String,
    /// True while a request is in flight.
    pub busy: bool,
    /// Validation or fetch error shown inline.
    pub error: Option<String>,
    /// Session number assigned when the dialog opened.
    pub session: u64,
}

/// Dialog visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BulkDialogState {
    /// Dialog hidden.
    #[default]
    Closed,
    /// Dialog shown.
    Open(BulkDialog),
}

/// Bulk-select slice stored in the app store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BulkSelectSlice {
    /// Current dialog state.
    pub dialog: BulkDialogState,
    /// Last session number handed out.
    pub sessions: u64,
}

/// Handle for one issued bulk request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BulkTicket {
    /// Session that issued the request.
    pub session: u64,
    /// Number of records requested.
    pub count: u32,
}

/// What happened to a resolved bulk response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulkOutcome {
    /// Ids were added and the dialog closed.
    Applied {
        /// Ids that were not already selected.
        added: usize,
        /// Ids returned by the request.
        returned: usize,
    },
    /// The dialog was cancelled or reopened since submission.
    Ignored,
}

impl BulkSelectSlice {
    /// True when the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.dialog, BulkDialogState::Open(_))
    }

    /// Open dialog contents, if shown.
    #[must_use]
    pub const fn active_dialog(&self) -> Option<&BulkDialog> {
        match &self.dialog {
            BulkDialogState::Open(dialog) => Some(dialog),
            BulkDialogState::Closed => None,
        }
    }

    fn session_dialog_mut(&mut self, session: u64) -> Option<&mut BulkDialog> {
        match &mut self.dialog {
            BulkDialogState::Open(dialog) if dialog.session == session => Some(dialog),
            _ => None,
        }
    }
}

/// Show the dialog with an empty input. Reopening an open dialog is a no-op.
pub fn open_dialog(slice: &mut BulkSelectSlice) {
    if slice.is_open() {
        return;
    }
    slice.sessions = slice.sessions.wrapping_add(1);
    slice.dialog = BulkDialogState::Open(BulkDialog {
        session: slice.sessions,
        ..BulkDialog::default()
    });
}

/// Hide the dialog; any in-flight response will be ignored.
pub fn close_dialog(slice: &mut BulkSelectSlice) {
    slice.dialog = BulkDialogState::Closed;
}

/// Replace the raw count input and clear a stale error.
pub fn set_input(slice: &mut BulkSelectSlice, input: String) {
    if let BulkDialogState::Open(dialog) = &mut slice.dialog {
        dialog.input = input;
        dialog.error = None;
    }
}

/// Validate the input and mark the dialog busy.
///
/// # Errors
/// Returns [`BulkSubmitError`] when the dialog is closed or busy, or when the
/// count is invalid; in the last case the message is also shown inline and no
/// request must be issued.
pub fn submit(slice: &mut BulkSelectSlice) -> Result<BulkTicket, BulkSubmitError> {
    let BulkDialogState::Open(dialog) = &mut slice.dialog else {
        return Err(BulkSubmitError::Closed);
    };
    if dialog.busy {
        return Err(BulkSubmitError::Busy);
    }
    match parse_bulk_count(&dialog.input) {
        Ok(count) => {
            dialog.busy = true;
            dialog.error = None;
            Ok(BulkTicket {
                session: dialog.session,
                count,
            })
        }
        Err(err) => {
            dialog.error = Some(err.to_string());
            Err(err.into())
        }
    }
}

/// Apply a successful response: add every id and close the dialog.
pub fn complete(
    slice: &mut BulkSelectSlice,
    selection: &mut SelectionStore,
    ticket: BulkTicket,
    ids: Vec<ArtworkId>,
) -> BulkOutcome {
    match slice.session_dialog_mut(ticket.session) {
        Some(dialog) if dialog.busy => {}
        _ => return BulkOutcome::Ignored,
    }
    let returned = ids.len();
    let added = selection.bulk_add(ids);
    slice.dialog = BulkDialogState::Closed;
    BulkOutcome::Applied { added, returned }
}

/// Record a failed response: keep the dialog open with the error shown.
///
/// Returns `false` when the response no longer belongs to the open dialog.
pub fn fail(slice: &mut BulkSelectSlice, ticket: BulkTicket, message: String) -> bool {
    match slice.session_dialog_mut(ticket.session) {
        Some(dialog) if dialog.busy => {
            dialog.busy = false;
            dialog.error = Some(message);
            true
        }
        _ => false,
    }
}
