//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Page data and the selection are disjoint slices; a page fetch never
//!   touches the selection and a bulk fetch never touches page data.

use crate::core::request::PageSlice;
use crate::core::selection::SelectionStore;
use crate::features::bulk_select::state::BulkSelectSlice;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Store)]
pub struct AppStore {
    /// Current page request and data.
    pub page: PageSlice,
    /// Session-scoped selected ids.
    pub selection: SelectionStore,
    /// Bulk-select dialog state.
    pub bulk: BulkSelectSlice,
    /// Pending notifications.
    pub toasts: ToastQueue,
}

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Ordered toasts plus the id counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    /// Visible toasts, oldest first.
    pub items: Vec<Toast>,
    /// Last id handed out.
    pub last_id: u64,
}

/// Queue a toast and return its id.
pub fn push_toast(queue: &mut ToastQueue, kind: ToastKind, message: impl Into<String>) -> u64 {
    queue.last_id = queue.last_id.wrapping_add(1);
    queue.items.push(Toast {
        id: queue.last_id,
        message: message.into(),
        kind,
    });
    queue.last_id
}

/// Remove a toast by id; unknown ids are ignored.
pub fn dismiss_toast(queue: &mut ToastQueue, id: u64) {
    queue.items.retain(|toast| toast.id != id);
}
