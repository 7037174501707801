//! Page request bookkeeping.
//!
//! # Design
//! - Every page fetch is tagged with a [`RequestKey`] (page + generation).
//! - A response is applied only while its key is still the current key, so a
//!   slow response for a page the user already left can never overwrite a
//!   newer one.
//! - No retry: a failed fetch parks the slice in [`PageState::Errored`].

use artgrid_api_models::ArtworkPage;

/// Identity of one issued page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestKey {
    /// 1-based page the request was issued for.
    pub page: u32,
    /// Monotonic counter distinguishing repeated requests for the same page.
    pub generation: u64,
}

/// Observable state of the current page fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PageState {
    /// No request issued yet, or one is in flight.
    #[default]
    Loading,
    /// The current request failed; carries a display message.
    Errored(String),
    /// The current request resolved with data.
    Ready(ArtworkPage),
}

/// Result of offering a response to the slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseOutcome {
    /// The response matched the current key and replaced the state.
    Applied,
    /// The response belonged to a superseded request and was dropped.
    Stale,
}

/// Page-controller slice: the current request key and its state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageSlice {
    /// Key of the request whose response may still be applied.
    pub current: Option<RequestKey>,
    /// Last generation handed out.
    pub generation: u64,
    /// Current fetch state.
    pub state: PageState,
}

impl PageSlice {
    /// Page number the slice currently targets.
    #[must_use]
    pub fn page(&self) -> Option<u32> {
        self.current.map(|key| key.page)
    }

    /// Page whose data is on screen; `None` unless the state is ready.
    #[must_use]
    pub fn ready_page(&self) -> Option<u32> {
        match &self.state {
            PageState::Ready(_) => self.page(),
            PageState::Loading | PageState::Errored(_) => None,
        }
    }

    /// Loaded data, when ready.
    #[must_use]
    pub const fn data(&self) -> Option<&ArtworkPage> {
        match &self.state {
            PageState::Ready(page) => Some(page),
            PageState::Loading | PageState::Errored(_) => None,
        }
    }
}

/// Outcome of asking for a page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRequest {
    /// A new request must be issued with this key.
    Issue(RequestKey),
    /// The page is already current; nothing to do.
    Unchanged(RequestKey),
}

/// Start tracking a request for `page`.
///
/// Asking for the page that is already current returns
/// [`PageRequest::Unchanged`] so re-renders do not refetch.
pub fn begin_page_request(slice: &mut PageSlice, page: u32) -> PageRequest {
    if let Some(key) = slice.current
        && key.page == page
    {
        return PageRequest::Unchanged(key);
    }
    slice.generation = slice.generation.wrapping_add(1);
    let key = RequestKey {
        page,
        generation: slice.generation,
    };
    slice.current = Some(key);
    slice.state = PageState::Loading;
    PageRequest::Issue(key)
}

/// Offer a resolved response for `key`.
pub fn apply_page_response(
    slice: &mut PageSlice,
    key: RequestKey,
    result: Result<ArtworkPage, String>,
) -> ResponseOutcome {
    if slice.current != Some(key) {
        return ResponseOutcome::Stale;
    }
    slice.state = match result {
        Ok(page) => PageState::Ready(page),
        Err(message) => PageState::Errored(message),
    };
    ResponseOutcome::Applied
}
