//! Routing definitions for the artgrid UI.
//!
//! The browse route carries its page number in the `page` query parameter
//! (see [`crate::core::paging::PageParams`]).
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Artworks,
    #[not_found]
    #[at("/404")]
    NotFound,
}
