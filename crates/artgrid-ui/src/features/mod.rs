//! Feature slices: each owns its state, actions, and (wasm-only) views.
pub mod artworks;
pub mod bulk_select;
