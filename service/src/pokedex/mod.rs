//! Page loaders for the Pokédex list and detail views.
//!
//! [`PokedexLoader`] validates the route/query parameter, performs a single
//! backend call and turns the outcome into page data or a [`LoadError`].
//! [`routes`] exposes the loaders over HTTP with a `cache-control: max-age=120`
//! header on every successful page.

mod loader;
pub mod routes;

pub use loader::{
    parse_non_negative, DetailPage, ListPage, LoadError, NumericParam, PokedexLoader,
    DEFAULT_OFFSET,
};
