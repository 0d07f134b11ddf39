//! Release history data model, validation and deterministic HTML rendering.
//!
//! Data flows one way: [`content`] loads raw release records, [`store`]
//! validates them into an immutable [`store::ReleaseStore`], [`render`]
//! turns a store into a [`models::Section`] tree and serializes that tree
//! to an HTML fragment.

pub mod content;
pub mod models;
pub mod render;
pub mod store;
