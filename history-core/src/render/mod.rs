//! Release history rendering.
//!
//! [`render_history`] builds the [`Section`](crate::models::Section) tree,
//! [`serialize`] turns it into an HTML fragment and [`render_page`] wraps a
//! fragment in the page shell. All three are pure: the same store always
//! produces the same bytes.

mod fold;
mod history;
mod page;
mod serialize;

pub use fold::*;
pub use history::*;
pub use page::*;
pub use serialize::*;

use crate::store::ReleaseStore;

/// Render and serialize the whole history as an HTML fragment.
pub fn render_fragment(store: &ReleaseStore) -> String {
    serialize(&render_history(store))
}
