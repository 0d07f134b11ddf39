//! HTTP surface for the release history page.
//!
//! The data model, validation and rendering live in `history_core`; this
//! crate adds configuration, routing and content reloads.

pub mod api;
pub mod config;
pub mod reload;

pub use history_core::{content, models, render, store};
