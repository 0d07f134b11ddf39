//! Domain models for the release history page.
//!
//! # Core Concepts
//!
//! ## Loaded Records
//!
//! - [`ReleaseVersion`]: A major release line such as go1.14, with its release
//!   date, introductory paragraphs and minor revisions.
//! - [`Revision`]: A minor or patch build under a release line. Revisions may be
//!   withdrawn but are never removed from history.
//! - [`VersionId`]: Parsed dotted identifier shared by releases and revisions.
//!
//! ## Render Tree
//!
//! Derived per request and discarded after serialization:
//!
//! - [`Section`]: A heading with a stable [`AnchorId`] and ordered [`Block`]s.
//! - [`TrustedHtml`]: Reviewed markup that is emitted without escaping. Plain
//!   text only enters it through the escaping constructors.

mod html;
mod release;
mod section;
mod version;

pub use html::*;
pub use release::*;
pub use section::*;
pub use version::*;
