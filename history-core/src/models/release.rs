use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{TrustedHtml, VersionId};

/// A major release line and everything published under it.
///
/// Revisions are kept in authored order, oldest first. The page lists
/// releases newest first but revisions oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseVersion {
    pub version: VersionId,
    pub released: NaiveDate,
    /// Replaces the generated "major release" paragraph when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<TrustedHtml>,
    /// Extra paragraphs following the intro.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<TrustedHtml>,
    #[serde(default, rename = "revision", skip_serializing_if = "Vec::is_empty")]
    pub revisions: Vec<Revision>,
    /// Paragraphs closing the release entry, after the minor revisions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub footer: Vec<TrustedHtml>,
}

impl ReleaseVersion {
    pub fn new(version: VersionId, released: NaiveDate) -> Self {
        Self {
            version,
            released,
            intro: None,
            notes: Vec::new(),
            revisions: Vec::new(),
            footer: Vec::new(),
        }
    }

    pub fn with_revision(mut self, revision: Revision) -> Self {
        self.revisions.push(revision);
        self
    }
}

/// A minor or patch build under a [`ReleaseVersion`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revision {
    pub version: VersionId,
    pub released: NaiveDate,
    /// Rendered after the "goX.Y.Z (released ...)" prefix, unmodified.
    pub description: TrustedHtml,
    /// Tagged but not for use. The description is expected to say so and
    /// name the revision that supersedes it.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub withdrawn: bool,
}

impl Revision {
    pub fn new(version: VersionId, released: NaiveDate, description: TrustedHtml) -> Self {
        Self {
            version,
            released,
            description,
            withdrawn: false,
        }
    }

    pub fn withdrawn(mut self) -> Self {
        self.withdrawn = true;
        self
    }
}
