//! The immutable, validated collection of release records.

mod snapshot;

pub use snapshot::*;

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::content::{ContentError, ContentSource};
use crate::models::{ReleaseVersion, VersionId};

/// Content that must not be served. All of these are fatal at load time.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error("release go{0} is listed more than once")]
    DuplicateRelease(VersionId),
    #[error("revision go{0} is listed more than once")]
    DuplicateRevision(VersionId),
    #[error("revision go{revision} is not part of release go{release}")]
    UnknownRelease {
        revision: VersionId,
        release: VersionId,
    },
    #[error("revision go{revision} ({released}) predates release go{release} ({release_date})")]
    RevisionBeforeRelease {
        revision: VersionId,
        released: NaiveDate,
        release: VersionId,
        release_date: NaiveDate,
    },
    #[error("revision go{revision} ({released}) is listed after go{previous} ({previous_date})")]
    RevisionOutOfOrder {
        revision: VersionId,
        released: NaiveDate,
        previous: VersionId,
        previous_date: NaiveDate,
    },
    #[error("revision go{0} has an empty description")]
    EmptyDescription(VersionId),
}

/// Validated release history.
///
/// Built once from a content source and never mutated afterwards. Releases
/// keep their authored order; the renderer decides presentation order.
#[derive(Debug, Clone, Default)]
pub struct ReleaseStore {
    releases: Vec<ReleaseVersion>,
}

impl ReleaseStore {
    pub fn new(releases: Vec<ReleaseVersion>) -> Result<Self, StoreError> {
        validate(&releases)?;
        Ok(Self { releases })
    }

    /// Load and validate records from `source`.
    pub fn load(source: &ContentSource) -> Result<Self, StoreError> {
        let store = Self::new(source.load()?)?;
        tracing::info!(
            source = %source,
            releases = store.len(),
            revisions = store.revision_count(),
            "Loaded release history"
        );
        Ok(store)
    }

    pub fn releases(&self) -> &[ReleaseVersion] {
        &self.releases
    }

    pub fn get(&self, version: &str) -> Option<&ReleaseVersion> {
        self.releases.iter().find(|r| r.version.as_str() == version)
    }

    /// The most recently released major version.
    pub fn latest(&self) -> Option<&ReleaseVersion> {
        // Ties keep the first authored entry.
        self.releases
            .iter()
            .rev()
            .max_by_key(|r| r.released)
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    pub fn revision_count(&self) -> usize {
        self.releases.iter().map(|r| r.revisions.len()).sum()
    }
}

fn validate(releases: &[ReleaseVersion]) -> Result<(), StoreError> {
    let mut release_ids = HashSet::new();
    let mut revision_ids = HashSet::new();

    for release in releases {
        if !release_ids.insert(release.version.as_str()) {
            return Err(StoreError::DuplicateRelease(release.version.clone()));
        }

        let mut previous: Option<(&VersionId, NaiveDate)> = None;
        for revision in &release.revisions {
            if !revision.version.is_revision_of(&release.version) {
                return Err(StoreError::UnknownRelease {
                    revision: revision.version.clone(),
                    release: release.version.clone(),
                });
            }
            if !revision_ids.insert(revision.version.as_str()) {
                return Err(StoreError::DuplicateRevision(revision.version.clone()));
            }
            if revision.released < release.released {
                return Err(StoreError::RevisionBeforeRelease {
                    revision: revision.version.clone(),
                    released: revision.released,
                    release: release.version.clone(),
                    release_date: release.released,
                });
            }
            if let Some((prev, prev_date)) = previous {
                // Same-day revisions are allowed; authored order breaks the tie.
                if revision.released < prev_date {
                    return Err(StoreError::RevisionOutOfOrder {
                        revision: revision.version.clone(),
                        released: revision.released,
                        previous: prev.clone(),
                        previous_date: prev_date,
                    });
                }
            }
            if revision.description.is_blank() {
                return Err(StoreError::EmptyDescription(revision.version.clone()));
            }
            previous = Some((&revision.version, revision.released));
        }
    }

    Ok(())
}
