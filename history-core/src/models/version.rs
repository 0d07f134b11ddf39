use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("version identifier is empty")]
    Empty,
    #[error("version identifier {0:?} has an empty component")]
    EmptyComponent(String),
    #[error("version identifier {0:?} has a non-numeric component")]
    NotNumeric(String),
}

/// A dotted numeric release identifier, e.g. `1.14` or `1.14.2`.
///
/// The original text is kept so that headings and anchors reproduce exactly
/// what the content authored (`1` stays `1`, never `1.0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionId {
    text: String,
    parts: Vec<u32>,
}

impl VersionId {
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut parts = Vec::new();
        for part in s.split('.') {
            if part.is_empty() {
                return Err(VersionError::EmptyComponent(s.to_string()));
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(VersionError::NotNumeric(s.to_string()));
            }
            let n = part
                .parse::<u32>()
                .map_err(|_| VersionError::NotNumeric(s.to_string()))?;
            parts.push(n);
        }

        Ok(Self {
            text: s.to_string(),
            parts,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn components(&self) -> &[u32] {
        &self.parts
    }

    /// The identifier with its last component removed, if it has more than one.
    pub fn parent(&self) -> Option<VersionId> {
        if self.parts.len() < 2 {
            return None;
        }
        let parts = self.parts[..self.parts.len() - 1].to_vec();
        let text = parts
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        Some(Self { text, parts })
    }

    /// Whether two identifiers name the same release line once trailing
    /// zero components are ignored (`1.0` and `1` are the same line).
    pub fn same_line(&self, other: &VersionId) -> bool {
        trim_zeros(&self.parts) == trim_zeros(&other.parts)
    }

    /// Whether this identifier is a revision of the `release` line.
    pub fn is_revision_of(&self, release: &VersionId) -> bool {
        self.parent().is_some_and(|parent| parent.same_line(release))
    }
}

fn trim_zeros(parts: &[u32]) -> &[u32] {
    let end = parts
        .iter()
        .rposition(|&p| p != 0)
        .map(|i| i + 1)
        .unwrap_or(0);
    &parts[..end]
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for VersionId {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for VersionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for VersionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
