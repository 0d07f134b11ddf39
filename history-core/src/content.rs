//! Loading raw release records from TOML content.
//!
//! The content file lists `[[release]]` tables, each with nested
//! `[[release.revision]]` tables:
//!
//! ```toml
//! [[release]]
//! version = "1.14"
//! released = "2020-02-25"
//!
//! [[release.revision]]
//! version = "1.14.1"
//! released = "2020-03-19"
//! description = '''
//! includes fixes to the go command, tools, and the runtime.'''
//! ```
//!
//! Loading only checks syntax. Semantic checks happen when the records are
//! turned into a [`crate::store::ReleaseStore`].

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::ReleaseVersion;

/// Release data compiled into the binary.
pub const EMBEDDED_RELEASES: &str = include_str!("../../content/releases.toml");

/// Environment variable naming a content file to load instead of the embedded set.
pub const CONTENT_ENV: &str = "RELEASE_HISTORY_CONTENT";

const USER_CONTENT_FILE: &str = "releases.toml";

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
struct ContentFile {
    #[serde(default, rename = "release")]
    releases: Vec<ReleaseVersion>,
}

/// Where release records come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Embedded,
    File(PathBuf),
}

impl ContentSource {
    /// Pick the content location: an explicit path, then `RELEASE_HISTORY_CONTENT`,
    /// then `releases.toml` in the user data directory if it exists, then the
    /// embedded data set.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return Self::File(path);
        }

        if let Some(path) = std::env::var_os(CONTENT_ENV).filter(|p| !p.is_empty()) {
            return Self::File(PathBuf::from(path));
        }

        if let Some(dirs) = directories::ProjectDirs::from("", "", "release-history") {
            let path = dirs.data_dir().join(USER_CONTENT_FILE);
            if path.is_file() {
                return Self::File(path);
            }
        }

        Self::Embedded
    }

    pub fn load(&self) -> Result<Vec<ReleaseVersion>, ContentError> {
        match self {
            Self::Embedded => parse_releases(EMBEDDED_RELEASES, "embedded release data"),
            Self::File(path) => load_file(path),
        }
    }
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded release data"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn load_file(path: &Path) -> Result<Vec<ReleaseVersion>, ContentError> {
    let text = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_releases(&text, &path.display().to_string())
}

/// Parse release records from TOML text. `origin` names the text in errors.
pub fn parse_releases(text: &str, origin: &str) -> Result<Vec<ReleaseVersion>, ContentError> {
    let file: ContentFile = toml::from_str(text).map_err(|source| ContentError::Parse {
        origin: origin.to_string(),
        source,
    })?;
    tracing::debug!(origin, releases = file.releases.len(), "Parsed release content");
    Ok(file.releases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_content_parses() {
        let releases = ContentSource::Embedded.load().unwrap();
        assert_eq!(releases.len(), 15);
        assert_eq!(releases[0].version.as_str(), "1.14");
        assert_eq!(releases[0].revisions.len(), 2);

        let go17 = releases.iter().find(|r| r.version.as_str() == "1.7").unwrap();
        assert!(go17.revisions[1].withdrawn);
        assert!(!go17.revisions[0].withdrawn);
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let releases = parse_releases(
            r#"
            [[release]]
            version = "1.15"
            released = "2020-08-11"
            "#,
            "test",
        )
        .unwrap();

        assert_eq!(releases.len(), 1);
        assert!(releases[0].intro.is_none());
        assert!(releases[0].notes.is_empty());
        assert!(releases[0].revisions.is_empty());
        assert!(releases[0].footer.is_empty());
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let err = parse_releases(
            r#"
            [[release]]
            version = "1.15"
            released = "2020-13-45"
            "#,
            "bad dates",
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
        assert!(err.to_string().contains("bad dates"));
    }

    #[test]
    fn malformed_versions_are_rejected() {
        let err = parse_releases(
            r#"
            [[release]]
            version = "go1.15"
            released = "2020-08-11"
            "#,
            "bad version",
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [[release]]
            version = "1.14"
            released = "2020-02-25"

            [[release.revision]]
            version = "1.14.1"
            released = "2020-03-19"
            description = "includes fixes."
            "#
        )
        .unwrap();

        let source = ContentSource::File(file.path().to_path_buf());
        let releases = source.load().unwrap();
        assert_eq!(releases[0].revisions[0].version.as_str(), "1.14.1");
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let source = ContentSource::File(PathBuf::from("/nonexistent/releases.toml"));
        assert!(matches!(source.load(), Err(ContentError::Read { .. })));
    }

    #[test]
    fn explicit_path_wins() {
        let path = PathBuf::from("/srv/releases.toml");
        assert_eq!(
            ContentSource::resolve(Some(path.clone())),
            ContentSource::File(path)
        );
    }
}
