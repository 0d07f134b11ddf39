//! Server configuration loaded from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use history_core::content::ContentSource;
use thiserror::Error;

/// Listen address (from RELEASE_HISTORY_ADDR)
pub const ADDR_ENV: &str = "RELEASE_HISTORY_ADDR";

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid RELEASE_HISTORY_ADDR value {value:?}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Where release records are loaded from, at startup and on reload.
    pub content: ContentSource,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var(ADDR_ENV).ok();
        Self::from_values(addr.as_deref(), ContentSource::resolve(None))
    }

    fn from_values(addr: Option<&str>, content: ContentSource) -> Result<Self, ConfigError> {
        let value = addr
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_ADDR);
        let addr = value.parse().map_err(|source| ConfigError::InvalidAddr {
            value: value.to_string(),
            source,
        })?;
        Ok(Self { addr, content })
    }

    /// Apply command line overrides.
    pub fn with_overrides(mut self, addr: Option<SocketAddr>, content: Option<PathBuf>) -> Self {
        if let Some(addr) = addr {
            self.addr = addr;
        }
        if let Some(path) = content {
            self.content = ContentSource::File(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost() {
        let config = ServerConfig::from_values(None, ContentSource::Embedded).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.content, ContentSource::Embedded);
    }

    #[test]
    fn blank_addr_uses_default() {
        let config = ServerConfig::from_values(Some("  "), ContentSource::Embedded).unwrap();
        assert_eq!(config.addr.port(), 3000);
    }

    #[test]
    fn invalid_addr_is_an_error() {
        let err = ServerConfig::from_values(Some("localhost"), ContentSource::Embedded).unwrap_err();
        assert!(err.to_string().contains("RELEASE_HISTORY_ADDR"));
    }

    #[test]
    fn overrides_replace_env_values() {
        let config = ServerConfig::from_values(Some("0.0.0.0:8080"), ContentSource::Embedded)
            .unwrap()
            .with_overrides(
                Some("127.0.0.1:9000".parse().unwrap()),
                Some(PathBuf::from("/srv/releases.toml")),
            );
        assert_eq!(config.addr.port(), 9000);
        assert_eq!(
            config.content,
            ContentSource::File(PathBuf::from("/srv/releases.toml"))
        );
    }

    #[test]
    fn missing_overrides_keep_env_values() {
        let config = ServerConfig::from_values(Some("0.0.0.0:8080"), ContentSource::Embedded)
            .unwrap()
            .with_overrides(None, None);
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.content, ContentSource::Embedded);
    }
}
