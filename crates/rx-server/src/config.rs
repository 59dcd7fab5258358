use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use leptos::prelude::LeptosOptions;
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

const DEFAULT_CONFIG_PATH: &str = "/etc/rxos/config.json";

/// Config file location: `RXOS_CONFIG_PATH`, or the default path.
pub fn config_path() -> PathBuf {
    resolve_config_path(std::env::var("RXOS_CONFIG_PATH").ok())
}

fn resolve_config_path(from_env: Option<String>) -> PathBuf {
    PathBuf::from(from_env.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string()))
}

/// Where a loaded `ServerConfig` came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the compiled site (`pkg/` with WASM, JS, CSS).
    #[serde(default = "default_site_root")]
    pub site_root: String,

    /// Base name of the generated `pkg/` assets.
    #[serde(default = "default_output_name")]
    pub output_name: String,
}

fn default_listen_address() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}
fn default_site_root() -> String {
    "target/site".to_string()
}
fn default_output_name() -> String {
    "rxos".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            port: default_port(),
            site_root: default_site_root(),
            output_name: default_output_name(),
        }
    }
}

impl ServerConfig {
    pub fn load_from_file(path: &Path) -> ServerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Defaults when the file is absent; a present but invalid file is an error.
    pub fn load_or_default(path: &Path) -> ServerResult<(Self, ConfigSource)> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok((serde_json::from_str(&content)?, ConfigSource::File)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok((Self::default(), ConfigSource::Defaults))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        let raw = if self.listen_address.contains(':') {
            format!("[{}]:{}", self.listen_address, self.port)
        } else {
            format!("{}:{}", self.listen_address, self.port)
        };
        raw.parse().map_err(|_| ServerError::InvalidAddress(raw))
    }

    pub fn leptos_options(&self) -> ServerResult<LeptosOptions> {
        Ok(LeptosOptions::builder()
            .output_name(self.output_name.as_str())
            .site_root(self.site_root.as_str())
            .site_addr(self.socket_addr()?)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_address, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.site_root, "target/site");
        assert_eq!(config.output_name, "rxos");
    }

    #[test]
    fn test_empty_object_matches_default() {
        let config: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "port": 8080, "site_root": "/srv/rxos" }}"#).unwrap();

        let config = ServerConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.site_root, "/srv/rxos");
        assert_eq!(config.listen_address, "0.0.0.0");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) =
            ServerConfig::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
    }

    #[test]
    fn test_present_file_reports_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "port": 9000 }}"#).unwrap();

        let (config, source) = ServerConfig::load_or_default(file.path()).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(source, ConfigSource::File);
    }

    #[test]
    fn test_config_path_resolution() {
        assert_eq!(resolve_config_path(None), PathBuf::from("/etc/rxos/config.json"));
        assert_eq!(
            resolve_config_path(Some("/tmp/rxos.json".to_string())),
            PathBuf::from("/tmp/rxos.json")
        );
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = ServerConfig::load_or_default(file.path()).unwrap_err();
        assert!(matches!(err, ServerError::Serialization(_)));
    }

    #[test]
    fn test_socket_addr_ipv4_and_ipv6() {
        let v4 = ServerConfig::default();
        assert_eq!(v4.socket_addr().unwrap(), "0.0.0.0:3000".parse().unwrap());

        let v6 = ServerConfig {
            listen_address: "::1".to_string(),
            port: 8443,
            ..ServerConfig::default()
        };
        assert_eq!(v6.socket_addr().unwrap(), "[::1]:8443".parse().unwrap());
    }

    #[test]
    fn test_invalid_address() {
        let config = ServerConfig {
            listen_address: "not an address".to_string(),
            ..ServerConfig::default()
        };
        match config.socket_addr() {
            Err(ServerError::InvalidAddress(raw)) => assert_eq!(raw, "not an address:3000"),
            other => panic!("expected InvalidAddress, got {other:?}"),
        }
    }

    #[test]
    fn test_leptos_options_follow_config() {
        let config = ServerConfig {
            port: 4000,
            output_name: "front".to_string(),
            ..ServerConfig::default()
        };
        let options = config.leptos_options().unwrap();
        assert_eq!(&*options.output_name, "front");
        assert_eq!(&*options.site_root, "target/site");
        assert_eq!(options.site_addr, "0.0.0.0:4000".parse().unwrap());
    }
}
