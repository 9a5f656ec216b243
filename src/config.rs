use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[cfg(feature = "no-wasm")]
use crate::error::{ErrorKind, Result};
#[cfg(feature = "no-wasm")]
use std::path::Path;

#[cfg(not(feature = "wasm"))]
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";
#[cfg(feature = "wasm")]
pub const DEFAULT_BASE_URL: &str = "/api";

pub const LOGIN_PATH: &str = "/login.html";
pub const HOME_PATH: &str = "/";

/// Client configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    /// API prefix every endpoint is appended to
    pub base_url: String,
    /// Redirect target on 401 and failed guards
    pub login_path: String,
    /// Redirect target after logout
    pub home_path: String,
    /// Where the CLI keeps its session; unused in the browser
    pub session_file: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_path: LOGIN_PATH.to_string(),
            home_path: HOME_PATH.to_string(),
            session_file: None,
        }
    }
}

impl ClientConfig {
    /// Override the API prefix, dropping any trailing slash
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_session_file(mut self, session_file: Option<PathBuf>) -> Self {
        if session_file.is_some() {
            self.session_file = session_file;
        }
        self
    }

    /// Loads configuration from a file if it exists, otherwise returns the default config
    #[cfg(feature = "no-wasm")]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ErrorKind::ConfigError(format!("Failed to read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;

        Ok(config.with_base_url(None))
    }

    /// Session file to use: the configured one or the per-user default
    #[cfg(feature = "no-wasm")]
    pub fn session_path(&self) -> Result<PathBuf> {
        self.session_file
            .clone()
            .or_else(|| default_dir().map(|dir| dir.join("session.json")))
            .ok_or_else(|| {
                ErrorKind::ConfigError("Could not determine a session file location".to_string())
                    .into()
            })
    }
}

#[cfg(feature = "no-wasm")]
fn default_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("course_portal"))
}

/// `<config dir>/course_portal/config.toml`
#[cfg(feature = "no-wasm")]
pub fn default_config_file() -> Option<PathBuf> {
    default_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(all(test, feature = "no-wasm"))]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load_from_file(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.login_path, "/login.html");
        assert_eq!(config.home_path, "/");
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "base_url = \"https://portal.example.org/api/\"\nsession_file = \"/tmp/s.json\"\n",
        )
        .unwrap();

        let config = ClientConfig::load_from_file(&path).unwrap();
        assert_eq!(config.base_url, "https://portal.example.org/api");
        assert_eq!(config.login_path, LOGIN_PATH);
        assert_eq!(config.session_path().unwrap(), PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [").unwrap();

        let err = ClientConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ConfigError(_)));
    }

    #[test]
    fn cli_overrides_win() {
        let config = ClientConfig::default()
            .with_base_url(Some("http://localhost:9000/api/".to_string()))
            .with_session_file(Some(PathBuf::from("/tmp/other.json")));
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.session_file, Some(PathBuf::from("/tmp/other.json")));

        let untouched = config.clone().with_session_file(None);
        assert_eq!(untouched.session_file, config.session_file);
    }
}
