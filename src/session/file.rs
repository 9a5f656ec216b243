use crate::error::Result;
use crate::interface::SessionStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

/// JSON file holding the `token` and `user` entries
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<SessionFile> {
        if !self.path.exists() {
            return Ok(SessionFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SessionFile::default());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Result<Option<String>> {
        Ok(self.read()?.token)
    }

    fn user(&self) -> Result<Option<String>> {
        Ok(self.read()?.user)
    }

    fn set(&self, token: &str, user: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = SessionFile {
            token: Some(token.to_string()),
            user: Some(user.to_string()),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&file)?)?;
        log::debug!("session written to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
