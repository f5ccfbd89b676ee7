use std::fs;
use std::path::{Path, PathBuf};
use chrono::Utc;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::SESSION_FILE_NAME;
use crate::errors::{DashError, DashResult};
use crate::structs::auth_token::AuthToken;
use crate::structs::session::Session;

/// Keeps the bearer token between invocations in `<config dir>/session.toml`.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new() -> DashResult<Self> {
        Ok(Self::in_dir(&ConfigManager::config_dir()?))
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save_token(&self, base_url: &str, email: &str, token: &AuthToken) -> DashResult<Session> {
        let session = Session {
            base_url: base_url.to_string(),
            email: email.to_string(),
            access_token: token.access_token.clone(),
            token_type: token.token_type.clone(),
            saved_at: Utc::now().to_rfc3339(),
        };
        self.save(&session)?;
        Ok(session)
    }

    pub fn save(&self, session: &Session) -> DashResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(session)?)?;
        log::debug!("Session saved to {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> DashResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Some(toml::from_str(&content)?))
    }

    /// Returns whether a session file was removed.
    pub fn clear(&self) -> DashResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        Ok(true)
    }

    /// The stored session, provided it was issued by `base_url`.
    pub fn require_session(&self, base_url: &str) -> DashResult<Session> {
        let session = self.load()?
            .ok_or_else(|| DashError::auth_error("not signed in"))?;

        if session.base_url.trim_end_matches('/') != base_url.trim_end_matches('/') {
            return Err(DashError::auth_error(&format!(
                "stored session belongs to {}, not {}",
                session.base_url, base_url
            )));
        }
        Ok(session)
    }

    pub fn require_token(&self, base_url: &str) -> DashResult<String> {
        Ok(self.require_session(base_url)?.access_token)
    }
}
