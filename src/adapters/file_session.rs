//! File-backed session provider.
//!
//! Stores the signed-in user as JSON, by default in
//! `~/.kizuna/session.json`. A missing file means signed out.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::SessionError;
use crate::models::User;
use crate::traits::SessionProvider;

#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    /// Session file under the user's home directory.
    pub fn new() -> Result<Self, SessionError> {
        let home = dirs::home_dir().ok_or(SessionError::NoHomeDirectory)?;
        Ok(Self::at(home.join(".kizuna").join("session.json")))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.clone(),
            source,
        }
    }

    async fn write(&self, user: &User) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }
        let json = serde_json::to_vec_pretty(user)?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), user = %user.id, "session saved");
        Ok(())
    }
}

#[async_trait]
impl SessionProvider for FileSession {
    async fn check_session(&self) -> Result<Option<User>, SessionError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    async fn login(&self, user: &User) -> Result<(), SessionError> {
        self.write(user).await
    }

    async fn update_user(&self, user: &User) -> Result<(), SessionError> {
        self.write(user).await
    }

    async fn logout(&self) -> Result<(), SessionError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}
