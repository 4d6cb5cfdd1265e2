//! In-memory session provider.
//!
//! Default provider for the binary when no session file is configured,
//! and the provider used throughout the tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::error::SessionError;
use crate::models::User;
use crate::traits::SessionProvider;

#[derive(Debug, Clone, Default)]
pub struct InMemorySession {
    user: Arc<Mutex<Option<User>>>,
    updates: Arc<Mutex<Vec<User>>>,
    fail_writes: Arc<Mutex<bool>>,
}

impl InMemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(user: User) -> Self {
        let session = Self::default();
        *session.user.lock().unwrap() = Some(user);
        session
    }

    /// Make `login` and `update_user` fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    pub fn current(&self) -> Option<User> {
        self.user.lock().unwrap().clone()
    }

    /// Every user passed to `update_user`, oldest first.
    pub fn updates(&self) -> Vec<User> {
        self.updates.lock().unwrap().clone()
    }

    fn check_writable(&self) -> Result<(), SessionError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(SessionError::Io {
                path: "<memory>".into(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "write refused"),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SessionProvider for InMemorySession {
    async fn check_session(&self) -> Result<Option<User>, SessionError> {
        Ok(self.current())
    }

    async fn login(&self, user: &User) -> Result<(), SessionError> {
        self.check_writable()?;
        *self.user.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    async fn update_user(&self, user: &User) -> Result<(), SessionError> {
        self.check_writable()?;
        self.updates.lock().unwrap().push(user.clone());
        *self.user.lock().unwrap() = Some(user.clone());
        Ok(())
    }

    async fn logout(&self) -> Result<(), SessionError> {
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}
