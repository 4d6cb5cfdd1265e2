//! Session provider trait abstraction.
//!
//! Mirrors the auth context of the web client: a session check on start-up,
//! login, logout, and a hook that receives profile edits.

use async_trait::async_trait;

use crate::error::SessionError;
use crate::models::User;

#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Returns the signed-in user, or `None` when signed out.
    async fn check_session(&self) -> Result<Option<User>, SessionError>;

    async fn login(&self, user: &User) -> Result<(), SessionError>;

    /// Replaces the stored user after a profile edit.
    async fn update_user(&self, user: &User) -> Result<(), SessionError>;

    async fn logout(&self) -> Result<(), SessionError>;
}
