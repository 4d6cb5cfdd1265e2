//! Unified error handling for kizuna.
//!
//! - **Error categories** decide where a failure surfaces
//! - **Domain errors**: media validation, translation, session, config
//! - **Unified type**: [`KizunaError`] wraps them all
//! - **Result alias**: [`KizunaResult<T>`]
//!
//! | Category | Example | Surfaced |
//! |----------|---------|----------|
//! | Validation | video longer than 5 minutes | inline, cleared on retry |
//! | External | translation API down | log only, state rolled back |
//! | NotFound | profile id unknown | silent fallback |
//! | System | session file unreadable | log only |
//! | Configuration | bad `KIZUNA_UPLOAD_TICK_MS` | startup error |
//!
//! No error is fatal once the UI is running.

mod category;
mod config;
mod kizuna_error;
mod media;
mod session;
mod translation;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use kizuna_error::KizunaError;
pub use media::MediaError;
pub use session::SessionError;
pub use translation::TranslationError;

/// Type alias for Results using [`KizunaError`].
pub type KizunaResult<T> = Result<T, KizunaError>;
