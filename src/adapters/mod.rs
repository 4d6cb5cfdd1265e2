//! Concrete implementations of the traits in `crate::traits` and
//! `crate::translation`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FileSession`] - JSON session file
//!
//! The [`mock`] submodule holds the in-memory doubles.

pub mod file_session;
pub mod mock;
pub mod reqwest_http;

pub use file_session::FileSession;
pub use mock::{InMemorySession, MockHttpClient, MockTranslator};
pub use reqwest_http::ReqwestHttpClient;
