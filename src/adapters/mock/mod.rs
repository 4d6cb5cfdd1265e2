//! Test doubles for the trait seams.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemorySession`] - in-memory signed-in user
//! - [`MockTranslator`] - table-driven translator

pub mod http;
pub mod session;
pub mod translator;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use session::InMemorySession;
pub use translator::{MockTranslator, TranslatorCall};
