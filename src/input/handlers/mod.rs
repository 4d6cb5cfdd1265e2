//! Command handlers for executing commands.
//!
//! This module contains handler functions organized by category:
//! - [`navigation`] - Page switching, list selection and post actions
//! - [`editing`] - Text input for whichever field has focus
//! - [`modal`] - Sign-in list, go-live modal and path prompt

pub mod editing;
pub mod modal;
pub mod navigation;

pub use editing::*;
pub use modal::*;
pub use navigation::*;
