//! Error category classification for unified error handling.
//!
//! Every failure in the client is soft. The category only decides where
//! the failure shows up: inline next to the control that caused it, in the
//! log, or nowhere at all.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Rejected user input (oversized or wrong media, blank text).
    /// Shown inline; the user fixes it by trying again.
    Validation,

    /// An external collaborator failed (translation API, network).
    /// Logged and rolled back; never shown as a banner.
    External,

    /// A lookup found nothing. Callers fall back silently.
    NotFound,

    /// Filesystem or OS errors.
    System,

    /// Missing or invalid configuration.
    Configuration,
}

impl ErrorCategory {
    /// Whether the user should see this error next to the control that
    /// triggered it.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, ErrorCategory::Validation)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "validation",
            ErrorCategory::External => "external",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_validation_is_user_facing() {
        assert!(ErrorCategory::Validation.is_user_facing());
        assert!(!ErrorCategory::External.is_user_facing());
        assert!(!ErrorCategory::NotFound.is_user_facing());
        assert!(!ErrorCategory::System.is_user_facing());
        assert!(!ErrorCategory::Configuration.is_user_facing());
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ErrorCategory::External.to_string(), "external");
        assert_eq!(ErrorCategory::NotFound.to_string(), "not_found");
    }
}
