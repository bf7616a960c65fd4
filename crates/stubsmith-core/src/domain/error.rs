// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (errors travel up through several layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    /// The generation request is missing its base name or the name is unusable.
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    /// A declaration keyword was empty or not a plain identifier.
    #[error("Invalid declaration keyword '{keyword}'")]
    InvalidKeyword { keyword: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidRequest { reason } => vec![
                format!("Details: {}", reason),
                "Pass a non-empty NAME, e.g. `stubsmith generate User`".into(),
                "The name must not contain path separators".into(),
            ],
            Self::MissingRequiredField { field } => vec![format!(
                "Provide a value for '{}'",
                field
            )],
            Self::InvalidKeyword { keyword } => vec![
                format!("'{}' cannot introduce a declaration", keyword),
                "Keywords must be non-empty and made of letters, digits or '_'".into(),
                "Check `declaration_keywords` in your profile".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidRequest { .. } | Self::MissingRequiredField { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidKeyword { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
