//! Domain-level error type.
//!
//! Transport agnostic: the HTTP adapter decides status codes, redirect
//! targets, and response bodies. Services construct these via the helper
//! constructors and convert port failures with `?`.

use crate::domain::ports::StoreError;

/// Failure categories surfaced by domain services.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A submitted field failed validation; nothing was persisted.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    /// The operation needs an authenticated session. `next` is the path the
    /// client should come back to after logging in.
    #[error("login required")]
    LoginRequired { next: String },
    /// Credentials were rejected.
    #[error("{message}")]
    Unauthorized { message: String },
    /// The target does not exist for the acting identity. Also covers
    /// authenticated non-owners, so existence is never disclosed to them.
    #[error("{message}")]
    NotFound { message: String },
    /// Unexpected failure inside the domain or a port.
    #[error("{message}")]
    Internal { message: String },
}

impl Error {
    /// Field-level validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Redirect-to-login failure remembering the requested path.
    pub fn login_required(next: impl Into<String>) -> Self {
        Self::LoginRequired { next: next.into() }
    }

    /// Rejected credentials.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Missing (or undisclosed) target.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Unexpected internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for response payloads.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_failed",
            Self::LoginRequired { .. } => "login_required",
            Self::Unauthorized { .. } => "unauthorized",
            Self::NotFound { .. } => "not_found",
            Self::Internal { .. } => "internal_error",
        }
    }
}

impl From<StoreError> for Error {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Connection { message } => {
                Self::internal(format!("store unavailable: {message}"))
            }
            StoreError::Query { message } => {
                Self::internal(format!("store query failed: {message}"))
            }
            // Conflicts a service did not anticipate are still internal: the
            // anticipated ones are handled where the write happens.
            StoreError::Conflict { message } => {
                Self::internal(format!("store constraint violated: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Error::validation("slug", "taken"), "validation_failed")]
    #[case(Error::login_required("/notes"), "login_required")]
    #[case(Error::unauthorized("bad credentials"), "unauthorized")]
    #[case(Error::not_found("note missing"), "not_found")]
    #[case(Error::internal("boom"), "internal_error")]
    fn codes_are_stable(#[case] error: Error, #[case] code: &str) {
        assert_eq!(error.code(), code);
    }

    #[test]
    fn store_errors_become_internal() {
        let error = Error::from(StoreError::query("oops"));
        assert_eq!(error.code(), "internal_error");
    }
}
