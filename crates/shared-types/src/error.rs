use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of auth-flow errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthErrorKind {
    /// The provider accepted the request but rejected the operation.
    Provider,
    /// The request never produced a provider response.
    Network,
    /// The callback redirect carried an error or an unusable payload.
    InvalidCallback,
    /// An operation that needs a session was called without one.
    MissingSession,
}

impl fmt::Display for AuthErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthErrorKind::Provider => write!(f, "Provider"),
            AuthErrorKind::Network => write!(f, "Network"),
            AuthErrorKind::InvalidCallback => write!(f, "InvalidCallback"),
            AuthErrorKind::MissingSession => write!(f, "MissingSession"),
        }
    }
}

/// Structured error returned by every auth operation.
///
/// The message is what the provider (or transport) said, passed through
/// verbatim — the UI renders it inline without reinterpretation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn provider(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Provider,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn invalid_callback(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::InvalidCallback,
            message: message.into(),
        }
    }

    pub fn missing_session(message: impl Into<String>) -> Self {
        Self {
            kind: AuthErrorKind::MissingSession,
            message: message.into(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AuthError {}
