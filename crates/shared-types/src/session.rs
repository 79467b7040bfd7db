use serde::{Deserialize, Serialize};

/// The provider's record of an authenticated user.
///
/// Only the fields the app reads are modeled; everything is defaulted so
/// provider-side additions never break deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub confirmed_at: Option<String>,
    #[serde(default)]
    pub confirmation_sent_at: Option<String>,
}

/// An access/refresh token pair issued by the hosted auth provider.
///
/// Held in memory for the process lifetime only — nothing here is persisted
/// or validated locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

impl Session {
    /// Email of the signed-in user, when the provider included one.
    pub fn user_email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.email.as_deref())
    }
}

/// What happened to the auth state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthChangeEvent {
    /// A session existed when the listener attached.
    InitialSession,
    SignedIn,
    SignedOut,
    /// The user arrived through a password-recovery link.
    PasswordRecovery,
}

/// One notification delivered to auth-state subscribers: the event plus the
/// session that now applies (absent when signed out).
#[derive(Debug, Clone, PartialEq)]
pub struct AuthStateChange {
    pub event: AuthChangeEvent,
    pub session: Option<Session>,
}
