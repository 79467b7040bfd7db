use crate::callback::{parse_fragment, CallbackKind};
use crate::events::{AuthSubscription, ListenerSet};
use serde::Deserialize;
use serde_json::json;
use shared_types::{AuthChangeEvent, AuthError, AuthSettings, AuthStateChange, AuthUser, Session};
use std::sync::{Arc, Mutex};

/// Result of a sign-up attempt. Providers configured to auto-confirm return
/// a session outright; otherwise the user must follow the confirmation
/// email first.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    Active(Session),
    ConfirmationSent(AuthUser),
}

/// Client for the hosted auth provider.
///
/// Clones share one session slot and one listener set, so any clone's
/// sign-in is observed by every subscriber.
#[derive(Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    auth_url: String,
    anon_key: String,
    session: Arc<Mutex<Option<Session>>>,
    listeners: ListenerSet,
}

impl AuthClient {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_url: settings.auth_url.trim_end_matches('/').to_string(),
            anon_key: settings.anon_key.clone(),
            session: Arc::new(Mutex::new(None)),
            listeners: ListenerSet::default(),
        }
    }

    /// Subscribe to auth-state changes. If a session already exists the
    /// handle starts with an `InitialSession` change queued.
    pub fn on_auth_state_change(&self) -> AuthSubscription {
        let initial = self.current_session().map(|session| AuthStateChange {
            event: AuthChangeEvent::InitialSession,
            session: Some(session),
        });
        self.listeners.subscribe(initial)
    }

    /// The session from the most recent successful auth action, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.session.lock().ok().and_then(|slot| slot.clone())
    }

    /// Exchange email and password for a session.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let url = format!("{}/token", self.auth_url);
        let response = self
            .http
            .post(&url)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport_error)?;

        let session: Session = Self::parse_response(response).await?;
        self.store_session(session.clone(), AuthChangeEvent::SignedIn);
        tracing::info!(email = email, "signed in");
        Ok(session)
    }

    /// Register a new account. `redirect_to` is where the confirmation email
    /// link should land the browser.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        redirect_to: Option<&str>,
    ) -> Result<SignUpOutcome, AuthError> {
        let url = format!("{}/signup", self.auth_url);
        let mut request = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }));
        if let Some(redirect) = redirect_to {
            request = request.query(&[("redirect_to", redirect)]);
        }
        let response = request.send().await.map_err(transport_error)?;

        match Self::parse_response::<SignUpResponse>(response).await? {
            SignUpResponse::Active(session) => {
                self.store_session(session.clone(), AuthChangeEvent::SignedIn);
                tracing::info!(email = email, "signed up (auto-confirmed)");
                Ok(SignUpOutcome::Active(session))
            }
            SignUpResponse::Pending(user) => {
                tracing::info!(email = email, "signed up, confirmation email sent");
                Ok(SignUpOutcome::ConfirmationSent(user))
            }
        }
    }

    /// Ask the provider to email a password-reset link. The link returns the
    /// browser to `redirect_to`.
    pub async fn send_reset_email(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        let url = format!("{}/recover", self.auth_url);
        let response = self
            .http
            .post(&url)
            .query(&[("redirect_to", redirect_to)])
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        tracing::info!(email = email, "password reset email requested");
        Ok(())
    }

    /// Drop the local session and tell the provider, best effort. Always
    /// emits `SignedOut` when there was a session to drop.
    pub async fn sign_out(&self) {
        let previous = match self.session.lock() {
            Ok(mut slot) => slot.take(),
            Err(_) => None,
        };
        let Some(session) = previous else {
            return;
        };

        let url = format!("{}/logout", self.auth_url);
        let result = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&session.access_token)
            .send()
            .await;
        if let Err(error) = result {
            tracing::warn!(error = %error, "provider logout failed; local session dropped anyway");
        }

        self.listeners.emit(AuthChangeEvent::SignedOut, None);
    }

    /// Complete an auth redirect: parse the URL fragment the provider
    /// appended, adopt the session it carries, and notify subscribers.
    pub fn complete_callback(&self, fragment: &str) -> Result<Session, AuthError> {
        let payload = parse_fragment(fragment)?;
        let event = match payload.kind {
            CallbackKind::Recovery => AuthChangeEvent::PasswordRecovery,
            _ => AuthChangeEvent::SignedIn,
        };
        self.store_session(payload.session.clone(), event);
        Ok(payload.session)
    }

    fn store_session(&self, session: Session, event: AuthChangeEvent) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = Some(session.clone());
        }
        self.listeners.emit(event, Some(session));
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AuthError> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        response
            .json::<T>()
            .await
            .map_err(|error| AuthError::provider(format!("Unexpected provider response: {error}")))
    }

    /// Map a non-success provider response to an error carrying the
    /// provider's own message, whichever field it used for it.
    async fn error_from_response(response: reqwest::Response) -> AuthError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let parsed: ProviderErrorBody = serde_json::from_str(&body).unwrap_or_default();
        let message = parsed
            .msg
            .or(parsed.message)
            .or(parsed.error_description)
            .or(parsed.error)
            .unwrap_or_else(|| format!("Auth provider returned {status}"));
        tracing::warn!(status = %status, message = %message, "provider rejected request");
        AuthError::provider(message)
    }
}

/// `/signup` answers with a session when confirmation is off, or the bare
/// user record when a confirmation email went out.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Active(Session),
    Pending(AuthUser),
}

/// The provider's error bodies vary by endpoint; every known message field
/// is optional here and the first present one wins.
#[derive(Deserialize, Default)]
struct ProviderErrorBody {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

fn transport_error(error: reqwest::Error) -> AuthError {
    AuthError::network(error.to_string())
}
