use crate::common;
use auth_client::AuthClient;
use pretty_assertions::assert_eq;
use shared_types::{AuthChangeEvent, AuthErrorKind};

#[tokio::test]
async fn sign_in_yields_session_and_one_change() {
    let provider = common::spawn_provider().await;
    let client = AuthClient::new(&provider.settings());

    let mut sub = client.on_auth_state_change();
    let mut changes = sub.take_stream().expect("stream");

    let session = client
        .sign_in_with_password("player@example.com", "hunter2")
        .await
        .expect("sign in");
    assert_eq!(session.access_token, "stub-access-token");
    assert_eq!(session.user_email(), Some("player@example.com"));
    assert_eq!(
        client.current_session().map(|s| s.access_token),
        Some("stub-access-token".to_string())
    );

    let change = changes
        .try_next()
        .expect("a change should be queued")
        .expect("stream should stay open");
    assert_eq!(change.event, AuthChangeEvent::SignedIn);
    assert_eq!(
        change.session.and_then(|s| s.user_email().map(String::from)),
        Some("player@example.com".to_string())
    );
    assert!(changes.try_next().is_err(), "exactly one change per sign-in");
}

#[tokio::test]
async fn token_request_carries_grant_type_and_apikey() {
    let provider = common::spawn_provider().await;
    let client = AuthClient::new(&provider.settings());

    client
        .sign_in_with_password("player@example.com", "hunter2")
        .await
        .expect("sign in");

    let token = provider.recorded_for("/token");
    assert_eq!(token.len(), 1);
    assert_eq!(token[0].query["grant_type"], "password");
    assert_eq!(token[0].apikey.as_deref(), Some("test-anon-key"));
    assert_eq!(token[0].body["email"], "player@example.com");
    assert_eq!(token[0].body["password"], "hunter2");
}

#[tokio::test]
async fn rejected_credentials_surface_provider_message() {
    let provider = common::spawn_provider().await;
    let client = AuthClient::new(&provider.settings());

    provider.fail_next_with(400, "Invalid login credentials");

    let mut sub = client.on_auth_state_change();
    let mut changes = sub.take_stream().expect("stream");

    let err = client
        .sign_in_with_password("player@example.com", "wrong")
        .await
        .expect_err("sign in should fail");
    assert_eq!(err.kind, AuthErrorKind::Provider);
    assert_eq!(err.message, "Invalid login credentials");

    assert!(client.current_session().is_none());
    assert!(changes.try_next().is_err(), "no change without a session");
}

#[tokio::test]
async fn unsubscribed_listener_misses_later_sign_ins() {
    let provider = common::spawn_provider().await;
    let client = AuthClient::new(&provider.settings());

    let mut sub = client.on_auth_state_change();
    let mut changes = sub.take_stream().expect("stream");
    sub.unsubscribe();

    client
        .sign_in_with_password("player@example.com", "hunter2")
        .await
        .expect("sign in");

    // The sender side is gone; the stream just terminates.
    assert_eq!(changes.try_next().expect("terminated stream"), None);
}
