use crate::common;
use auth_client::AuthClient;
use pretty_assertions::assert_eq;
use shared_types::AuthChangeEvent;

#[tokio::test]
async fn sign_out_drops_session_and_notifies() {
    let provider = common::spawn_provider().await;
    let client = AuthClient::new(&provider.settings());

    client
        .sign_in_with_password("player@example.com", "hunter2")
        .await
        .expect("sign in");

    // Subscribing with a live session queues an InitialSession change first.
    let mut sub = client.on_auth_state_change();
    let mut changes = sub.take_stream().expect("stream");
    let initial = changes.try_next().expect("queued").expect("open");
    assert_eq!(initial.event, AuthChangeEvent::InitialSession);

    client.sign_out().await;

    assert!(client.current_session().is_none());
    let change = changes.try_next().expect("queued").expect("open");
    assert_eq!(change.event, AuthChangeEvent::SignedOut);
    assert_eq!(change.session, None);

    let logout = provider.recorded_for("/logout");
    assert_eq!(logout.len(), 1);
    assert_eq!(
        logout[0].authorization.as_deref(),
        Some("Bearer stub-access-token")
    );
}

#[tokio::test]
async fn sign_out_without_session_does_nothing() {
    let provider = common::spawn_provider().await;
    let client = AuthClient::new(&provider.settings());

    let mut sub = client.on_auth_state_change();
    let mut changes = sub.take_stream().expect("stream");

    client.sign_out().await;

    assert!(provider.recorded_for("/logout").is_empty());
    assert!(changes.try_next().is_err(), "nothing to announce");
}
