use auth_client::AuthClient;
use dioxus::prelude::*;
use futures_util::StreamExt;
use shared_types::{AuthStateChange, Session};
use std::cell::RefCell;
use std::rc::Rc;

use crate::routes::Route;

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<Session>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn set_session(&mut self, session: Session) {
        self.session.set(Some(session));
    }

    pub fn clear(&mut self) {
        self.session.set(None);
    }

    /// Email of the signed-in player, when the provider included one.
    pub fn player_email(&self) -> Option<String> {
        self.session
            .read()
            .as_ref()
            .and_then(|s| s.user_email().map(String::from))
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Whether an auth-state change should send the user into the game.
fn enters_game(change: &AuthStateChange) -> bool {
    change.session.is_some()
}

/// Headless component that watches the provider's auth-state stream and
/// redirects to the level select when a session shows up.
///
/// Mount on pages a signed-in user should leave (login). The subscription
/// is released when the page unmounts, so remounting never stacks
/// listeners, and the redirect fires at most once per mount.
#[component]
pub fn SessionWatcher() -> Element {
    let client = use_context::<AuthClient>();
    let mut auth = use_auth();

    let subscription = use_hook(|| Rc::new(RefCell::new(client.on_auth_state_change())));

    use_coroutine({
        let subscription = subscription.clone();
        move |_: UnboundedReceiver<()>| {
            let subscription = subscription.clone();
            async move {
                let stream = subscription.borrow_mut().take_stream();
                let Some(mut stream) = stream else {
                    return;
                };
                let mut redirected = false;
                while let Some(change) = stream.next().await {
                    if enters_game(&change) {
                        auth.session.set(change.session.clone());
                        if !redirected {
                            redirected = true;
                            tracing::debug!(event = ?change.event, "session detected, entering game");
                            navigator().replace(Route::Levels {});
                        }
                    } else {
                        auth.clear();
                    }
                }
            }
        }
    });

    use_drop(move || subscription.borrow().unsubscribe());

    // Headless — renders nothing
    rsx! {}
}
