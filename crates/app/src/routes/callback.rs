use auth_client::AuthClient;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Landing route for the provider's redirect. The tokens arrive in the URL
/// fragment; adopt them and continue to `next` (default: the root, which
/// dispatches on the now-present session). Failures bounce back to the
/// login page with the provider's message in the banner.
#[component]
pub fn AuthCallback(next: Option<String>, fragment: String) -> Element {
    let client = use_context::<AuthClient>();
    let mut auth = use_auth();

    use_hook(move || match client.complete_callback(&fragment) {
        Ok(session) => {
            tracing::info!("auth callback completed");
            auth.set_session(session);
            match next.filter(|path| !path.is_empty()) {
                Some(path) => {
                    navigator().replace(NavigationTarget::<Route>::External(path));
                }
                None => {
                    navigator().replace(Route::Home {});
                }
            }
        }
        Err(error) => {
            tracing::warn!(error = %error, "auth callback failed");
            navigator().replace(Route::Login {
                message: Some(error.message),
                view: None,
            });
        }
    });

    rsx! {
        div { class: "auth-loading",
            p { "Completing sign-in..." }
        }
    }
}
