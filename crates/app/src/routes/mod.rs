pub mod callback;
pub mod levels;
pub mod login;
pub mod not_found;
pub mod reset_password;

use dioxus::prelude::*;

use crate::auth::use_auth;
use callback::AuthCallback;
use levels::Levels;
use login::Login;
use not_found::NotFound;
use reset_password::ResetPassword;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login?:message&:view")]
    Login {
        message: Option<String>,
        view: Option<String>,
    },
    #[route("/reset-password")]
    ResetPassword {},
    #[route("/auth/callback?:next#:fragment")]
    AuthCallback {
        next: Option<String>,
        fragment: String,
    },
    #[route("/levels")]
    Levels {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Root dispatch: straight into the game when a session is live, the login
/// page otherwise. The auth callback lands here via `next=/`.
#[component]
fn Home() -> Element {
    let auth = use_auth();

    if auth.is_signed_in() {
        navigator().replace(Route::Levels {});
    } else {
        navigator().replace(Route::Login {
            message: None,
            view: None,
        });
    }

    rsx! {
        div { class: "auth-loading",
            p { "Loading..." }
        }
    }
}
