use dioxus::prelude::*;
use shared_types::AuthSettings;
use shared_ui::{Alert, AlertDescription, AlertVariant, Card, CardContent, CardFooter};

use crate::auth::SessionWatcher;
use crate::components::{AuthForm, AuthHeader, AuthView};
use crate::routes::Route;

/// Login page.
///
/// `view=sign_up` switches the form to registration; `message` carries an
/// error handed back through the URL (e.g. from a failed auth callback) and
/// renders as a banner. A detected session redirects to the level select
/// via the mounted watcher.
#[component]
pub fn Login(message: Option<String>, view: Option<String>) -> Element {
    let settings = use_context::<AuthSettings>();
    let current_view = AuthView::from_query(view.as_deref());

    // Recomputed per render; where the confirmation email lands the browser.
    let redirect_url = auth_client::callback_url(&settings);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        SessionWatcher {}

        div { class: "auth-page",
            AuthHeader {}
            div { class: "auth-panel",
                div { class: "auth-heading",
                    h1 { "Welcome to Web Golf" }
                    p { class: "auth-subtitle",
                        if current_view == AuthView::SignIn {
                            "Sign in to continue"
                        } else {
                            "Create an account to start playing"
                        }
                    }
                }

                if let Some(msg) = message.as_ref() {
                    Alert { variant: AlertVariant::Destructive, class: "auth-banner",
                        AlertDescription { "{msg}" }
                    }
                }

                Card { class: "auth-card",
                    CardContent {
                        AuthForm { view: current_view, redirect_to: redirect_url }
                    }
                    CardFooter { class: "auth-card-footer",
                        if current_view == AuthView::SignIn {
                            p { class: "auth-link",
                                "New to the game? "
                                Link {
                                    to: Route::Login { message: None, view: Some("sign_up".to_string()) },
                                    "Sign Up"
                                }
                            }
                        } else {
                            p { class: "auth-link",
                                "Already a player? "
                                Link {
                                    to: Route::Login { message: None, view: None },
                                    "Log In"
                                }
                            }
                        }
                    }
                }

                p { class: "auth-link auth-reset-hint",
                    Link { to: Route::ResetPassword {}, "Forgot your password?" }
                }
            }
        }
    }
}
