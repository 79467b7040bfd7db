use auth_client::AuthClient;
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant};

use crate::auth::use_auth;
use crate::routes::Route;

/// Level select — the destination after a successful sign-in. Signed-out
/// visitors are sent back to the login page.
#[component]
pub fn Levels() -> Element {
    let client = use_context::<AuthClient>();
    let mut auth = use_auth();

    if !auth.is_signed_in() {
        navigator().replace(Route::Login {
            message: None,
            view: None,
        });
        return rsx! {
            div { class: "auth-loading",
                p { "Redirecting to login..." }
            }
        };
    }

    let player = auth.player_email().unwrap_or_else(|| "player".to_string());
    let holes: Vec<(u32, u32)> = (1..=9).map(|n| (n, 2 + n % 3)).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./levels.css") }

        div { class: "levels-page",
            header { class: "levels-header",
                h1 { "Level Select" }
                div { class: "levels-player",
                    span { class: "levels-player-email", "{player}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            let client = client.clone();
                            spawn(async move {
                                client.sign_out().await;
                            });
                            auth.clear();
                            navigator().replace(Route::Login { message: None, view: None });
                        },
                        "Sign Out"
                    }
                }
            }
            main { class: "levels-grid",
                for (hole, par) in holes {
                    div { class: "levels-tile", key: "{hole}",
                        span { class: "levels-tile-number", "Hole {hole}" }
                        span { class: "levels-tile-par", "Par {par}" }
                    }
                }
            }
        }
    }
}
