use auth_client::AuthClient;
use dioxus::prelude::*;
use shared_types::AuthSettings;

mod auth;
mod components;
mod routes;

use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Configuration is resolved once here and injected; nothing deeper in
    // the tree reads the environment.
    let settings = use_context_provider(AuthSettings::from_build_env);
    use_context_provider(|| AuthClient::new(&settings));
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
