use dioxus::prelude::*;

use crate::routes::Route;

/// Floating brand header shown on the auth pages.
#[component]
pub fn AuthHeader() -> Element {
    rsx! {
        header { class: "auth-header",
            Link { to: Route::Home {}, class: "auth-header-brand", "Web Golf" }
        }
    }
}
