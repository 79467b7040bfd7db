use auth_client::AuthClient;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdMail;
use dioxus_free_icons::Icon;
use shared_types::AuthSettings;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label};

use crate::components::AuthHeader;
use crate::routes::Route;

/// Password-reset request page: the user enters their email, the provider
/// sends the reset link, and the page flips to a confirmation view.
///
/// A provider error leaves the form in place with the message inline, so
/// the user can simply submit again.
#[component]
pub fn ResetPassword() -> Element {
    let settings = use_context::<AuthSettings>();
    let client = use_context::<AuthClient>();
    let mut email = use_signal(String::new);
    let mut submitted = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        let client = client.clone();
        // The reset link returns through the callback, which continues to
        // the root; the root then dispatches on the restored session.
        let redirect_to = auth_client::callback_url_with_next(&settings, "/");
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match client.send_reset_email(&email(), &redirect_to).await {
                Ok(()) => submitted.set(true),
                Err(error) => error_msg.set(Some(error.message)),
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            AuthHeader {}
            div { class: "auth-panel",
                if submitted() {
                    Card { class: "auth-card auth-card-centered",
                        CardHeader {
                            div { class: "auth-mail-badge",
                                Icon::<LdMail> { icon: LdMail, width: 24, height: 24 }
                            }
                            CardTitle { "Check your email" }
                            CardDescription {
                                "We've sent a password reset link to "
                                strong { "{email}" }
                                ". Please check your inbox and follow the instructions."
                            }
                        }
                        CardContent {
                            Link {
                                to: Route::Login { message: None, view: None },
                                class: "auth-back-link",
                                "Back to Login"
                            }
                        }
                    }
                } else {
                    Card { class: "auth-card",
                        CardHeader {
                            CardTitle { "Reset Password" }
                            CardDescription {
                                "Enter your email address and we'll send you a link to reset your password."
                            }
                        }
                        CardContent {
                            form { onsubmit: handle_submit,
                                div { class: "auth-field",
                                    Label { html_for: "email", "Email" }
                                    Input {
                                        input_type: "email",
                                        id: "email",
                                        placeholder: "m@example.com",
                                        required: true,
                                        value: email(),
                                        on_input: move |e: FormEvent| email.set(e.value()),
                                    }
                                }
                                button {
                                    r#type: "submit",
                                    class: "auth-submit button",
                                    disabled: loading(),
                                    if loading() { "Sending..." } else { "Send Reset Link" }
                                }
                                if let Some(err) = error_msg() {
                                    p { class: "auth-error", "{err}" }
                                }
                            }
                        }
                        CardFooter { class: "auth-card-footer",
                            p { class: "auth-link",
                                "Remember your password? "
                                Link { to: Route::Login { message: None, view: None }, "Login" }
                            }
                        }
                    }
                }
            }
        }
    }
}
