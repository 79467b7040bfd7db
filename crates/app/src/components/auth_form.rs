use auth_client::{AuthClient, SignUpOutcome};
use dioxus::prelude::*;
use shared_ui::{Input, Label};

/// Which face of the auth form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    SignIn,
    SignUp,
}

impl AuthView {
    /// Resolve the `view` query value; anything but `sign_up` means sign-in.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("sign_up") => AuthView::SignUp,
            _ => AuthView::SignIn,
        }
    }
}

/// Email/password form delegating to the hosted provider.
///
/// Successful sign-in is not handled here: the provider emits an auth-state
/// change and the session watcher performs the navigation. `redirect_to` is
/// where the provider's confirmation email should land the browser.
#[component]
pub fn AuthForm(view: AuthView, redirect_to: String) -> Element {
    let client = use_context::<AuthClient>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Signal so the submit closure can read it without taking ownership
    let redirect_target = use_signal(move || redirect_to);

    let handle_submit = move |evt: FormEvent| {
        let client = client.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);
            notice.set(None);

            let result = match view {
                AuthView::SignIn => client
                    .sign_in_with_password(&email(), &password())
                    .await
                    .map(|_| None),
                AuthView::SignUp => client
                    .sign_up(&email(), &password(), Some(&redirect_target()))
                    .await
                    .map(|outcome| match outcome {
                        SignUpOutcome::Active(_) => None,
                        SignUpOutcome::ConfirmationSent(_) => Some(
                            "Check your email for a confirmation link before signing in."
                                .to_string(),
                        ),
                    }),
            };

            match result {
                Ok(pending) => notice.set(pending),
                Err(error) => error_msg.set(Some(error.message)),
            }
            loading.set(false);
        }
    };

    let (submit_label, busy_label) = match view {
        AuthView::SignIn => ("Sign In", "Signing in..."),
        AuthView::SignUp => ("Sign Up", "Creating account..."),
    };

    rsx! {
        if let Some(err) = error_msg() {
            div { class: "auth-error", "{err}" }
        }
        if let Some(msg) = notice() {
            div { class: "auth-success", "{msg}" }
        }

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
            div { class: "auth-field",
                Label { html_for: "password", "Password" }
                Input {
                    input_type: "password",
                    id: "password",
                    placeholder: "Your password",
                    required: true,
                    value: password(),
                    on_input: move |e: FormEvent| password.set(e.value()),
                }
            }
            button {
                r#type: "submit",
                class: "auth-submit button",
                disabled: loading(),
                if loading() { "{busy_label}" } else { "{submit_label}" }
            }
        }
    }
}
