//! Client for the hosted auth provider's GoTrue-style REST API.
//!
//! The game delegates all authentication to the provider: this crate covers
//! the four calls the app makes (sign-in, sign-up, reset email, sign-out),
//! completion of the browser callback redirect, and an auth-state-change
//! stream with explicit subscription handles. It compiles for both wasm
//! (the app) and native (the integration tests).

pub mod callback;
pub mod client;
pub mod events;
pub mod redirect;

pub use callback::CallbackKind;
pub use client::{AuthClient, SignUpOutcome};
pub use events::AuthSubscription;
pub use redirect::{callback_url, callback_url_with_next};
