use shared_types::AuthSettings;

/// Where the provider sends the browser when no site or deployment URL is
/// configured (local development).
pub const LOCAL_DEV_URL: &str = "http://localhost:9002/";

/// Path the provider redirects back to after completing an auth action.
pub const CALLBACK_PATH: &str = "auth/callback";

/// Absolute URL of the auth callback, derived from the configured base URLs.
pub fn callback_url(settings: &AuthSettings) -> String {
    format!("{}{}", base_url(settings), CALLBACK_PATH)
}

/// Like [`callback_url`], with a `next` query value naming the in-app path
/// the callback should continue to.
pub fn callback_url_with_next(settings: &AuthSettings, next: &str) -> String {
    format!("{}{}?next={}", base_url(settings), CALLBACK_PATH, next)
}

/// First non-empty of {site URL, deployment URL, local fallback}, normalized
/// to carry a scheme and exactly one trailing slash.
///
/// The scheme check is a substring match, not a parse: any value containing
/// "http" is taken to already have one. Kept as-is from the flow this
/// replaces; a bare hostname with "http" in it would slip through.
fn base_url(settings: &AuthSettings) -> String {
    let mut url = [settings.site_url.as_deref(), settings.deploy_url.as_deref()]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(LOCAL_DEV_URL)
        .to_string();

    if !url.contains("http") {
        url = format!("https://{url}");
    }
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
