use serde::{Deserialize, Serialize};

/// Auth provider endpoint used when nothing is configured (a GoTrue
/// instance on its default port).
pub const DEFAULT_AUTH_URL: &str = "http://localhost:9999";

/// Settings for the hosted auth provider and redirect construction.
///
/// Built once at process start and handed to whoever needs it — nothing
/// else in the codebase reads the environment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthSettings {
    /// Base URL of the provider's auth API, without a trailing slash.
    pub auth_url: String,
    /// Publishable API key sent with every provider request.
    pub anon_key: String,
    /// Production site URL, when deployed.
    pub site_url: Option<String>,
    /// Platform-assigned deployment URL (preview deploys).
    pub deploy_url: Option<String>,
}

impl AuthSettings {
    /// Read settings from compile-time environment variables, the web-client
    /// analog of server-side env config. Empty values count as unset.
    ///
    ///   - `WEBGOLF_AUTH_URL` / `WEBGOLF_AUTH_ANON_KEY` — the provider
    ///   - `WEBGOLF_SITE_URL` — production site URL
    ///   - `WEBGOLF_DEPLOY_URL` — per-deployment URL
    pub fn from_build_env() -> Self {
        Self {
            auth_url: non_empty(option_env!("WEBGOLF_AUTH_URL"))
                .unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            anon_key: non_empty(option_env!("WEBGOLF_AUTH_ANON_KEY")).unwrap_or_default(),
            site_url: non_empty(option_env!("WEBGOLF_SITE_URL")),
            deploy_url: non_empty(option_env!("WEBGOLF_DEPLOY_URL")),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            auth_url: DEFAULT_AUTH_URL.to_string(),
            anon_key: String::new(),
            site_url: None,
            deploy_url: None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
