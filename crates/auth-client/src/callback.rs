use shared_types::{AuthError, Session};

/// Which auth action produced the callback redirect, per the provider's
/// `type` fragment parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackKind {
    SignUp,
    Recovery,
    MagicLink,
    Other,
}

impl CallbackKind {
    fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("signup") => CallbackKind::SignUp,
            Some("recovery") => CallbackKind::Recovery,
            Some("magiclink") => CallbackKind::MagicLink,
            _ => CallbackKind::Other,
        }
    }
}

/// Tokens carried in the callback fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackPayload {
    pub session: Session,
    pub kind: CallbackKind,
}

/// Parse the URL fragment the provider appends when redirecting back, e.g.
/// `access_token=..&expires_in=3600&refresh_token=..&token_type=bearer&type=signup`.
///
/// Provider-reported failures arrive the same way
/// (`error=..&error_description=..`) and are surfaced with the decoded
/// description.
pub(crate) fn parse_fragment(fragment: &str) -> Result<CallbackPayload, AuthError> {
    let fragment = fragment.trim_start_matches('#');

    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;
    let mut token_type = None;
    let mut kind_param = None;
    let mut error = None;
    let mut error_description = None;

    for pair in fragment.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        let value = decode_component(value);
        match key {
            "access_token" => access_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "expires_in" => expires_in = value.parse::<u64>().ok(),
            "token_type" => token_type = Some(value),
            "type" => kind_param = Some(value),
            "error" => error = Some(value),
            "error_description" => error_description = Some(value),
            _ => {}
        }
    }

    if let Some(description) = error_description {
        return Err(AuthError::invalid_callback(description));
    }
    if let Some(code) = error {
        return Err(AuthError::invalid_callback(code));
    }

    let access_token = match access_token {
        Some(token) if !token.is_empty() => token,
        _ => {
            return Err(AuthError::invalid_callback(
                "Callback did not include an access token",
            ))
        }
    };

    Ok(CallbackPayload {
        session: Session {
            access_token,
            refresh_token: refresh_token.filter(|t| !t.is_empty()),
            token_type: token_type.unwrap_or_else(|| "bearer".to_string()),
            expires_in,
            user: None,
        },
        kind: CallbackKind::from_param(kind_param.as_deref()),
    })
}

/// Percent-decode a fragment value, treating `+` as a space the way the
/// provider encodes its error descriptions.
fn decode_component(value: &str) -> String {
    let spaced = value.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}
