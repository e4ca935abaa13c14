use reqwest::StatusCode;

pub const API_KEY_ENV: &str = "FOURSQUARE_API_KEY";

/// Response bodies are cut to this many characters before they land in an error message.
pub const MAX_ERROR_BODY_CHARS: usize = 500;

/// Every way a call against the places API can fail.
///
/// `InvalidArgument` and `AuthenticationMissing` are raised locally before anything is
/// sent; the remaining variants describe what came back (or didn't) from the network.
#[derive(Debug, thiserror::Error)]
pub enum PlacesError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("missing API key, set env var FOURSQUARE_API_KEY before calling the API")]
    AuthenticationMissing,

    #[error("auth error ({status}): {body}")]
    Authentication { status: StatusCode, body: String },

    #[error("{reason} ({status}): {body}")]
    Request {
        status: StatusCode,
        reason: String,
        body: String,
    },

    #[error("network error calling Foursquare: {0}")]
    Transport(#[from] reqwest::Error),
}

impl PlacesError {
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            PlacesError::AuthenticationMissing | PlacesError::Authentication { .. }
        )
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PlacesError::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PlacesError>;

pub(crate) fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
