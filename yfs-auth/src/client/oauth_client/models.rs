use serde::Deserialize;

/// Token endpoint response. Only `access_token` gates success; the refresh
/// token is carried along when present.
#[derive(Debug, Default, Deserialize)]
pub struct TokenGrant {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Debug)]
pub enum OAuthError {
    Http(reqwest::Error),
    InvalidUrl(url::ParseError),
    ExchangeFailed(String),
}

impl std::fmt::Display for OAuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {}", e),
            Self::InvalidUrl(e) => write!(f, "Invalid endpoint URL: {}", e),
            Self::ExchangeFailed(body) => {
                write!(f, "Token endpoint returned no usable access_token: {}", body)
            }
        }
    }
}

impl std::error::Error for OAuthError {}

impl From<reqwest::Error> for OAuthError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

impl From<url::ParseError> for OAuthError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err)
    }
}
