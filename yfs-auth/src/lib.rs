// Credential record shared between the flow and its storage
pub mod common;

mod client;
mod error;

pub use client::{
    authenticate, ensure_valid_token, AuthCodeInput, CredentialFile, Endpoints, OAuthError,
    Settings, StdinCode, YahooOAuth, DEFAULT_CREDENTIAL_FILE,
};
pub use common::CredentialRecord;
pub use error::AuthError;
