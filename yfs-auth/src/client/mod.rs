pub mod oauth_client;

mod code_input;
mod credential_store;
mod settings;

pub use code_input::{AuthCodeInput, StdinCode};
pub use credential_store::{CredentialFile, DEFAULT_CREDENTIAL_FILE};
pub use oauth_client::{Endpoints, OAuthError, YahooOAuth};
pub use settings::Settings;

use crate::common::CredentialRecord;
use crate::error::AuthError;

/// Run the full credential flow with the default wiring: `auth.json` in the
/// working directory, Yahoo's production endpoints, and an interactive stdin
/// prompt for the authorization code.
pub async fn authenticate(settings: &Settings) -> Result<CredentialRecord, AuthError> {
    let oauth = YahooOAuth::new(settings.client_id.clone(), settings.client_secret.clone());
    let store = CredentialFile::new(DEFAULT_CREDENTIAL_FILE);
    let mut input = StdinCode::new();

    ensure_valid_token(&oauth, &store, &mut input).await
}

/// Return a credential that currently works against the fantasy API.
///
/// Reuses the stored credential when the probe accepts it. Anything else
/// (no file, unusable file, rejected token) falls through to a fresh
/// interactive authorization, whose result overwrites the store.
pub async fn ensure_valid_token(
    oauth: &YahooOAuth,
    store: &CredentialFile,
    input: &mut dyn AuthCodeInput,
) -> Result<CredentialRecord, AuthError> {
    match store.load() {
        Ok(Some(record)) => {
            println!("Found existing authentication file");
            if oauth.probe(&record.access_token).await? {
                println!("Successfully connected with existing token");
                return Ok(record);
            }
            println!("Existing token rejected, need to re-authenticate...");
        }
        Ok(None) => {}
        Err(AuthError::InvalidCredential(reason)) => {
            tracing::warn!("ignoring stored credential: {}", reason);
        }
        Err(e) => return Err(e),
    }

    println!("\nStarting new authorization process...");
    let auth_url = oauth.authorization_url()?;
    let code = input.read_code(&auth_url)?;

    println!("Exchanging authorization code for tokens...");
    let record = oauth.exchange_code(&code).await?;

    store.save(&record)?;
    println!("Saved authentication tokens to {}", store.path().display());

    Ok(record)
}
