use config::{Config, File};
use serde::Deserialize;

use crate::error::AuthError;

/// Raw deserialization target. Yahoo's developer console hands out the same
/// pair under two naming schemes, so both are accepted.
#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    consumer_key: Option<String>,
    #[serde(default)]
    consumer_secret: Option<String>,
    #[serde(default)]
    league_key: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub client_id: String,
    pub client_secret: String,
    /// Optional league to exercise beyond the game-metadata smoke call.
    pub league_key: Option<String>,
}

impl Settings {
    /// Load from an optional `config.toml` plus `YAHOO_*` environment
    /// variables; the environment wins.
    pub fn new() -> Result<Self, AuthError> {
        let mut builder = Config::builder();

        if std::path::Path::new("config.toml").exists() {
            builder = builder.add_source(File::with_name("config"));
        }

        builder = builder.add_source(config::Environment::with_prefix("YAHOO"));

        let raw: RawSettings = builder.build()?.try_deserialize()?;

        let settings = Self {
            client_id: raw.client_id.or(raw.consumer_key).unwrap_or_default(),
            client_secret: raw.client_secret.or(raw.consumer_secret).unwrap_or_default(),
            league_key: raw.league_key.filter(|k| !k.is_empty()),
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), AuthError> {
        if self.client_id.is_empty() || self.client_secret.is_empty() {
            return Err(AuthError::Configuration(
                "Missing Yahoo API credentials: set YAHOO_CLIENT_ID/YAHOO_CLIENT_SECRET \
                 or YAHOO_CONSUMER_KEY/YAHOO_CONSUMER_SECRET"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "YAHOO_CLIENT_ID",
            "YAHOO_CLIENT_SECRET",
            "YAHOO_CONSUMER_KEY",
            "YAHOO_CONSUMER_SECRET",
            "YAHOO_LEAGUE_KEY",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn missing_credentials_fail() {
        clear_env();

        assert!(matches!(Settings::new(), Err(AuthError::Configuration(_))));
    }

    #[test]
    #[serial]
    fn client_id_pair_is_accepted() {
        clear_env();
        std::env::set_var("YAHOO_CLIENT_ID", "id");
        std::env::set_var("YAHOO_CLIENT_SECRET", "secret");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.client_id, "id");
        assert_eq!(settings.client_secret, "secret");
        assert!(settings.league_key.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn consumer_key_pair_is_accepted() {
        clear_env();
        std::env::set_var("YAHOO_CONSUMER_KEY", "key");
        std::env::set_var("YAHOO_CONSUMER_SECRET", "secret");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.client_id, "key");
        assert_eq!(settings.client_secret, "secret");

        clear_env();
    }

    #[test]
    #[serial]
    fn league_key_is_optional() {
        clear_env();
        std::env::set_var("YAHOO_CLIENT_ID", "id");
        std::env::set_var("YAHOO_CLIENT_SECRET", "secret");
        std::env::set_var("YAHOO_LEAGUE_KEY", "nfl.l.686965");

        let settings = Settings::new().unwrap();
        assert_eq!(settings.league_key.as_deref(), Some("nfl.l.686965"));

        clear_env();
    }
}
