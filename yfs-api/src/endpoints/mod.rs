pub mod games;
pub mod leagues;
pub mod users;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// League identifier of the form `{game_key}.l.{league_id}`,
/// e.g. `nfl.l.686965`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueKey(String);

impl Display for LeagueKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LeagueKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LeagueKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl LeagueKey {
    /// Game portion of the key (`nfl` in `nfl.l.686965`).
    pub fn game_code(&self) -> Option<&str> {
        self.0.split('.').next().filter(|c| !c.is_empty())
    }
}

/// Forces the JSON rendering; the API returns XML otherwise.
#[derive(Default, Debug, Clone, Copy, Serialize)]
pub enum ResponseFormat {
    #[default]
    #[serde(rename = "json")]
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_key_exposes_its_game_code() {
        let key = LeagueKey::from("nfl.l.686965");
        assert_eq!(key.game_code(), Some("nfl"));
        assert_eq!(key.to_string(), "nfl.l.686965");
    }
}
