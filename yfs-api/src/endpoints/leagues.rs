use super::{LeagueKey, ResponseFormat};
use crate::macros::setter;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Common

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub league_key: LeagueKey,
    pub league_id: String,
    pub name: String,
    pub url: Option<String>,
    pub num_teams: Option<u32>,
    pub scoring_type: Option<String>,
    pub season: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub current_week: Option<u32>,
}

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct GetLeague {
    #[serde(skip)]
    league_key: LeagueKey,
    format: ResponseFormat,
}

impl GetLeague {
    pub fn new(league_key: impl Into<LeagueKey>) -> Self {
        Self {
            league_key: league_key.into(),
            format: ResponseFormat::default(),
        }
    }
}

impl Request for GetLeague {
    type Data = Self;
    type Response = LeagueResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/league/{}", self.league_key).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetLeagueStandings {
    #[serde(skip)]
    league_key: LeagueKey,
    format: ResponseFormat,
}

impl GetLeagueStandings {
    pub fn new(league_key: impl Into<LeagueKey>) -> Self {
        Self {
            league_key: league_key.into(),
            format: ResponseFormat::default(),
        }
    }
}

impl Request for GetLeagueStandings {
    type Data = Self;
    type Response = StandingsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/league/{}/standings", self.league_key).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetLeagueScoreboard {
    #[serde(skip)]
    league_key: LeagueKey,
    #[serde(skip)]
    week: Option<u32>,
    format: ResponseFormat,
}

impl GetLeagueScoreboard {
    pub fn new(league_key: impl Into<LeagueKey>) -> Self {
        Self {
            league_key: league_key.into(),
            week: None,
            format: ResponseFormat::default(),
        }
    }

    setter!(opt week: u32);
}

impl Request for GetLeagueScoreboard {
    type Data = Self;
    type Response = ScoreboardResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        // week rides as a matrix parameter, not a query parameter
        match self.week {
            Some(week) => format!("/league/{}/scoreboard;week={}", self.league_key, week).into(),
            None => format!("/league/{}/scoreboard", self.league_key).into(),
        }
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueResponse {
    pub fantasy_content: LeagueContent,
}

impl LeagueResponse {
    pub fn league(&self) -> &League {
        &self.fantasy_content.league.0
    }
}

/// The envelope wraps the single league in a one-element array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueContent {
    pub league: (League,),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsResponse {
    pub fantasy_content: StandingsContent,
}

impl StandingsResponse {
    pub fn league(&self) -> &League {
        &self.fantasy_content.league.0
    }

    pub fn standings(&self) -> &serde_json::Value {
        &self.fantasy_content.league.1.standings
    }
}

/// Standings responses put the league metadata and the standings payload in
/// one two-element array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsContent {
    pub league: (League, StandingsEntry),
}

/// Team entries mix objects and index-keyed maps; kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub standings: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardResponse {
    pub fantasy_content: ScoreboardContent,
}

impl ScoreboardResponse {
    pub fn league(&self) -> &League {
        &self.fantasy_content.league.0
    }

    pub fn scoreboard(&self) -> &serde_json::Value {
        &self.fantasy_content.league.1.scoreboard
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardContent {
    pub league: (League, ScoreboardEntry),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreboardEntry {
    pub scoreboard: serde_json::Value,
}
