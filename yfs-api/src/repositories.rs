use crate::endpoints::{
    LeagueKey,
    games::GetGame,
    leagues::{GetLeague, GetLeagueScoreboard, GetLeagueStandings},
    users::GetLoggedInUser,
};

pub struct GameRepository;

impl GameRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn get(&self, game_code: impl Into<String>) -> GetGame {
        GetGame::new(game_code)
    }
}

pub struct LeagueRepository;

impl LeagueRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn get(&self, league_key: impl Into<LeagueKey>) -> GetLeague {
        GetLeague::new(league_key)
    }

    pub fn standings(&self, league_key: impl Into<LeagueKey>) -> GetLeagueStandings {
        GetLeagueStandings::new(league_key)
    }

    pub fn scoreboard(&self, league_key: impl Into<LeagueKey>) -> GetLeagueScoreboard {
        GetLeagueScoreboard::new(league_key)
    }
}

pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn me(&self) -> GetLoggedInUser {
        GetLoggedInUser::new()
    }
}
