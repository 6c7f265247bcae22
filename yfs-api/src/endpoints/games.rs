use super::ResponseFormat;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct GetGame {
    #[serde(skip)]
    game_code: String,
    format: ResponseFormat,
}

impl GetGame {
    pub fn new(game_code: impl Into<String>) -> Self {
        Self {
            game_code: game_code.into(),
            format: ResponseFormat::default(),
        }
    }
}

impl Request for GetGame {
    type Data = Self;
    type Response = GameResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/game/{}", self.game_code).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResponse {
    pub fantasy_content: GameContent,
}

impl GameResponse {
    pub fn game(&self) -> &Game {
        &self.fantasy_content.game.0
    }
}

/// The envelope wraps the single game in a one-element array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameContent {
    pub game: (Game,),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub game_key: String,
    pub game_id: String,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub game_type: Option<String>,
    pub url: Option<String>,
    pub season: String,
    pub is_game_over: Option<u8>,
    pub is_offseason: Option<u8>,
}
