pub mod endpoints;
mod error;
mod macros;
pub mod repositories;

pub use crate::error::FantasyApiError;
use repositories::*;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

const BASE_URL: &str = "https://fantasysports.yahooapis.com/fantasy/v2";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(access_token: &str) -> Self {
        Self {
            inner: ApiClient::new(BASE_URL).bearer_auth(access_token),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, FantasyApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

/// Request builders, `Fantasy::games().get("nfl")` style.
pub struct Fantasy;

impl Fantasy {
    pub fn games() -> GameRepository {
        GameRepository::new()
    }

    pub fn leagues() -> LeagueRepository {
        LeagueRepository::new()
    }

    pub fn users() -> UserRepository {
        UserRepository::new()
    }
}
