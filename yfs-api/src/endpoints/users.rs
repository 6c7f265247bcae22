use super::ResponseFormat;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

/// Metadata for the logged-in user (`use_login=1`).
#[derive(Default, Debug, Clone, Serialize)]
pub struct GetLoggedInUser {
    format: ResponseFormat,
}

impl GetLoggedInUser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Request for GetLoggedInUser {
    type Data = Self;
    type Response = LoggedInUserResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/users;use_login=1".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedInUserResponse {
    pub fantasy_content: UsersContent,
}

impl LoggedInUserResponse {
    /// Guid of the logged-in user, when the envelope has the expected shape.
    pub fn guid(&self) -> Option<&str> {
        self.fantasy_content.users["0"]["user"][0]["guid"].as_str()
    }
}

/// Users come back keyed by index ("0", "1", ...) plus a count; not worth
/// typing for a single-user lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsersContent {
    pub users: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_api_client::Request as _;

    #[test]
    fn endpoint_requests_the_logged_in_user() {
        assert_eq!(GetLoggedInUser::new().endpoint(), "/users;use_login=1");
    }

    #[test]
    fn guid_traverses_the_index_keyed_envelope() {
        let body = r#"{
            "fantasy_content": {
                "users": {
                    "0": {"user": [{"guid": "ABCDEF1234"}]},
                    "count": 1
                }
            }
        }"#;

        let response: LoggedInUserResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.guid(), Some("ABCDEF1234"));
    }

    #[test]
    fn guid_is_none_for_unexpected_shapes() {
        let body = r#"{"fantasy_content": {"users": {"count": 0}}}"#;

        let response: LoggedInUserResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.guid(), None);
    }
}
