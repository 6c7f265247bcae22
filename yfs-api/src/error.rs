use serde::{Deserialize, Serialize};
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum FantasyApiError {
    Yahoo(StatusCode, ErrorDetail),
    Internal(ApiError),
}

impl From<ApiError> for FantasyApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                match serde_json::from_str::<ErrorResponse>(&detail) {
                    Ok(response) => FantasyApiError::Yahoo(status, response.error),
                    // Not every failure carries the JSON error envelope
                    Err(_) => FantasyApiError::Yahoo(
                        status,
                        ErrorDetail {
                            lang: None,
                            description: detail,
                        },
                    ),
                }
            }
            e => FantasyApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for FantasyApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FantasyApiError::Internal(e) => write!(f, "Internal error: {}", e),
            FantasyApiError::Yahoo(status, detail) => {
                write!(f, "({}) {}", status, detail.description)
            }
        }
    }
}

impl std::error::Error for FantasyApiError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub lang: Option<String>,
    pub description: String,
}
