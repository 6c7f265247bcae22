use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Flat credential record persisted between runs.
///
/// `refresh_token` is carried along for completeness but never exercised: a
/// token the API stops accepting sends the operator back through the
/// interactive authorization flow rather than a refresh grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub created_at: DateTime<Utc>,
}
