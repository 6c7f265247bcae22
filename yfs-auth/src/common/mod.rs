mod models;

pub use models::CredentialRecord;
