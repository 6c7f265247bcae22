use std::fs;
use std::path::{Path, PathBuf};

use crate::common::CredentialRecord;
use crate::error::AuthError;

/// Default storage location, relative to the working directory.
pub const DEFAULT_CREDENTIAL_FILE: &str = "auth.json";

/// Single-file credential storage.
///
/// The file is the sole source of truth: every save overwrites it wholesale,
/// and it is never partially updated or deleted automatically.
pub struct CredentialFile {
    path: PathBuf,
}

impl CredentialFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored credential, if any.
    ///
    /// Returns `None` when the file does not exist. A file that exists but
    /// cannot be parsed, or whose `access_token` is missing or empty, yields
    /// [`AuthError::InvalidCredential`] so callers can fall back to a fresh
    /// authorization instead of failing hard.
    pub fn load(&self) -> Result<Option<CredentialRecord>, AuthError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).map_err(|e| {
            AuthError::CredentialStorage(format!("Failed to read credential: {}", e))
        })?;

        let record: CredentialRecord =
            serde_json::from_str(&json).map_err(|e| AuthError::InvalidCredential(e.to_string()))?;

        if record.access_token.is_empty() {
            return Err(AuthError::InvalidCredential(
                "access_token is missing or empty".to_string(),
            ));
        }

        Ok(Some(record))
    }

    /// Serialize the record and overwrite the file entirely.
    pub fn save(&self, record: &CredentialRecord) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(record).map_err(|e| {
            AuthError::CredentialStorage(format!("Failed to serialize credential: {}", e))
        })?;

        fs::write(&self.path, json)
            .map_err(|e| AuthError::CredentialStorage(format!("Failed to save credential: {}", e)))?;

        // Set permissions to 0600 (read/write for owner only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.path)
                .map_err(|e| {
                    AuthError::CredentialStorage(format!("Failed to get file permissions: {}", e))
                })?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(|e| {
                AuthError::CredentialStorage(format!("Failed to set file permissions: {}", e))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(token: &str) -> CredentialRecord {
        CredentialRecord {
            access_token: token.to_string(),
            refresh_token: "refresh".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialFile::new(dir.path().join("auth.json"));

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialFile::new(dir.path().join("auth.json"));

        let saved = record("abc");
        store.save(&saved).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.access_token, saved.access_token);
        assert_eq!(loaded.refresh_token, saved.refresh_token);
        assert_eq!(loaded.created_at, saved.created_at);
    }

    #[test]
    fn malformed_json_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        fs::write(&path, "not json").unwrap();

        let store = CredentialFile::new(path);
        assert!(matches!(store.load(), Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn missing_access_token_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        fs::write(
            &path,
            r#"{"refresh_token":"r","created_at":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let store = CredentialFile::new(path);
        assert!(matches!(store.load(), Err(AuthError::InvalidCredential(_))));
    }

    #[test]
    fn empty_access_token_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("auth.json");
        fs::write(
            &path,
            r#"{"access_token":"","refresh_token":"r","created_at":"2025-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let store = CredentialFile::new(path);
        assert!(matches!(store.load(), Err(AuthError::InvalidCredential(_))));
    }

    #[cfg(unix)]
    #[test]
    fn saved_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = CredentialFile::new(dir.path().join("auth.json"));
        store.save(&record("abc")).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
