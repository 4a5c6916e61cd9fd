//! File-backed token store.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use pix_core::traits::TokenStore;
use pix_core::{ApiUrl, Error, SessionToken};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    api: String,
    token: String,
    saved_at: DateTime<Utc>,
}

/// Get the default session file path.
pub fn default_session_path() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "pix").context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("session.json"))
}

/// Keeps the session token in a JSON file, scoped to one backend.
///
/// A token saved for a different API URL is treated as absent, and an
/// unreadable file is treated as no session so a fresh login can replace it.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    api: ApiUrl,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>, api: ApiUrl) -> Self {
        Self {
            path: path.into(),
            api,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// When the current token was saved, if there is one for this backend.
    pub fn saved_at(&self) -> Result<Option<DateTime<Utc>>, Error> {
        Ok(self.read()?.map(|stored| stored.saved_at))
    }

    fn read(&self) -> Result<Option<StoredSession>, Error> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| Error::storage(format!("failed to read session file: {e}")))?;

        let stored: StoredSession = match serde_json::from_str(&json) {
            Ok(stored) => stored,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring invalid session file");
                return Ok(None);
            }
        };

        if stored.api != self.api.base() {
            debug!(stored = %stored.api, current = %self.api, "Session belongs to another API");
            return Ok(None);
        }

        Ok(Some(stored))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<SessionToken>, Error> {
        Ok(self
            .read()?
            .and_then(|stored| SessionToken::new(stored.token).ok()))
    }

    fn save(&mut self, token: &SessionToken) -> Result<(), Error> {
        let stored = StoredSession {
            api: self.api.base().to_string(),
            token: token.as_str().to_string(),
            saved_at: Utc::now(),
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| Error::storage(format!("failed to create data directory: {e}")))?;
        }

        let json = serde_json::to_string_pretty(&stored).map_err(Error::storage)?;

        fs::write(&self.path, &json)
            .map_err(|e| Error::storage(format!("failed to write session file: {e}")))?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path).map_err(Error::storage)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(Error::storage)?;
        }

        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), Error> {
        if self.path.exists() {
            fs::remove_file(&self.path)
                .map_err(|e| Error::storage(format!("failed to remove session file: {e}")))?;
            debug!(path = %self.path.display(), "Session file removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(url: &str) -> ApiUrl {
        ApiUrl::new(url).unwrap()
    }

    fn token(s: &str) -> SessionToken {
        SessionToken::new(s).unwrap()
    }

    #[test]
    fn missing_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"), api("http://localhost:8000"));
        assert!(store.load().unwrap().is_none());
        assert!(store.saved_at().unwrap().is_none());
    }

    #[test]
    fn save_load_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");
        let mut store = FileTokenStore::new(&path, api("http://localhost:8000"));

        store.save(&token("t")).unwrap();
        assert_eq!(store.load().unwrap(), Some(token("t")));
        assert!(store.saved_at().unwrap().is_some());

        store.clear().unwrap();
        assert!(!path.exists());
        assert!(store.load().unwrap().is_none());
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_private() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let mut store = FileTokenStore::new(&path, api("http://localhost:8000"));

        store.save(&token("t")).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn token_for_other_api_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut local = FileTokenStore::new(&path, api("http://localhost:8000/"));
        local.save(&token("t")).unwrap();

        let remote = FileTokenStore::new(&path, api("https://pix.example.com"));
        assert!(remote.load().unwrap().is_none());

        let same = FileTokenStore::new(&path, api("http://localhost:8000"));
        assert_eq!(same.load().unwrap(), Some(token("t")));
    }

    #[test]
    fn invalid_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        let mut store = FileTokenStore::new(&path, api("http://localhost:8000"));
        assert!(store.load().unwrap().is_none());

        store.save(&token("fresh")).unwrap();
        assert_eq!(store.load().unwrap(), Some(token("fresh")));
    }

    #[test]
    fn blank_token_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(
            &path,
            r#"{"api": "http://localhost:8000", "token": "", "saved_at": "2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        let store = FileTokenStore::new(&path, api("http://localhost:8000"));
        assert!(store.load().unwrap().is_none());
    }
}
