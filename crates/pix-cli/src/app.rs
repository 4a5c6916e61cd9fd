//! Wiring of backend client and persisted session.

use anyhow::{Context, Result};

use pix_core::{ApiUrl, SessionContext};
use pix_http::HttpPixApi;

use crate::session::{FileTokenStore, storage};

/// Everything a command needs: the backend and the session.
pub struct App {
    pub api: HttpPixApi,
    pub session: SessionContext<FileTokenStore>,
}

impl App {
    /// Build the app for `api_url`, restoring the stored session.
    pub fn open(api_url: &str) -> Result<Self> {
        let url = ApiUrl::new(api_url).context("Invalid API URL")?;
        let path = storage::default_session_path()?;

        let api = HttpPixApi::new(url.clone()).context("Failed to build HTTP client")?;
        let session = SessionContext::open(FileTokenStore::new(path, url))
            .context("Failed to load session")?;

        Ok(Self { api, session })
    }
}
