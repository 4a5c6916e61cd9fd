//! Status command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pix_core::SessionState;

use crate::app::App;
use crate::output;
use crate::shell::Outcome;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub async fn run(_args: StatusArgs, api_url: &str) -> Result<Outcome> {
    let app = App::open(api_url)?;
    let store = app.session.store();

    output::field("API", store.api().base());
    output::field("Session file", &store.path().display().to_string());

    match app.session.state() {
        SessionState::Anonymous => {
            output::field("Session", "anonymous");
            output::hint("No active session. Run 'pix login' first.");
            Ok(Outcome::Failed)
        }
        SessionState::Authenticated { .. } => {
            output::field("Session", "authenticated");
            if let Some(saved_at) = store.saved_at().context("Failed to read session")? {
                output::field("Since", &saved_at.to_rfc3339());
            }
            Ok(Outcome::Done)
        }
    }
}
