//! Ping command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pix_core::traits::PixApi;
use pix_core::{ApiUrl, messages};
use pix_http::HttpPixApi;

use crate::output;
use crate::shell::Outcome;

#[derive(Args, Debug)]
pub struct PingArgs {}

pub async fn run(_args: PingArgs, api_url: &str) -> Result<Outcome> {
    let url = ApiUrl::new(api_url).context("Invalid API URL")?;
    let api = HttpPixApi::new(url).context("Failed to build HTTP client")?;

    match api.health().await {
        Ok(message) => {
            output::success(&format!("{} {}", api.url(), message));
            Ok(Outcome::Done)
        }
        Err(err) if err.is_transport() => {
            tracing::debug!(error = %err, "Health check failed");
            output::error(messages::CONNECTION_ERROR);
            Ok(Outcome::Failed)
        }
        Err(err) => {
            output::error(&err.to_string());
            Ok(Outcome::Failed)
        }
    }
}
