//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use pix_core::PixScreen;

use crate::app::App;
use crate::output;
use crate::shell::{Outcome, Shell};

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, api_url: &str) -> Result<Outcome> {
    let mut app = App::open(api_url)?;

    // Logging out never needs the PIX details to have loaded.
    let transition = PixScreen::new()
        .logout(&mut app.session)
        .context("Failed to clear session")?;

    output::success("Sessão encerrada");

    let Some(route) = transition.destination() else {
        return Ok(Outcome::Done);
    };
    Shell::new(&mut app).run(route, None).await
}
