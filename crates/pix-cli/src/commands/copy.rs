//! Copy command implementation.

use anyhow::Result;
use clap::Args;

use pix_core::Route;

use crate::app::App;
use crate::shell::{Outcome, PixAction, Shell};

#[derive(Args, Debug)]
pub struct CopyArgs {}

pub async fn run(_args: CopyArgs, api_url: &str) -> Result<Outcome> {
    let mut app = App::open(api_url)?;

    Shell::new(&mut app)
        .with_pix_action(PixAction::Copy)
        .navigate(Route::Pix.path())
        .await
}
