//! Show command implementation.

use anyhow::Result;
use clap::Args;

use pix_core::Route;

use crate::app::App;
use crate::shell::{Outcome, PixAction, Shell};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Print the PIX details as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ShowArgs, api_url: &str) -> Result<Outcome> {
    let mut app = App::open(api_url)?;
    let action = if args.json {
        PixAction::ShowJson
    } else {
        PixAction::Show
    };

    Shell::new(&mut app)
        .with_pix_action(action)
        .navigate(Route::Pix.path())
        .await
}
