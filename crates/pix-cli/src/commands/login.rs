//! Login command implementation.

use anyhow::Result;
use clap::Args;

use pix_core::Route;

use crate::app::App;
use crate::shell::{Outcome, Shell};

use super::CredentialArgs;

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[command(flatten)]
    pub credentials: CredentialArgs,
}

pub async fn run(args: LoginArgs, api_url: &str) -> Result<Outcome> {
    let credentials = args.credentials.credentials()?;
    let mut app = App::open(api_url)?;

    Shell::new(&mut app)
        .with_credentials(Some(credentials))
        .navigate(Route::Login.path())
        .await
}
