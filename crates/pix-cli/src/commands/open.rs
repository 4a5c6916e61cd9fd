//! Open command implementation.

use anyhow::{Result, bail};
use clap::Args;

use pix_core::Credentials;

use crate::app::App;
use crate::shell::{Outcome, PixAction, Shell};

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Path to open (e.g. /, /register, /pix)
    #[arg(default_value = "/")]
    pub path: String,

    /// E-mail to fill in if a login or register screen is reached
    #[arg(long, requires = "password")]
    pub email: Option<String>,

    /// Password to fill in if a login or register screen is reached
    #[arg(long, requires = "email")]
    pub password: Option<String>,

    /// Print PIX details as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: OpenArgs, api_url: &str) -> Result<Outcome> {
    let credentials = match (&args.email, &args.password) {
        (Some(email), Some(password)) => Some(Credentials::new(email, password)?),
        (None, None) => None,
        _ => bail!("--email and --password must be given together"),
    };

    let mut app = App::open(api_url)?;
    let action = if args.json {
        PixAction::ShowJson
    } else {
        PixAction::Show
    };

    Shell::new(&mut app)
        .with_credentials(credentials)
        .with_pix_action(action)
        .navigate(&args.path)
        .await
}
