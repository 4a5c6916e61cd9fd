//! Subcommand implementations.

pub mod copy;
pub mod login;
pub mod logout;
pub mod open;
pub mod ping;
pub mod register;
pub mod show;
pub mod status;

use anyhow::{Context, Result};
use clap::Args;

use pix_core::Credentials;

use crate::cli::Commands;
use crate::shell::Outcome;

/// Email and password, as typed into the login or register form.
#[derive(Args, Debug)]
pub struct CredentialArgs {
    /// Account e-mail
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long, env = "PIX_PASSWORD", hide_env_values = true)]
    pub password: String,
}

impl CredentialArgs {
    pub fn credentials(&self) -> Result<Credentials> {
        Credentials::new(&self.email, &self.password).context("Invalid credentials")
    }
}

pub async fn handle(command: Commands, api_url: &str) -> Result<Outcome> {
    match command {
        Commands::Register(args) => register::run(args, api_url).await,
        Commands::Login(args) => login::run(args, api_url).await,
        Commands::Show(args) => show::run(args, api_url).await,
        Commands::Copy(args) => copy::run(args, api_url).await,
        Commands::Logout(args) => logout::run(args, api_url).await,
        Commands::Open(args) => open::run(args, api_url).await,
        Commands::Status(args) => status::run(args, api_url).await,
        Commands::Ping(args) => ping::run(args, api_url).await,
    }
}
