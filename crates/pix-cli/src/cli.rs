//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::{copy, login, logout, open, ping, register, show, status};

/// Default backend for local development.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Register, log in and fetch your PIX confirmation code.
#[derive(Parser, Debug)]
#[command(name = "pix")]
#[command(author, version = env!("PIX_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Backend base URL
    #[arg(long, global = true, env = "PIX_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account, then return to the login screen
    Register(register::RegisterArgs),

    /// Log in and show the PIX screen
    Login(login::LoginArgs),

    /// Show the PIX confirmation details
    Show(show::ShowArgs),

    /// Copy the PIX payment code to the clipboard
    Copy(copy::CopyArgs),

    /// Forget the stored session
    Logout(logout::LogoutArgs),

    /// Open a path as the browser client would (/, /register, /pix)
    Open(open::OpenArgs),

    /// Display the stored session
    Status(status::StatusArgs),

    /// Check that the backend is reachable
    Ping(ping::PingArgs),
}
