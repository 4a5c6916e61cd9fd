//! Screen controllers.
//!
//! Each screen owns the state a front end renders (messages, loaded data)
//! and returns a [`Transition`] telling the shell where to go next. Backend
//! rejections and transport failures become rendered messages; only local
//! failures (storage, invalid input) are returned as errors.

mod login;
mod pix;
mod register;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use tracing::info;

use crate::Error;
use crate::messages;
use crate::router::Route;

pub use login::LoginScreen;
pub use pix::{COPY_FEEDBACK, PixScreen, PixView};
pub use register::{REDIRECT_DELAY, RegisterScreen};

/// Where the shell goes after a screen action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Remain on the current screen.
    Stay,
    /// Go to a route now, optionally carrying a message for the next screen.
    Navigate { to: Route, notice: Option<String> },
    /// Go to a route once `delay` has elapsed.
    NavigateAfter { to: Route, delay: Duration },
}

impl Transition {
    /// Navigate immediately without a notice.
    pub fn to(route: Route) -> Self {
        Transition::Navigate {
            to: route,
            notice: None,
        }
    }

    /// Returns the destination route, if any.
    pub fn destination(&self) -> Option<Route> {
        match self {
            Transition::Stay => None,
            Transition::Navigate { to, .. } | Transition::NavigateAfter { to, .. } => Some(*to),
        }
    }
}

/// Turn a backend failure into the message a screen shows.
///
/// Rejections show the server's `detail` or the screen's fallback; transport
/// failures show `transport_message`. Anything else is handed back.
fn failure_message(
    err: Error,
    fallback: &str,
    transport_message: &str,
) -> Result<String, Error> {
    match err {
        Error::Rejected(rejected) => {
            info!(status = rejected.status, "Request rejected by backend");
            Ok(rejected.detail.unwrap_or_else(|| fallback.to_string()))
        }
        Error::Transport(transport) => {
            info!(error = %transport, "Request failed");
            Ok(transport_message.to_string())
        }
        other => Err(other),
    }
}

fn connection_failure(err: Error, fallback: &str) -> Result<String, Error> {
    failure_message(err, fallback, messages::CONNECTION_ERROR)
}
