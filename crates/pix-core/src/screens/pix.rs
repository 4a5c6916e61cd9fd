//! Protected PIX screen.

use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::error::Error;
use crate::messages;
use crate::router::Route;
use crate::session::SessionContext;
use crate::traits::{Clipboard, PixApi, TokenStore};
use crate::{PixInfo, Result};

use super::{Transition, failure_message};

/// How long the copy button shows its "copied" label.
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// What the body of the screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PixView {
    #[default]
    Loading,
    Loaded(PixInfo),
}

/// State of the PIX screen.
///
/// The screen starts in [`PixView::Loading`] and only leaves it when a fetch
/// succeeds. A transport failure keeps it there with an error; a rejection
/// signs the session out and sends the user back to login.
#[derive(Debug, Default)]
pub struct PixScreen {
    view: PixView,
    error: Option<String>,
    copied_until: Option<Instant>,
}

impl PixScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &PixView {
        &self.view
    }

    /// Returns the loaded payment details, if any.
    pub fn info(&self) -> Option<&PixInfo> {
        match &self.view {
            PixView::Loaded(info) => Some(info),
            PixView::Loading => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the payment details with the session token.
    ///
    /// If `cancel` fires before the response arrives, the screen is left
    /// untouched and the shell stays put. A rejection always lands on login
    /// with a notice; a store that cannot be cleared is only logged.
    #[instrument(skip_all)]
    pub async fn mount<A, S>(
        &mut self,
        api: &A,
        session: &mut SessionContext<S>,
        cancel: &CancellationToken,
    ) -> Result<Transition>
    where
        A: PixApi + ?Sized,
        S: TokenStore,
    {
        let Some(token) = session.token().cloned() else {
            debug!("No session token, leaving PIX screen");
            return Ok(Transition::to(Route::Login));
        };

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("PIX fetch cancelled before completion");
                return Ok(Transition::Stay);
            }
            result = api.fetch_pix(&token) => result,
        };

        self.error = None;

        match result {
            Ok(info) => {
                debug!("PIX details loaded");
                self.view = PixView::Loaded(info);
                Ok(Transition::Stay)
            }
            Err(Error::Rejected(rejected)) => {
                info!(status = rejected.status, "PIX request rejected, signing out");
                let notice = rejected
                    .detail
                    .unwrap_or_else(|| messages::SESSION_EXPIRED.to_string());
                self.error = Some(notice.clone());

                // The in-memory session is anonymous even if the store fails.
                if let Err(err) = session.sign_out() {
                    warn!(error = %err, "Failed to remove rejected session token");
                }

                Ok(Transition::Navigate {
                    to: Route::Login,
                    notice: Some(notice),
                })
            }
            Err(err) => {
                self.error = Some(failure_message(
                    err,
                    messages::SESSION_EXPIRED,
                    messages::PIX_FETCH_FAILED,
                )?);
                Ok(Transition::Stay)
            }
        }
    }

    /// Run the fetch again, e.g. after a transport failure.
    pub async fn reload<A, S>(
        &mut self,
        api: &A,
        session: &mut SessionContext<S>,
        cancel: &CancellationToken,
    ) -> Result<Transition>
    where
        A: PixApi + ?Sized,
        S: TokenStore,
    {
        self.mount(api, session, cancel).await
    }

    /// Copy the payment code.
    ///
    /// Does nothing until the details are loaded. Returns true if the code
    /// reached the clipboard.
    pub fn copy_code<C: Clipboard + ?Sized>(&mut self, clipboard: &mut C) -> bool {
        let Some(code) = self.info().map(|info| info.copy_paste_code.clone()) else {
            return false;
        };
        if code.is_empty() {
            return false;
        }

        match clipboard.write_text(&code) {
            Ok(()) => {
                self.copied_until = Some(Instant::now() + COPY_FEEDBACK);
                true
            }
            Err(err) => {
                info!(error = %err, "Failed to copy PIX code");
                self.error = Some(messages::COPY_FAILED.to_string());
                false
            }
        }
    }

    /// Returns true while the "copied" feedback is showing.
    pub fn is_copied(&self) -> bool {
        self.copied_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// The copy button label.
    pub fn copy_label(&self) -> &'static str {
        if self.is_copied() {
            messages::COPIED_LABEL
        } else {
            messages::COPY_LABEL
        }
    }

    /// Sign out and go to login, whatever state the screen is in.
    pub fn logout<S: TokenStore>(&mut self, session: &mut SessionContext<S>) -> Result<Transition> {
        session.sign_out()?;
        info!("Logged out");
        Ok(Transition::to(Route::Login))
    }
}
