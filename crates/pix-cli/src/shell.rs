//! Navigator: resolves paths through the guard and follows screen transitions.

use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use pix_core::router::{self, Resolution};
use pix_core::{Credentials, LoginScreen, PixScreen, RegisterScreen, Route, Transition};

use crate::app::App;
use crate::clipboard::SystemClipboard;
use crate::output;
use crate::render;

/// How a command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The requested screen was reached without an error.
    Done,
    /// The user was redirected, or the final screen shows an error.
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// What to do once the PIX screen has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixAction {
    #[default]
    Show,
    ShowJson,
    Copy,
}

/// Where the shell goes after a screen has been rendered.
enum Step {
    Stop(Outcome),
    Go { to: Route, notice: Option<String> },
}

/// Drives screens for a single command invocation.
///
/// Credentials stand in for a filled-in form: they are used by the first
/// login or register screen reached and then discarded.
pub struct Shell<'a> {
    app: &'a mut App,
    credentials: Option<Credentials>,
    pix_action: PixAction,
}

impl<'a> Shell<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self {
            app,
            credentials: None,
            pix_action: PixAction::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn with_pix_action(mut self, action: PixAction) -> Self {
        self.pix_action = action;
        self
    }

    /// Open a path the way the browser client would.
    pub async fn navigate(&mut self, path: &str) -> Result<Outcome> {
        let resolution = router::resolve(path, self.app.session.state());
        debug!(path, ?resolution, "Resolved path");

        match resolution {
            Resolution::Mount(route) => self.run(route, None).await,
            Resolution::Redirect(route) => {
                output::hint(&format!("{path} → {route}"));
                let had_credentials = self.credentials.is_some();
                let outcome = self.run(route, None).await?;
                Ok(if had_credentials {
                    outcome
                } else {
                    Outcome::Failed
                })
            }
        }
    }

    /// Enter `route` and follow transitions until a screen stays put.
    pub async fn run(&mut self, mut route: Route, mut notice: Option<String>) -> Result<Outcome> {
        loop {
            let step = match route {
                Route::Login => self.login(notice.take()).await?,
                Route::Register => self.register().await?,
                Route::Pix => self.pix().await?,
            };

            match step {
                Step::Stop(outcome) => return Ok(outcome),
                Step::Go { to, notice: next } => {
                    debug!(from = %route, to = %to, "Navigating");
                    route = to;
                    notice = next;
                }
            }
        }
    }

    async fn login(&mut self, notice: Option<String>) -> Result<Step> {
        let had_notice = notice.is_some();
        let mut screen = match notice {
            Some(notice) => LoginScreen::with_error(notice),
            None => LoginScreen::new(),
        };

        let Some(credentials) = self.credentials.take() else {
            render::login(&screen);
            return Ok(Step::Stop(if had_notice {
                Outcome::Failed
            } else {
                Outcome::Done
            }));
        };

        output::hint("Entrando...");
        let transition = screen
            .submit(&self.app.api, &mut self.app.session, &credentials)
            .await
            .context("Failed to store session")?;

        if transition == Transition::Stay {
            render::login(&screen);
            return Ok(Step::Stop(Outcome::Failed));
        }

        output::success("Login realizado com sucesso");
        Ok(follow(transition).await)
    }

    async fn register(&mut self) -> Result<Step> {
        let mut screen = RegisterScreen::new();

        let Some(credentials) = self.credentials.take() else {
            render::register(&screen);
            output::hint("Cadastre-se com: pix register --email <e-mail> --password <senha>");
            return Ok(Step::Stop(Outcome::Done));
        };

        let transition = screen.submit(&self.app.api, &credentials).await?;
        render::register(&screen);

        if transition == Transition::Stay {
            return Ok(Step::Stop(Outcome::Failed));
        }
        Ok(follow(transition).await)
    }

    async fn pix(&mut self) -> Result<Step> {
        let mut screen = PixScreen::new();
        let cancel = CancellationToken::new();

        let interrupt = cancel.clone();
        let watcher = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                interrupt.cancel();
            }
        });

        let transition = screen
            .mount(&self.app.api, &mut self.app.session, &cancel)
            .await
            .context("Failed to update session")?;
        watcher.abort();

        if transition != Transition::Stay {
            return Ok(follow(transition).await);
        }

        if cancel.is_cancelled() {
            output::error("Cancelado");
            return Ok(Step::Stop(Outcome::Failed));
        }

        if self.pix_action == PixAction::Copy && screen.copy_code(&mut SystemClipboard) {
            output::success(screen.copy_label());
        }

        render::pix(&screen, self.pix_action == PixAction::ShowJson)?;

        Ok(Step::Stop(if screen.error().is_some() || screen.info().is_none() {
            Outcome::Failed
        } else {
            Outcome::Done
        }))
    }
}

/// Turn a screen transition into a shell step, waiting out any delay.
async fn follow(transition: Transition) -> Step {
    match transition {
        Transition::Stay => Step::Stop(Outcome::Done),
        Transition::Navigate { to, notice } => Step::Go { to, notice },
        Transition::NavigateAfter { to, delay } => {
            tokio::time::sleep(delay).await;
            Step::Go { to, notice: None }
        }
    }
}
