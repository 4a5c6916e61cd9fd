//! Scripted backend for screen tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::{RejectedError, TransportError};
use crate::traits::{PixApi, RegisterOutput};
use crate::types::ApiUrl;
use crate::{Credentials, PixInfo, Result, SessionToken};

/// How the fake backend answers a call.
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Ok,
    Reject(u16, Option<&'static str>),
    Transport,
}

impl Reply {
    fn into_result<T>(self, ok: impl FnOnce() -> T) -> Result<T> {
        match self {
            Reply::Ok => Ok(ok()),
            Reply::Reject(status, detail) => {
                Err(RejectedError::new(status, detail.map(str::to_string)).into())
            }
            Reply::Transport => Err(TransportError::Connection {
                message: "connection refused".into(),
            }
            .into()),
        }
    }
}

pub struct FakeApi {
    url: ApiUrl,
    login: Reply,
    register: Reply,
    pix: Reply,
    token: &'static str,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_token: Mutex<Option<String>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            url: ApiUrl::new("http://localhost:8000").unwrap(),
            login: Reply::Ok,
            register: Reply::Ok,
            pix: Reply::Ok,
            token: "t",
            delay: None,
            calls: AtomicUsize::new(0),
            last_token: Mutex::new(None),
        }
    }

    pub fn login(mut self, reply: Reply) -> Self {
        self.login = reply;
        self
    }

    pub fn register(mut self, reply: Reply) -> Self {
        self.register = reply;
        self
    }

    pub fn pix(mut self, reply: Reply) -> Self {
        self.pix = reply;
        self
    }

    pub fn issuing(mut self, token: &'static str) -> Self {
        self.token = token;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_token(&self) -> Option<String> {
        self.last_token.lock().unwrap().clone()
    }

    pub fn pix_info() -> PixInfo {
        PixInfo {
            key: "+5511999999999".into(),
            amount: "0.01".into(),
            copy_paste_code: "Simulado PIX: Chave +5511999999999 | Valor R$0.01".into(),
        }
    }

    async fn call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl PixApi for FakeApi {
    fn url(&self) -> &ApiUrl {
        &self.url
    }

    async fn health(&self) -> Result<String> {
        self.call().await;
        Ok("API está funcionando!".into())
    }

    async fn register(&self, _credentials: &Credentials) -> Result<RegisterOutput> {
        self.call().await;
        self.register.into_result(RegisterOutput::default)
    }

    async fn login(&self, _credentials: &Credentials) -> Result<SessionToken> {
        self.call().await;
        let token = self.token;
        self.login
            .into_result(|| SessionToken::new(token).unwrap())
    }

    async fn fetch_pix(&self, token: &SessionToken) -> Result<PixInfo> {
        self.call().await;
        *self.last_token.lock().unwrap() = Some(token.as_str().to_string());
        self.pix.into_result(Self::pix_info)
    }
}
