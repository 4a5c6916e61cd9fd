//! HTTP-backed implementation of [`PixApi`].

use async_trait::async_trait;
use tracing::{debug, instrument};

use pix_core::error::TransportError;
use pix_core::traits::{PixApi, RegisterOutput};
use pix_core::{ApiUrl, Credentials, PixInfo, Result, SessionToken};

use crate::client::HttpClient;
use crate::endpoints::*;

/// The pixflow backend reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPixApi {
    client: HttpClient,
}

impl HttpPixApi {
    /// Create a client for the backend at `api`.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(api)?,
        })
    }

    fn credentials_body(credentials: &Credentials) -> CredentialsRequest<'_> {
        CredentialsRequest {
            email: credentials.email(),
            password: Secret(credentials.password()),
        }
    }
}

#[async_trait]
impl PixApi for HttpPixApi {
    fn url(&self) -> &ApiUrl {
        self.client.api()
    }

    #[instrument(skip(self))]
    async fn health(&self) -> Result<String> {
        let response: MessageResponse = self.client.get(ROOT).await?;
        Ok(response.message.unwrap_or_default())
    }

    #[instrument(skip_all, fields(email = %credentials.email()))]
    async fn register(&self, credentials: &Credentials) -> Result<RegisterOutput> {
        let response: MessageResponse = self
            .client
            .post(REGISTER, &Self::credentials_body(credentials))
            .await?;

        debug!("Account registered");
        Ok(RegisterOutput {
            message: response.message,
        })
    }

    #[instrument(skip_all, fields(email = %credentials.email()))]
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken> {
        let response: LoginResponse = self
            .client
            .post(LOGIN, &Self::credentials_body(credentials))
            .await?;

        SessionToken::new(response.token).map_err(|e| {
            TransportError::Decode {
                message: format!("login response carried an unusable token: {e}"),
            }
            .into()
        })
    }

    #[instrument(skip_all)]
    async fn fetch_pix(&self, token: &SessionToken) -> Result<PixInfo> {
        self.client.get_authed(PIX, token).await
    }
}
