//! HTTP client for the pixflow backend.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use pix_core::error::{Error, InvalidInputError, RejectedError, TransportError};
use pix_core::{ApiUrl, SessionToken};

use crate::endpoints::ErrorResponse;

/// Thin JSON-over-HTTP client bound to one backend.
///
/// Every call sends exactly one request. Non-2xx answers with a JSON body
/// become [`Error::Rejected`]; failures to send or to decode a body, including
/// an error body, become [`Error::Transport`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpClient {
    /// Create a new client for the given backend.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the TLS backend cannot be initialised.
    pub fn new(api: ApiUrl) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("pixflow/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport)?;

        Ok(Self { client, api })
    }

    /// Returns the backend URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Make an unauthenticated GET request.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(transport)?;

        self.handle_response(response).await
    }

    /// Make a GET request with a bearer token.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn get_authed<R>(&self, path: &str, token: &SessionToken) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "Authenticated GET");

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, auth_header(token)?)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// POST a JSON body and decode the JSON answer.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "POST");
        trace!(?body, "request body");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or error.
    ///
    /// Both success and error bodies must be JSON; anything else is a
    /// transport failure, whatever the status.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        let text = response.text().await.map_err(transport)?;

        if status.is_success() {
            decode(&text)
        } else {
            let body: ErrorResponse = decode(&text)?;
            Err(RejectedError::new(status.as_u16(), body.into_detail()).into())
        }
    }
}

fn decode<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    serde_json::from_str(text).map_err(|e| {
        TransportError::Decode {
            message: e.to_string(),
        }
        .into()
    })
}

fn auth_header(token: &SessionToken) -> Result<HeaderValue, Error> {
    let mut value = HeaderValue::from_str(&token.bearer()).map_err(|e| InvalidInputError::Token {
        reason: e.to_string(),
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Classify a reqwest failure as a transport error.
fn transport(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let api = ApiUrl::new("https://pix.example.com").unwrap();
        let client = HttpClient::new(api.clone()).unwrap();
        assert_eq!(client.api(), &api);
    }

    #[test]
    fn auth_header_is_bearer_and_sensitive() {
        let token = SessionToken::new("alice@example.com").unwrap();
        let value = auth_header(&token).unwrap();
        assert_eq!(value.to_str().unwrap(), "Bearer alice@example.com");
        assert!(value.is_sensitive());
    }

    #[test]
    fn undecodable_body_is_transport() {
        let err = decode::<ErrorResponse>("<html>Bad Gateway</html>").unwrap_err();
        assert!(err.is_transport());

        let err = decode::<ErrorResponse>("").unwrap_err();
        assert!(err.is_transport());
    }
}
