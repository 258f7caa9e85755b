use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode, header};
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::auth::session::SessionStore;
use crate::config::Config;
use crate::error::{ApiError, BackendError};

const USER_AGENT: &str = concat!("leavedesk/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP plumbing for the auth and leave clients.
///
/// Cloning is cheap; clones share the connection pool and the session.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_http(http, base_url, session))
    }

    pub fn from_config(config: &Config, session: Arc<SessionStore>) -> Result<Self, ApiError> {
        Self::new(config.api_base_url.clone(), session)
    }

    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
        session: Arc<SessionStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request without credentials.
    pub(crate) fn public(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(header::ACCEPT, "application/json")
    }

    /// Request carrying the session's bearer token. Without a session the
    /// header is left off and the backend decides.
    pub(crate) fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let request = self.public(method, path);
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => {
                debug!(path, "no session token, sending request without credentials");
                request
            }
        }
    }

    /// Sends and returns status plus raw body, whatever the status.
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
    ) -> Result<(StatusCode, Vec<u8>), reqwest::Error> {
        let response: Response = request.send().await.inspect_err(|e| {
            error!(error = %e, "request could not be completed");
        })?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok((status, body.to_vec()))
    }

    /// Sends, maps non-2xx to the matching `ApiError`, decodes the body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let (status, body) = self.execute(request).await?;

        if !status.is_success() {
            let rejection = BackendError::from_body(status, &body);
            warn!(status = status.as_u16(), payload = %rejection.payload, "backend refused request");
            return Err(ApiError::from_backend(rejection));
        }

        serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, "response body did not match the expected shape");
            ApiError::Decode(e)
        })
    }
}
