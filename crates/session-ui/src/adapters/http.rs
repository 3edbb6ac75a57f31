//! reqwest adapter for the session server.
//!
//! Session state lives entirely in the server-set cookie; the client keeps
//! it in a shared jar that can be exported and restored across runs. Exports
//! carry each cookie's expiry, so a restored cookie lapses when the server
//! said it would.

use std::sync::Arc;

use async_trait::async_trait;
use cookie_store::CookieStore;
use reqwest::cookie::CookieStore as _;
use reqwest::{Client, Url};
use reqwest_cookie_store::CookieStoreMutex;
use serde::Deserialize;
use tracing::debug;

use crate::config::ClientConfig;
use crate::domain::{Credentials, LoginStatus, StatusSnapshot};
use crate::error::ClientError;
use crate::ports::SessionApi;

const LOGIN_PATH: &str = "/login";
const LOGOUT_PATH: &str = "/logout";
const STATUS_PATH: &str = "/api/status";

/// Error body sent with a rejected login.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Session server client.
pub struct HttpSessionApi {
    client: Client,
    jar: Arc<CookieStoreMutex>,
    base_url: Url,
}

impl HttpSessionApi {
    /// Create a client for the server at `config.base_url`.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let jar = Arc::new(CookieStoreMutex::default());
        let client = Client::builder()
            .cookie_provider(jar.clone())
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            jar,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// Map a send failure onto the client error taxonomy.
    fn classify(&self, e: reqwest::Error) -> ClientError {
        if e.is_connect() {
            ClientError::Connection(self.base_url.to_string())
        } else if e.is_timeout() {
            ClientError::Timeout(
                e.url()
                    .map(Url::to_string)
                    .unwrap_or_else(|| self.base_url.to_string()),
            )
        } else {
            ClientError::Http(e)
        }
    }

    /// Cookies the jar would send to the server, as a `Cookie` header value.
    pub fn cookie_header(&self) -> Option<String> {
        self.jar
            .cookies(&self.base_url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
            .filter(|header| !header.is_empty())
    }

    /// Serialize the persistent, unexpired cookies as JSON. `None` when
    /// there is nothing worth keeping.
    pub fn export_cookies(&self) -> Result<Option<String>, ClientError> {
        let store = self.lock_jar()?;
        if !store.iter_unexpired().any(|cookie| cookie.is_persistent()) {
            return Ok(None);
        }

        let mut buffer = Vec::new();
        cookie_store::serde::json::save(&store, &mut buffer)
            .map_err(|e| ClientError::Parse(format!("cookie export: {}", e)))?;
        String::from_utf8(buffer)
            .map(Some)
            .map_err(|e| ClientError::Parse(format!("cookie export: {}", e)))
    }

    /// Replace the jar with cookies from [`export_cookies`](Self::export_cookies)
    /// output. Cookies that expired in the meantime are dropped.
    pub fn import_cookies(&self, json: &str) -> Result<(), ClientError> {
        let restored: CookieStore = cookie_store::serde::json::load(json.as_bytes())
            .map_err(|e| ClientError::Parse(format!("cookie import: {}", e)))?;

        let count = restored.iter_unexpired().count();
        *self.lock_jar()? = restored;
        debug!(count, "Restored session cookies");
        Ok(())
    }

    fn lock_jar(&self) -> Result<std::sync::MutexGuard<'_, CookieStore>, ClientError> {
        self.jar
            .lock()
            .map_err(|_| ClientError::Unavailable("cookie jar lock poisoned".to_string()))
    }
}

#[async_trait]
impl SessionApi for HttpSessionApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginStatus, ClientError> {
        let response = self
            .client
            .post(self.endpoint(LOGIN_PATH)?)
            .json(credentials)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(LoginStatus::Accepted);
        }

        let reason = response.json::<ErrorBody>().await.ok().map(|body| body.error);
        Ok(LoginStatus::Rejected {
            status: status.as_u16(),
            reason,
        })
    }

    async fn logout(&self) -> Result<(), ClientError> {
        let response = self
            .client
            .post(self.endpoint(LOGOUT_PATH)?)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        debug!(status = response.status().as_u16(), "Logout response");
        Ok(())
    }

    async fn status(&self) -> Result<StatusSnapshot, ClientError> {
        // The body is parsed whatever the status code.
        let response = self
            .client
            .get(self.endpoint(STATUS_PATH)?)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        response
            .json::<StatusSnapshot>()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}
