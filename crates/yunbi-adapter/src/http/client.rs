/*
[INPUT]:  HTTP configuration (base URL, timeouts) and optional credentials
[OUTPUT]: Configured client that dispatches GET/POST calls and decodes JSON
[POS]:    HTTP layer - core client implementation and request dispatch
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::time::Duration;

use chrono::Utc;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::auth::{Credentials, RequestSigner};
use crate::http::{Params, Result, YunbiError};

/// Base URL for the Yunbi v2 API
pub const DEFAULT_BASE_URL: &str = "https://yunbi.com/api/v2/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Whole-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

/// Main HTTP client for the Yunbi API
#[derive(Debug)]
pub struct YunbiClient {
    http_client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl YunbiClient {
    /// Create a public-only client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Create an authenticated client with default configuration
    pub fn with_credentials(
        access_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(
            ClientConfig::default(),
            Some(Credentials::new(access_key, secret_key)),
        )
    }

    /// Create a client from optional keys.
    ///
    /// Private endpoints are enabled only when both keys are given.
    pub fn from_keys(access_key: Option<String>, secret_key: Option<String>) -> Result<Self> {
        Self::with_config(
            ClientConfig::default(),
            Credentials::from_pair(access_key, secret_key),
        )
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig, credentials: Option<Credentials>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| YunbiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            credentials,
        })
    }

    /// Whether private endpoints are available
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Get credentials if set
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build full URL for an endpoint: `<base_url><path>.json`
    fn endpoint_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(&format!("{path}.json"))?)
    }

    /// Issue an unsigned request and return the decoded JSON body.
    ///
    /// GET sends `params` as a query string, POST as a form body. Any other
    /// method fails with [`YunbiError::InvalidMethod`] before touching the
    /// network.
    pub async fn public_request(&self, method: Method, path: &str, params: Params) -> Result<Value> {
        ensure_supported(&method)?;
        self.dispatch(method, path, &params).await
    }

    /// Issue a signed request for a private endpoint.
    ///
    /// Injects `access_key`, `tonce` and `signature` into `params`. Fails with
    /// [`YunbiError::AuthenticationRequired`] when the client has no
    /// credentials.
    pub async fn private_request(
        &self,
        method: Method,
        path: &str,
        mut params: Params,
    ) -> Result<Value> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(YunbiError::AuthenticationRequired)?;
        ensure_supported(&method)?;

        params.insert("access_key", credentials.access_key());
        params.insert("tonce", current_tonce());
        let signature = RequestSigner::new(credentials).sign_request(&method, path, &params);
        params.insert("signature", signature);

        self.dispatch(method, path, &params).await
    }

    async fn dispatch(&self, method: Method, path: &str, params: &Params) -> Result<Value> {
        let url = self.endpoint_url(path)?;
        let pairs = params.to_pairs();
        debug!(method = %method, path, param_count = pairs.len(), "yunbi request");

        let builder = match method {
            Method::GET => self.http_client.get(url).query(&pairs),
            Method::POST => self.http_client.post(url).form(&pairs),
            other => return Err(YunbiError::InvalidMethod(other)),
        };
        self.send_json(builder).await
    }

    /// Send a request and decode the body as JSON regardless of HTTP status.
    ///
    /// Server-side error payloads are ordinary JSON and come back as `Ok`.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "yunbi response");
        Ok(serde_json::from_str(&body)?)
    }
}

fn ensure_supported(method: &Method) -> Result<()> {
    if *method == Method::GET || *method == Method::POST {
        Ok(())
    } else {
        Err(YunbiError::InvalidMethod(method.clone()))
    }
}

/// Base URLs must end in `/` so endpoint paths join underneath them
fn parse_base_url(raw: &str) -> Result<Url> {
    if raw.ends_with('/') {
        Ok(Url::parse(raw)?)
    } else {
        Ok(Url::parse(&format!("{raw}/"))?)
    }
}

/// Current epoch time in milliseconds
fn current_tonce() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}
