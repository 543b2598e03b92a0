//! Shared plumbing for the HTTP service adapters.
//!
//! The service traits in `moodmap-core` are synchronous to keep the core
//! embeddable in synchronous contexts. Each adapter owns an [`HttpBridge`]
//! that drives async `reqwest` calls to completion on a Tokio runtime.

use std::future::Future;
use std::time::Duration;

use log::debug;
use moodmap_core::ServiceError;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Default user agent for outgoing requests.
///
/// The public OpenStreetMap services ask clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = "moodmap/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest error body quoted in an HTTP error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Error type for adapter construction failures.
#[derive(Debug)]
pub enum ServiceBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
    /// The configured base URL is not a valid absolute URL.
    BaseUrl {
        /// The rejected value.
        base_url: String,
        /// Parser error.
        source: url::ParseError,
    },
}

impl std::fmt::Display for ServiceBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
            Self::BaseUrl { base_url, source } => {
                write!(f, "invalid base URL {base_url:?}: {source}")
            }
        }
    }
}

impl std::error::Error for ServiceBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
            Self::BaseUrl { source, .. } => Some(source),
        }
    }
}

/// Connection settings for one HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServiceConfig {
    /// Base URL of the service (e.g., `"https://overpass-api.de"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl HttpServiceConfig {
    /// Create a configuration for `base_url` with default timeout and user
    /// agent.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Join `path` onto the base URL without doubling slashes.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// An HTTP client paired with the runtime that drives it.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, requests run on the bridge's
/// own current-thread runtime. When called from within a multi-threaded
/// Tokio runtime (detected via [`Handle::try_current()`] and
/// [`RuntimeFlavor::MultiThread`]), the caller's handle is used with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics. Inside a
/// `current_thread` runtime the bridge falls back to its own runtime, which
/// may deadlock if the caller's runtime is driving IO this request needs.
pub(crate) struct HttpBridge {
    client: Client,
    config: HttpServiceConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBridge")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpBridge {
    pub(crate) fn new(config: HttpServiceConfig) -> Result<Self, ServiceBuildError> {
        url::Url::parse(&config.base_url).map_err(|source| ServiceBuildError::BaseUrl {
            base_url: config.base_url.clone(),
            source,
        })?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ServiceBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ServiceBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    pub(crate) const fn config(&self) -> &HttpServiceConfig {
        &self.config
    }

    pub(crate) const fn client(&self) -> &Client {
        &self.client
    }

    /// Run `future` to completion from synchronous code.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            _ => self.runtime.block_on(future),
        }
    }

    /// Send `request` and return the status with the full body.
    ///
    /// Only transport failures are errors here; callers decide what a
    /// non-success status means.
    pub(crate) async fn fetch_text(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<(StatusCode, String), ServiceError> {
        debug!("requesting {url}");
        let response = request
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;
        debug!("{url} answered {status} with {} bytes", body.len());
        Ok((status, body))
    }

    /// Send `request` and decode a successful JSON body.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ServiceError> {
        let (status, body) = self.fetch_text(request, url).await?;
        if !status.is_success() {
            return Err(http_error(url, status, &body));
        }
        parse_json(&body)
    }

    /// Convert a reqwest error to a [`ServiceError`].
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> ServiceError {
        if error.is_timeout() {
            return ServiceError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ServiceError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        if error.is_decode() {
            return ServiceError::Parse {
                message: error.to_string(),
            };
        }

        ServiceError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }
}

/// Decode a JSON body, reporting failures as [`ServiceError::Parse`].
pub(crate) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|err| ServiceError::Parse {
        message: err.to_string(),
    })
}

/// Build an HTTP error quoting the start of the response body.
pub(crate) fn http_error(url: &str, status: StatusCode, body: &str) -> ServiceError {
    let message: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
    let message = if message.is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_owned()
    } else {
        message
    };
    ServiceError::Http {
        url: url.to_owned(),
        status: status.as_u16(),
        message,
    }
}
