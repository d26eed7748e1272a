//! Blocking bridge over `reqwest` shared by the Open-Meteo clients.
//!
//! The collaborator traits in `swellcast-core` are synchronous so the engine
//! stays embeddable in synchronous callers. [`HttpBridge`] owns an HTTP
//! client and a current-thread Tokio runtime and blocks on async requests.
//!
//! # Runtime behaviour
//!
//! Called from outside any Tokio runtime, the bridge drives its own runtime.
//! Called from inside a multi-threaded runtime (detected via
//! [`Handle::try_current()`] and [`RuntimeFlavor::MultiThread`]), it borrows
//! that runtime's handle under [`tokio::task::block_in_place`] to avoid a
//! nested-runtime panic. Inside a `current_thread` runtime it falls back to
//! its own runtime, which can deadlock if the caller's runtime drives IO
//! this request depends on.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use swellcast_core::ForecastError;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use crate::forecast::openmeteo::ApiErrorBody;

/// Error type for HTTP client construction failures.
#[derive(Debug)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
    /// A configured base URL does not parse.
    InvalidBaseUrl {
        /// The rejected URL.
        url: String,
        /// Parse failure.
        source: url::ParseError,
    },
    /// The requested forecast length is outside what the service offers.
    InvalidForecastDays(u8),
}

impl std::fmt::Display for ProviderBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
            Self::InvalidBaseUrl { url, source } => {
                write!(f, "invalid base URL {url:?}: {source}")
            }
            Self::InvalidForecastDays(days) => write!(
                f,
                "forecast days must be between 1 and {MAX_FORECAST_DAYS}, got {days}"
            ),
        }
    }
}

impl std::error::Error for ProviderBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
            Self::InvalidBaseUrl { source, .. } => Some(source),
            Self::InvalidForecastDays(_) => None,
        }
    }
}

/// Longest forecast Open-Meteo serves, in days.
pub const MAX_FORECAST_DAYS: u8 = 16;

/// Join `path` onto `base`, ignoring any trailing slash on the base.
pub(crate) fn endpoint(base: &str, path: &str) -> Result<Url, ProviderBuildError> {
    let joined = format!("{}/{path}", base.trim_end_matches('/'));
    Url::parse(&joined).map_err(|source| ProviderBuildError::InvalidBaseUrl {
        url: base.to_owned(),
        source,
    })
}

/// HTTP client plus the runtime used to block on it.
pub(crate) struct HttpBridge {
    client: Client,
    runtime: Runtime,
    timeout: Duration,
}

impl std::fmt::Debug for HttpBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpBridge")
            .field("client", &self.client)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HttpBridge {
    pub(crate) fn new(user_agent: &str, timeout: Duration) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            runtime,
            timeout,
        })
    }

    /// Run `future` to completion on a suitable runtime.
    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            // No runtime detected, or current_thread runtime: use our own runtime.
            _ => self.runtime.block_on(future),
        }
    }

    /// GET `url` and decode a JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, ForecastError> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|parsed| parsed.reason)
                .unwrap_or_else(|| status.to_string());
            return Err(ForecastError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|err| ForecastError::ParseError {
                message: err.to_string(),
            })
    }

    /// Convert a reqwest error to a `ForecastError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &Url) -> ForecastError {
        if error.is_timeout() {
            return ForecastError::Timeout {
                url: url.to_string(),
                timeout_secs: self.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return ForecastError::HttpError {
                url: url.to_string(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        ForecastError::NetworkError {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://api.open-meteo.com")]
    #[case("https://api.open-meteo.com/")]
    fn endpoint_joins_without_double_slash(#[case] base: &str) {
        let url = endpoint(base, "v1/forecast").expect("valid base");
        assert_eq!(url.as_str(), "https://api.open-meteo.com/v1/forecast");
    }

    #[rstest]
    fn endpoint_rejects_unparsable_base() {
        let err = endpoint("not a url", "v1/forecast").expect_err("invalid base");
        assert!(matches!(err, ProviderBuildError::InvalidBaseUrl { ref url, .. } if url == "not a url"));
    }

    #[rstest]
    fn unreachable_host_is_a_network_error() {
        let bridge = HttpBridge::new("test-agent/1.0", Duration::from_secs(2)).expect("bridge");
        // Port 9 (discard) on localhost is closed in test environments.
        let url = Url::parse("http://127.0.0.1:9/v1/forecast").expect("valid url");
        let err = bridge
            .block_on(bridge.get_json::<serde_json::Value>(&url))
            .expect_err("connection should fail");
        assert!(matches!(
            err,
            ForecastError::NetworkError { .. } | ForecastError::Timeout { .. }
        ));
    }
}
