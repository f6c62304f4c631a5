//! `HttpClient` backed by a blocking `ureq` agent.
//!
//! Each GET runs on its own short-lived thread and completes the handle from
//! there, so completions never arrive before `get` returns. The agent is
//! configured with `http_status_as_error(false)`: 4xx/5xx responses come
//! back as data and the mapper decides what they mean.

use std::fmt;
use std::thread;
use std::time::Duration;

use url::Url;

use crate::error::TransportError;
use crate::http::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};

/// Largest response body read by default, matching ureq's own default.
pub const DEFAULT_MAX_BODY_SIZE: u64 = 10 * 1024 * 1024;

/// Transport settings. Retries and caching are not supported.
#[derive(Debug, Clone)]
pub struct UreqClientConfig {
    /// Upper bound on the whole exchange. `None` leaves ureq's default.
    pub timeout: Option<Duration>,
    /// Bodies larger than this fail as a transport error.
    pub max_body_size: u64,
}

impl Default for UreqClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

#[derive(Clone)]
pub struct UreqHttpClient {
    agent: ureq::Agent,
    max_body_size: u64,
}

impl UreqHttpClient {
    pub fn new() -> Self {
        Self::with_config(UreqClientConfig::default())
    }

    pub fn with_config(config: UreqClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self {
            agent,
            max_body_size: config.max_body_size,
        }
    }
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for UreqHttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqHttpClient")
            .field("max_body_size", &self.max_body_size)
            .finish_non_exhaustive()
    }
}

impl HttpClient for UreqHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let agent = self.agent.clone();
        let limit = self.max_body_size;
        let url = url.clone();
        let spawned = thread::Builder::new()
            .name("feed-http".to_string())
            .spawn(move || completion.complete(execute(&agent, &url, limit)));
        // On failure the closure, and with it the completion, is dropped,
        // which reports the request as abandoned.
        if let Err(e) = spawned {
            tracing::warn!(error = %e, "failed to spawn HTTP worker thread");
        }
    }
}

/// Run one blocking GET and turn the outcome into plain data.
fn execute(agent: &ureq::Agent, url: &Url, limit: u64) -> HttpClientResult {
    let mut response = agent
        .get(url.as_str())
        .call()
        .map_err(|e| TransportError::Request(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .with_config()
        .limit(limit)
        .read_to_vec()
        .map_err(|e| TransportError::Request(e.to_string()))?;
    tracing::debug!(%url, status, bytes = body.len(), "HTTP exchange completed");
    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_default_body_limit() {
        let config = UreqClientConfig::default();
        assert_eq!(config.max_body_size, DEFAULT_MAX_BODY_SIZE);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn debug_shows_body_limit() {
        let client = UreqHttpClient::with_config(UreqClientConfig {
            max_body_size: 2048,
            ..UreqClientConfig::default()
        });
        assert_eq!(
            format!("{client:?}"),
            "UreqHttpClient { max_body_size: 2048, .. }"
        );
    }
}
