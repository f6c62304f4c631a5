//! HTTP transport capability.
//!
//! # Design
//! The loader never touches the network itself. It hands a URL and an
//! `HttpCompletion` to an injected `HttpClient` and the transport completes
//! that handle once the exchange is over, on whatever thread or event loop
//! it likes. Responses are plain data: a status code and the raw body.
//!
//! `HttpCompletion` is consumed by `complete`, so a transport cannot fire it
//! twice. If a transport drops the handle without completing it, the handle
//! completes itself with `TransportError::Abandoned`, so the caller always
//! gets exactly one result.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::error::TransportError;

/// A completed HTTP exchange described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Raw outcome of a GET as reported by the transport.
pub type HttpClientResult = Result<HttpResponse, TransportError>;

type Callback = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

/// Single-use completion handle passed to `HttpClient::get`.
pub struct HttpCompletion {
    callback: Option<Callback>,
}

impl HttpCompletion {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(HttpClientResult) + Send + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Deliver the transport result. Consumes the handle.
    pub fn complete(mut self, result: HttpClientResult) {
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
    }
}

impl Drop for HttpCompletion {
    fn drop(&mut self) {
        // Never run caller code while unwinding.
        if std::thread::panicking() {
            return;
        }
        if let Some(callback) = self.callback.take() {
            tracing::warn!("HTTP completion dropped without a result");
            callback(Err(TransportError::Abandoned));
        }
    }
}

impl fmt::Debug for HttpCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpCompletion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

/// Issue a GET to `url` and complete `completion` exactly once.
///
/// Implementations may complete synchronously or from another thread.
/// Retries, redirects and timeouts are the implementation's business.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpCompletion);
}

impl<T: HttpClient + ?Sized> HttpClient for Arc<T> {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        (**self).get(url, completion)
    }
}
