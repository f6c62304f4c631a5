//! Feed loader: transport → mapper → caller.
//!
//! # Design
//! `RemoteFeedLoader` holds only the URL and the transport, both fixed at
//! construction. Each `load` is independent: one GET, one mapped result,
//! one delivery. Nothing is requested until `load` is called.
//!
//! The loader owns a `CancellationToken` that is cancelled when the loader
//! is dropped. Every in-flight completion holds a clone and discards its
//! result once the token is cancelled, so a discarded loader never calls
//! back into its caller.

use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::{FeedError, LoadResult};
use crate::http::{HttpClient, HttpClientResult, HttpCompletion};
use crate::mapper;

/// Boxed caller completion, used where the loader is a trait object.
pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Something that can load the feed and report the outcome once.
pub trait FeedLoader {
    fn load(&self, completion: LoadCompletion);
}

/// Loads the feed from a fixed URL through an injected `HttpClient`.
pub struct RemoteFeedLoader<C> {
    url: Url,
    client: C,
    alive: CancellationToken,
}

impl<C: HttpClient> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: C) -> Self {
        Self {
            url,
            client,
            alive: CancellationToken::new(),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Issue one GET and deliver the mapped outcome to `completion`.
    ///
    /// `completion` runs on whatever context the transport completes on,
    /// which may be before `load` returns if the transport is synchronous.
    /// It runs exactly once, unless this loader is dropped first, in which
    /// case it never runs.
    pub fn load<F>(&self, completion: F)
    where
        F: FnOnce(LoadResult) + Send + 'static,
    {
        let alive = self.alive.clone();
        tracing::debug!(url = %self.url, "requesting feed");
        self.client.get(
            &self.url,
            HttpCompletion::new(move |result| {
                if alive.is_cancelled() {
                    tracing::debug!("loader dropped before completion, discarding feed result");
                    return;
                }
                completion(into_load_result(result));
            }),
        );
    }

    /// Async form of `load`.
    ///
    /// Borrowing the loader for the whole wait keeps it alive, so a result
    /// is always produced.
    pub async fn fetch(&self) -> LoadResult {
        let (tx, rx) = oneshot::channel();
        self.load(move |result| {
            // The receiver is gone only if the caller stopped waiting.
            let _ = tx.send(result);
        });
        rx.await.unwrap_or(Err(FeedError::Connectivity))
    }
}

impl<C: HttpClient> FeedLoader for RemoteFeedLoader<C> {
    fn load(&self, completion: LoadCompletion) {
        RemoteFeedLoader::load(self, completion);
    }
}

impl<C> Drop for RemoteFeedLoader<C> {
    fn drop(&mut self) {
        self.alive.cancel();
    }
}

impl<C> std::fmt::Debug for RemoteFeedLoader<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteFeedLoader")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

fn into_load_result(result: HttpClientResult) -> LoadResult {
    match result {
        Ok(response) => mapper::map_response(&response),
        Err(e) => {
            tracing::warn!(error = %e, "feed request failed");
            Err(FeedError::from(e))
        }
    }
}
