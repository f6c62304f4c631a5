//! Remote feed loading core.
//!
//! # Overview
//! Fetches a JSON list of feed items over HTTP, validates the transport
//! outcome and the payload, and delivers a typed `LoadResult` exactly once.
//!
//! # Design
//! - `HttpClient` is the transport capability: one GET, one completion. The
//!   concrete network stack is injected, so tests substitute an in-memory
//!   spy and `UreqHttpClient` is just one implementation.
//! - `mapper::map` is a pure function of `(status, body)` and the only
//!   place that knows the payload shape.
//! - `RemoteFeedLoader` wires the two together and owns the two-variant
//!   `FeedError` taxonomy: `Connectivity` and `InvalidData`.
//! - Domain types are defined independently from the mock-server crate;
//!   integration tests catch schema drift.

pub mod error;
pub mod http;
pub mod loader;
pub mod mapper;
pub mod types;
pub mod ureq_client;

pub use error::{FeedError, LoadResult, TransportError};
pub use http::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};
pub use loader::{FeedLoader, LoadCompletion, RemoteFeedLoader};
pub use types::FeedItem;
pub use ureq_client::{UreqClientConfig, UreqHttpClient};
