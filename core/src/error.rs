//! Error types for the feed loader.
//!
//! # Design
//! Callers only need to tell "the exchange never completed" apart from "the
//! exchange completed but the payload broke the contract", so `FeedError`
//! has exactly two variants. Every transport failure, whatever its cause,
//! collapses into `Connectivity`; every status or payload failure collapses
//! into `InvalidData`. The richer `TransportError` stays on the transport
//! side of the boundary and is only logged.

use thiserror::Error;

use crate::types::FeedItem;

/// The public error taxonomy of a load operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FeedError {
    /// The transport failed to complete the HTTP exchange.
    #[error("connectivity error")]
    Connectivity,

    /// The exchange completed but the status or payload was rejected.
    #[error("invalid data")]
    InvalidData,
}

/// Outcome of a single load, delivered exactly once.
pub type LoadResult = Result<Vec<FeedItem>, FeedError>;

/// Failures reported by an `HttpClient` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request could not be sent or the response could not be read.
    #[error("request failed: {0}")]
    Request(String),

    /// The transport released the completion handle without completing it.
    #[error("completion abandoned by transport")]
    Abandoned,
}

impl From<TransportError> for FeedError {
    fn from(_: TransportError) -> Self {
        FeedError::Connectivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_transport_error_maps_to_connectivity() {
        let errors = [
            TransportError::Request("connection reset".to_string()),
            TransportError::Abandoned,
        ];
        for err in errors {
            assert_eq!(FeedError::from(err), FeedError::Connectivity);
        }
    }
}
