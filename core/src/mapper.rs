//! Maps a raw HTTP response into feed items.
//!
//! # Design
//! This is the only place that knows the payload shape. It is a pure
//! function of `(status, body)`: no I/O, no shared state, so mapping the same
//! pair twice yields the same result. Decoding is all-or-nothing; one bad
//! item rejects the whole list.
//!
//! Wire format:
//! ```json
//! { "items": [ { "id": "<uuid>", "description": "..", "location": "..", "image": "<uri>" } ] }
//! ```

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use crate::error::FeedError;
use crate::http::HttpResponse;
use crate::types::FeedItem;

/// The only status code accepted as a successful feed response.
pub const OK_200: u16 = 200;

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// Length of the hyphenated UUID form, the only form accepted for `id`.
const HYPHENATED_UUID_LEN: usize = 36;

#[derive(Deserialize)]
struct RemoteFeedItem {
    id: String,
    description: Option<String>,
    location: Option<String>,
    image: String,
}

impl TryFrom<RemoteFeedItem> for FeedItem {
    type Error = FeedError;

    fn try_from(item: RemoteFeedItem) -> Result<Self, Self::Error> {
        let id = parse_id(&item.id)?;
        let image_url = parse_image(&item.image)?;
        Ok(FeedItem::new(id, item.description, item.location, image_url))
    }
}

/// Only the 36-character hyphenated form; simple, braced and URN forms are
/// rejected.
fn parse_id(raw: &str) -> Result<Uuid, FeedError> {
    if raw.len() != HYPHENATED_UUID_LEN {
        tracing::debug!(id = raw, "feed item id is not a hyphenated UUID");
        return Err(FeedError::InvalidData);
    }
    Uuid::parse_str(raw).map_err(|e| {
        tracing::debug!(id = raw, error = %e, "feed item id failed to parse");
        FeedError::InvalidData
    })
}

/// `Url::parse` strips surrounding whitespace and embedded tabs or newlines,
/// so those are rejected before parsing.
fn parse_image(raw: &str) -> Result<Url, FeedError> {
    if raw.chars().any(|c| c.is_whitespace() || c.is_control()) {
        tracing::debug!(image = raw, "feed item image contains whitespace");
        return Err(FeedError::InvalidData);
    }
    Url::parse(raw).map_err(|e| {
        tracing::debug!(image = raw, error = %e, "feed item image is not a URI");
        FeedError::InvalidData
    })
}

/// Turn `(status, body)` into items, or `InvalidData` if either is rejected.
///
/// A non-200 status fails without looking at the body.
pub fn map(status: u16, body: &[u8]) -> Result<Vec<FeedItem>, FeedError> {
    if status != OK_200 {
        tracing::debug!(status, "rejecting feed response with unexpected status");
        return Err(FeedError::InvalidData);
    }
    let root: Root = serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "feed payload failed to decode");
        FeedError::InvalidData
    })?;
    root.items.into_iter().map(FeedItem::try_from).collect()
}

pub fn map_response(response: &HttpResponse) -> Result<Vec<FeedItem>, FeedError> {
    map(response.status, &response.body)
}
