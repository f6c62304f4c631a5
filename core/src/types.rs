//! Domain model for the feed.
//!
//! # Design
//! `FeedItem` is the value handed to callers once a load succeeds. It is
//! defined independently from the wire DTOs in `mapper` (which mirror the
//! JSON keys) and from the mock-server's schema; integration tests catch any
//! drift between the two.

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// A single entry in the feed.
///
/// Equality is structural: two items are equal when every field matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image_url,
        }
    }
}
