//! Feed fixture server for end-to-end tests.
//!
//! Serves a feed payload at `/feed`, plus a couple of deliberately broken
//! endpoints so clients can be exercised against real HTTP failures.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub image: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FeedPayload {
    pub items: Vec<FeedItem>,
}

pub type Feed = Arc<FeedPayload>;

/// The eight-item feed of the shared test account.
pub fn fixture_items() -> Vec<FeedItem> {
    const IDS: [u128; 8] = [
        0x73A7F70C_75DA_4C2E_B5A3_EED40DC53AA6,
        0xBA298A85_6275_48D3_8315_9C8F7C1CD109,
        0x5A0D45B3_8E26_4385_8C5D_213E160A5E3C,
        0xFF0ECFE2_2879_403F_8DBE_A83B4010B340,
        0xDC97EF5E_2CC9_4905_A8AD_3C351C311001,
        0x557D87F1_25D3_4D77_82E9_364B2ED9CB30,
        0xA83284EF_C2DF_415D_AB73_2A9B8B04950B,
        0xF79BD7F8_063F_46E2_8147_A67635C3BB01,
    ];
    IDS.iter()
        .enumerate()
        .map(|(i, id)| {
            let n = i + 1;
            FeedItem {
                id: Uuid::from_u128(*id),
                description: (![2, 4].contains(&n)).then(|| format!("Description {n}")),
                location: (![3, 4].contains(&n)).then(|| format!("Location {n}")),
                image: format!("https://url-{n}.com"),
            }
        })
        .collect()
}

pub fn app() -> Router {
    app_with(fixture_items())
}

pub fn app_with(items: Vec<FeedItem>) -> Router {
    let feed: Feed = Arc::new(FeedPayload { items });
    Router::new()
        .route("/feed", get(get_feed))
        .route("/status/{code}", get(get_with_status))
        .route("/malformed", get(get_malformed))
        .layer(TraceLayer::new_for_http())
        .with_state(feed)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_feed(State(feed): State<Feed>) -> Json<FeedPayload> {
    Json(feed.as_ref().clone())
}

/// Answers with `code` and a well-formed empty feed.
async fn get_with_status(Path(code): Path<u16>) -> impl IntoResponse {
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(FeedPayload::default()))
}

async fn get_malformed() -> &'static str {
    "not json"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_has_eight_items_in_order() {
        let items = fixture_items();
        assert_eq!(items.len(), 8);
        assert_eq!(
            items[0].id.to_string(),
            "73a7f70c-75da-4c2e-b5a3-eed40dc53aa6"
        );
        assert_eq!(items[7].image, "https://url-8.com");
    }

    #[test]
    fn fixture_ids_match_test_account() {
        let ids: Vec<String> = fixture_items()
            .iter()
            .map(|item| item.id.hyphenated().to_string().to_uppercase())
            .collect();
        assert_eq!(
            ids,
            [
                "73A7F70C-75DA-4C2E-B5A3-EED40DC53AA6",
                "BA298A85-6275-48D3-8315-9C8F7C1CD109",
                "5A0D45B3-8E26-4385-8C5D-213E160A5E3C",
                "FF0ECFE2-2879-403F-8DBE-A83B4010B340",
                "DC97EF5E-2CC9-4905-A8AD-3C351C311001",
                "557D87F1-25D3-4D77-82E9-364B2ED9CB30",
                "A83284EF-C2DF-415D-AB73-2A9B8B04950B",
                "F79BD7F8-063F-46E2-8147-A67635C3BB01",
            ]
        );
    }

    #[test]
    fn fixture_optional_fields_match_test_account() {
        let items = fixture_items();
        assert_eq!(items[0].description.as_deref(), Some("Description 1"));
        assert_eq!(items[0].location.as_deref(), Some("Location 1"));
        assert!(items[1].description.is_none());
        assert_eq!(items[1].location.as_deref(), Some("Location 2"));
        assert_eq!(items[2].description.as_deref(), Some("Description 3"));
        assert!(items[2].location.is_none());
        assert!(items[3].description.is_none());
        assert!(items[3].location.is_none());
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let item = FeedItem {
            id: Uuid::nil(),
            description: None,
            location: None,
            image: "https://a-url.com".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["image"], "https://a-url.com");
        assert!(json.get("description").is_none());
        assert!(json.get("location").is_none());
    }

    #[test]
    fn payload_requires_items() {
        let result: Result<FeedPayload, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
