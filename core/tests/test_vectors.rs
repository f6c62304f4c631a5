//! Verify the response mapper against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each case gives a status code, a raw body and either the expected items
//! (in `FeedItem`'s serde form) or the expected error kind. Every case is
//! mapped twice to check that mapping is repeatable.

use feed_core::mapper;
use feed_core::{FeedError, FeedItem};

fn parse_error(name: &str, s: &str) -> FeedError {
    match s {
        "Connectivity" => FeedError::Connectivity,
        "InvalidData" => FeedError::InvalidData,
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

#[test]
fn feed_test_vectors() {
    let raw = include_str!("../../test-vectors/feed.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let status = case["status"].as_u64().unwrap() as u16;
        let body = case["body"].as_str().unwrap().as_bytes();

        let result = mapper::map(status, body);
        assert_eq!(result, mapper::map(status, body), "{name}: repeatable");

        if let Some(expected_error) = case.get("expected_error") {
            let expected = parse_error(name, expected_error.as_str().unwrap());
            assert_eq!(result, Err(expected), "{name}: error");
        } else {
            let expected: Vec<FeedItem> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result, Ok(expected), "{name}: parsed result");
        }
    }
}
