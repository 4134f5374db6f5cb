//! Mock backend configuration for integration tests.
//!
//! Re-exports the mocks from `poseverify::adapters::mock` and wires a
//! [`MockHttpClient`] up with default answers for every endpoint.

#![allow(dead_code)]

pub use poseverify::adapters::mock::{MockHttpClient, MockResponse, ScriptedConfirmer};

use poseverify::models::Movement;
use serde_json::{json, Value};

/// Base URL used by every mocked backend.
pub const BASE: &str = "http://backend.test";

pub fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

/// URL of the reference listing for one movement.
pub fn references_url(movement: Movement) -> String {
    format!(
        "{}/get_references?movement={}",
        BASE,
        urlencoding::encode(movement.as_str())
    )
}

/// A reference row as the backend lists it.
pub fn reference_json(id: i64, movement: Movement, file: &str) -> Value {
    json!({
        "id": id,
        "movement_type": movement.as_str(),
        "filepath_orig": format!("ref_{}", file),
        "filepath_annotated": format!("annotated_ref_{}", file),
        "timestamp": "2024-05-01 10:00:00"
    })
}

/// A history row as the backend lists it.
pub fn history_json(id: i64, movement: Movement, result: &str, score: f64) -> Value {
    json!({
        "id": id,
        "timestamp": "2024-05-01 10:00:00",
        "movement_type": movement.as_str(),
        "result": result,
        "image_path": format!("upload_{}.jpg", id),
        "ref_path": format!("annotated_ref_{}.jpg", id),
        "score": score
    })
}

/// Builder for a mocked backend.
pub struct MockBackend {
    http: MockHttpClient,
}

impl MockBackend {
    /// Backend with empty collections, an idle status and acknowledged
    /// control calls.
    pub fn new() -> Self {
        let http = MockHttpClient::new();
        http.set_response(&url("/history"), MockResponse::json(json!([])));
        for movement in Movement::ALL {
            http.set_response(&references_url(movement), MockResponse::json(json!([])));
        }
        http.set_response(&url("/set_movement"), MockResponse::json(json!({"success": true})));
        http.set_response(
            &url("/status"),
            MockResponse::json(json!({
                "movement": "Sikap Siap",
                "detected": "None",
                "scores": {},
                "ref_counts": {},
                "status": "Waiting...",
                "progress": 0,
                "verified": false
            })),
        );
        Self { http }
    }

    pub fn with_references(self, movement: Movement, rows: Vec<Value>) -> Self {
        self.http
            .set_response(&references_url(movement), MockResponse::json(Value::Array(rows)));
        self
    }

    pub fn with_history(self, rows: Vec<Value>) -> Self {
        self.http
            .set_response(&url("/history"), MockResponse::json(Value::Array(rows)));
        self
    }

    pub fn with_response(self, path: &str, response: MockResponse) -> Self {
        self.http.set_response(&url(path), response);
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.http
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}
