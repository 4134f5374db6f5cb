//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors and records every request it sees.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, MultipartForm, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for JSON POST requests)
    pub body: Option<String>,
    /// Multipart form (for upload requests)
    pub form: Option<MultipartForm>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response with the given status and body
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

impl MockResponse {
    /// 200 response carrying a JSON value.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(200, &value))
    }

    /// Response with an explicit status and JSON value.
    pub fn json_status(status: u16, value: serde_json::Value) -> Self {
        MockResponse::Success(Response::json_body(status, &value))
    }

    /// 200 response with a raw (possibly non-JSON) body.
    pub fn raw(body: &str) -> Self {
        MockResponse::Success(Response::new(200, Bytes::from(body.to_string())))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are looked up by URL: queued one-shot responses first, then an
/// exact match, then the longest configured prefix, then the default.
///
/// # Example
///
/// ```ignore
/// use poseverify::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response("http://mock/history", MockResponse::json(serde_json::json!([])));
///
/// let response = client.get("http://mock/history", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.count_requests("GET", "/history"), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// One-shot responses consumed in order before the configured ones
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            queued: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a URL (exact or prefix match).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a one-shot response for an exact URL.
    pub fn queue_response(&self, url: &str, response: MockResponse) {
        let mut queued = self.queued.lock().unwrap();
        queued
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Recorded requests whose URL contains `fragment`.
    pub fn requests_to(&self, fragment: &str) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.url.contains(fragment))
            .cloned()
            .collect()
    }

    /// Number of requests with `method` whose URL contains `fragment`.
    pub fn count_requests(&self, method: &str, fragment: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.url.contains(fragment))
            .count()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(
        &self,
        method: &str,
        url: &str,
        headers: &Headers,
        body: Option<String>,
        form: Option<MultipartForm>,
    ) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
            form,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        {
            let mut queued = self.queued.lock().unwrap();
            if let Some(response) = queued.get_mut(url).and_then(|q| q.pop_front()) {
                return Some(response);
            }
        }

        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins so overlapping patterns stay deterministic
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    fn respond(&self, url: &str) -> Result<Response, HttpError> {
        match self.get_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!("No mock response for URL: {}", url))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None, None);
        self.respond(url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let body = (!body.is_empty()).then(|| body.to_string());
        self.record_request("POST", url, headers, body, None);
        self.respond(url)
    }

    async fn post_multipart(
        &self,
        url: &str,
        form: MultipartForm,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, None, Some(form));
        self.respond(url)
    }
}
