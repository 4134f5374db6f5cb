//! Backend gateway: typed wrapper around every pose backend endpoint.
//!
//! Each method performs exactly one HTTP call through the injected
//! [`HttpClient`] and never retries. Control calls send JSON, uploads send
//! multipart forms; responses are decoded into the models in [`crate::models`].

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::{GatewayError, GatewayResult};
use crate::models::{
    HistoryItem, IdRequest, Movement, MutationAck, RecordId, Reference, SetMovementRequest,
    StagedFile, StatusSnapshot, VerifyOutcome, VerifyPayload,
};
use crate::traits::{Headers, HttpClient, MultipartForm, Response};

/// Default backend address (the Flask server's default port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const SET_MOVEMENT: &str = "/set_movement";
const GET_REFERENCES: &str = "/get_references";
const DELETE_REFERENCE: &str = "/delete_reference";
const UPLOAD_REFERENCES: &str = "/upload_references";
const VERIFY_INSTANT: &str = "/verify_instant";
const VERIFY_IMAGE: &str = "/verify_image";
const HISTORY: &str = "/history";
const DELETE_HISTORY_ITEM: &str = "/delete_history_item";
const CLEAR_HISTORY: &str = "/clear_history";
const STATUS: &str = "/status";

/// Client for the pose verification backend.
///
/// Cheap to clone; clones share the underlying HTTP client.
#[derive(Clone)]
pub struct BackendGateway {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl BackendGateway {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> GatewayResult<Response> {
        let body = serde_json::to_string(body).map_err(|e| GatewayError::decode(endpoint, e))?;
        let response = self
            .http
            .post(&self.url(endpoint), &body, &json_headers())
            .await?;
        Ok(response)
    }

    async fn post_empty(&self, endpoint: &str) -> GatewayResult<Response> {
        Ok(self
            .http
            .post(&self.url(endpoint), "", &Headers::new())
            .await?)
    }

    /// Tell the backend which movement live verification targets.
    ///
    /// The response body is ignored; only a transport failure is reported.
    pub async fn set_movement(&self, movement: Movement) -> GatewayResult<()> {
        let response = self
            .post_json(SET_MOVEMENT, &SetMovementRequest { movement })
            .await?;
        debug!(status = response.status, movement = %movement, "set_movement acknowledged");
        Ok(())
    }

    /// List every reference stored for `movement`.
    pub async fn get_references(&self, movement: Movement) -> GatewayResult<Vec<Reference>> {
        let url = format!(
            "{}?movement={}",
            self.url(GET_REFERENCES),
            urlencoding::encode(movement.as_str())
        );
        let response = self.http.get(&url, &Headers::new()).await?;
        decode(GET_REFERENCES, &response)
    }

    pub async fn delete_reference(&self, id: RecordId) -> GatewayResult<()> {
        let response = self.post_json(DELETE_REFERENCE, &IdRequest { id }).await?;
        let ack: MutationAck = decode(DELETE_REFERENCE, &response)?;
        require_success(DELETE_REFERENCE, ack).map(|_| ())
    }

    /// Upload a batch of reference images; returns how many were stored.
    pub async fn upload_references(
        &self,
        movement: Movement,
        files: &[StagedFile],
    ) -> GatewayResult<u64> {
        let form = files.iter().fold(
            MultipartForm::new().text("movement", movement.as_str()),
            |form, file| {
                form.file(
                    "files",
                    file.file_name.clone(),
                    file.content_type.clone(),
                    file.data.clone(),
                )
            },
        );
        let response = self
            .http
            .post_multipart(&self.url(UPLOAD_REFERENCES), form, &Headers::new())
            .await?;
        let ack: MutationAck = decode(UPLOAD_REFERENCES, &response)?;
        let ack = require_success(UPLOAD_REFERENCES, ack)?;
        Ok(ack.count.unwrap_or(files.len() as u64))
    }

    /// Verify the backend's current camera frame.
    pub async fn verify_instant(&self) -> GatewayResult<VerifyOutcome> {
        let response = self.post_empty(VERIFY_INSTANT).await?;
        decode_verify(VERIFY_INSTANT, &response)
    }

    /// Verify an uploaded image against `movement`.
    pub async fn verify_image(
        &self,
        file: &StagedFile,
        movement: Movement,
    ) -> GatewayResult<VerifyOutcome> {
        let form = MultipartForm::new()
            .file(
                "file",
                file.file_name.clone(),
                file.content_type.clone(),
                file.data.clone(),
            )
            .text("movement", movement.as_str());
        let response = self
            .http
            .post_multipart(&self.url(VERIFY_IMAGE), form, &Headers::new())
            .await?;
        decode_verify(VERIFY_IMAGE, &response)
    }

    /// Full verification history, in server order.
    pub async fn history(&self) -> GatewayResult<Vec<HistoryItem>> {
        let response = self.http.get(&self.url(HISTORY), &Headers::new()).await?;
        decode(HISTORY, &response)
    }

    /// Delete one history record. Any response from the backend counts as done.
    pub async fn delete_history_item(&self, id: RecordId) -> GatewayResult<()> {
        let response = self.post_json(DELETE_HISTORY_ITEM, &IdRequest { id }).await?;
        debug!(status = response.status, id = %id, "delete_history_item answered");
        Ok(())
    }

    /// Delete every history record. Any response from the backend counts as done.
    pub async fn clear_history(&self) -> GatewayResult<()> {
        let response = self.post_empty(CLEAR_HISTORY).await?;
        debug!(status = response.status, "clear_history answered");
        Ok(())
    }

    /// Current live detection status.
    pub async fn status(&self) -> GatewayResult<StatusSnapshot> {
        let response = self.http.get(&self.url(STATUS), &Headers::new()).await?;
        decode(STATUS, &response)
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

/// Decode a JSON body, turning error statuses into gateway errors.
///
/// A non-2xx response carrying `{"error": "..."}` is an application failure;
/// one without a readable error is a transport failure.
fn decode<T: DeserializeOwned>(endpoint: &str, response: &Response) -> GatewayResult<T> {
    if !response.is_success() {
        return Err(status_error(endpoint, response));
    }
    response
        .json()
        .map_err(|e| GatewayError::decode(endpoint, e))
}

fn status_error(endpoint: &str, response: &Response) -> GatewayError {
    let ack: Option<MutationAck> = response.json().ok();
    match ack.and_then(|a| a.error) {
        Some(message) => GatewayError::application(endpoint, message),
        None => GatewayError::Transport(crate::traits::HttpError::ServerError {
            status: response.status,
            message: response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string()),
        }),
    }
}

fn require_success(endpoint: &str, ack: MutationAck) -> GatewayResult<MutationAck> {
    if ack.success {
        Ok(ack)
    } else {
        Err(GatewayError::application(
            endpoint,
            ack.error.unwrap_or_else(|| "Failed".to_string()),
        ))
    }
}

fn decode_verify(endpoint: &str, response: &Response) -> GatewayResult<VerifyOutcome> {
    let payload: VerifyPayload = decode(endpoint, response)?;
    payload
        .into_outcome()
        .map_err(|message| GatewayError::application(endpoint, message))
}
