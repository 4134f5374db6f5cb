//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of the [`HttpClient`] trait.

use async_trait::async_trait;
use std::time::Duration;

use crate::traits::{FormPart, Headers, HttpClient, HttpError, MultipartForm, Response};

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use poseverify::adapters::ReqwestHttpClient;
/// use poseverify::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::with_timeout(Duration::from_secs(30))?;
/// let response = client.get("http://localhost:5000/status", &Headers::new()).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings (no timeout).
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(Self::convert_error)?;
        Ok(Self { client })
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }

    /// Build a reqwest multipart form from the transport-agnostic one.
    fn convert_form(form: MultipartForm) -> Result<reqwest::multipart::Form, HttpError> {
        let mut out = reqwest::multipart::Form::new();
        for part in form.into_parts() {
            out = match part {
                FormPart::Text { name, value } => out.text(name, value),
                FormPart::File {
                    name,
                    file_name,
                    content_type,
                    data,
                } => {
                    let part = reqwest::multipart::Part::bytes(data.to_vec())
                        .file_name(file_name)
                        .mime_str(&content_type)
                        .map_err(|e| HttpError::Other(e.to_string()))?;
                    out.part(name, part)
                }
            };
        }
        Ok(out)
    }

    async fn send(builder: reqwest::RequestBuilder) -> Result<Response, HttpError> {
        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = Self::apply_headers(self.client.get(url), headers);
        Self::send(builder).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        let mut builder = self.client.post(url);
        if !body.is_empty() {
            builder = builder.body(body.to_string());
        }
        let builder = Self::apply_headers(builder, headers);
        Self::send(builder).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        form: MultipartForm,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let form = Self::convert_form(form)?;
        let builder = Self::apply_headers(self.client.post(url).multipart(form), headers);
        Self::send(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_reqwest_http_client_with_timeout() {
        assert!(ReqwestHttpClient::with_timeout(Duration::from_secs(30)).is_ok());
    }

    #[test]
    fn test_convert_headers() {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().unwrap(),
        );

        let headers = ReqwestHttpClient::convert_headers(&header_map);
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_convert_form_accepts_image_parts() {
        let form = MultipartForm::new()
            .text("movement", "Sikap Siap")
            .file("file", "pose.jpg", "image/jpeg", Bytes::from_static(b"jpeg"));
        assert!(ReqwestHttpClient::convert_form(form).is_ok());
    }

    #[test]
    fn test_convert_form_rejects_bad_mime() {
        let form = MultipartForm::new().file("file", "pose.jpg", "not a mime", Bytes::new());
        assert!(ReqwestHttpClient::convert_form(form).is_err());
    }

    #[tokio::test]
    async fn test_get_invalid_url() {
        let client = ReqwestHttpClient::new();
        let result = client.get("not-a-valid-url", &Headers::new()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_post_connection_refused() {
        let client = ReqwestHttpClient::new();
        let result = client
            .post("http://127.0.0.1:59999/set_movement", "{}", &Headers::new())
            .await;
        assert!(matches!(
            result,
            Err(HttpError::ConnectionFailed(_)) | Err(HttpError::Other(_))
        ));
    }
}
