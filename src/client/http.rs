//! Request lifecycle: URL building, query serialization, status
//! classification and the bounded rate-limit retry loop.

use std::time::Duration;

use reqwest::header::{ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::TonApiClient;
use crate::error::{Result, TonApiError};

/// Fixed backoff between rate-limited attempts. Deliberately flat; callers
/// needing smarter backpressure layer it on top.
pub(crate) const RETRY_BACKOFF: Duration = Duration::from_secs(1);

// ============================================================================
// Query serialization
// ============================================================================

/// Query-string builder.
///
/// Booleans are lowercased to `"true"`/`"false"` and list-valued parameters
/// are comma-joined, matching what the API expects.
#[derive(Debug, Default, Clone)]
pub(crate) struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter.
    pub(crate) fn pair(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Adds a boolean parameter as `"true"`/`"false"`.
    pub(crate) fn flag(self, key: &str, value: bool) -> Self {
        self.pair(key, if value { "true" } else { "false" })
    }

    /// Adds a parameter only when a value is present.
    pub(crate) fn opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.pair(key, value),
            None => self,
        }
    }

    /// Adds a comma-joined list parameter.
    pub(crate) fn list<S: AsRef<str>>(self, key: &str, values: &[S]) -> Self {
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        self.pair(key, joined)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

// ============================================================================
// Classification
// ============================================================================

/// Maps a non-200 HTTP status to the error taxonomy.
///
/// 403 is folded into the internal-error class, as is the rest of the 5xx
/// family apart from 501. Anything unrecognized keeps its raw status.
pub(crate) fn classify_status(status: u16, message: String) -> TonApiError {
    match status {
        400 => TonApiError::BadRequest(message),
        401 => TonApiError::Unauthorized,
        404 => TonApiError::NotFound(message),
        429 => TonApiError::RateLimited(message),
        501 => TonApiError::NotImplemented(message),
        403 | 500..=599 => TonApiError::InternalServerError(message),
        other => TonApiError::Unclassified {
            status: other,
            message,
        },
    }
}

/// Parses a response body, wrapping a non-JSON body instead of failing.
///
/// Some endpoints answer 200 with an empty or plain-text body; those come
/// back as `{"error": <raw text>}` so the caller still gets a value.
pub(crate) fn read_payload(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| serde_json::json!({ "error": body }))
}

/// Extracts the server-supplied error text from a response body.
///
/// Bodies are read defensively: a JSON object with an `error` field yields
/// that field, any other JSON yields itself, and a non-JSON body is used
/// verbatim rather than failing the parse.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => match value.get("error") {
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
            None => value.to_string(),
        },
        Err(_) => body.to_string(),
    }
}

// ============================================================================
// Retry loop
// ============================================================================

/// Runs `operation` up to `max_attempts` times, sleeping [`RETRY_BACKOFF`]
/// between attempts. Only the rate-limit classification is retried; every
/// other outcome, success or failure, is returned from the first attempt
/// that produced it.
pub(crate) async fn with_retries<T, F, Fut>(max_attempts: u32, mut operation: F) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt = 0;
    loop {
        attempt += 1;
        match operation(attempt).await {
            Err(TonApiError::RateLimited(message)) if attempt < max_attempts => {
                tracing::warn!(attempt, max_attempts, %message, "rate limited, backing off");
                tokio::time::sleep(RETRY_BACKOFF).await;
            }
            other => return other,
        }
    }
}

// ============================================================================
// Request lifecycle
// ============================================================================

impl TonApiClient {
    /// Issues one HTTP request (plus bounded rate-limit retries) and returns
    /// the parsed JSON payload.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
        headers: Option<&HeaderMap>,
    ) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);

        with_retries(self.max_attempts, |attempt| {
            let mut builder = self
                .http
                .request(method.clone(), &url)
                .headers(self.default_headers.clone())
                .timeout(self.timeout);
            if let Some(headers) = headers {
                // Per-call overrides are merged locally, never into the
                // shared defaults.
                builder = builder.headers(headers.clone());
            }
            if !query.is_empty() {
                builder = builder.query(query.pairs());
            }
            if let Some(body) = body {
                builder = builder.json(body);
            }
            tracing::debug!(%method, %url, attempt, "sending request");

            async move {
                let response = builder.send().await?;
                process_response(response).await
            }
        })
        .await
    }

    /// GET returning a typed payload.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T> {
        let value = self.request(Method::GET, path, query, None, None).await?;
        decode(value)
    }

    /// GET with an `Accept-Language` override, returning a typed payload.
    pub(crate) async fn get_json_localized<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        accept_language: &str,
    ) -> Result<T> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(accept_language)
            .map_err(|_| TonApiError::invalid_input("invalid Accept-Language value"))?;
        headers.insert(ACCEPT_LANGUAGE, value);
        let value = self
            .request(Method::GET, path, query, None, Some(&headers))
            .await?;
        decode(value)
    }

    /// POST returning a typed payload.
    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        let value = self
            .request(Method::POST, path, &Query::new(), body, None)
            .await?;
        decode(value)
    }
}

/// Classifies a response and parses the success payload.
async fn process_response(response: Response) -> Result<Value> {
    let status = response.status();
    let body = response.text().await?;

    if status == StatusCode::OK {
        return Ok(read_payload(&body));
    }

    let message = error_message(&body);
    tracing::debug!(status = status.as_u16(), %message, "error response received");
    Err(classify_status(status.as_u16(), message))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| TonApiError::parse(e.to_string()))
}
