//! Streaming subscriptions: SSE and WebSocket.
//!
//! Both primitives deliver server-pushed payloads to an async handler, in
//! server order, until the connection ends. Neither reconnects: a dropped
//! connection simply ends the subscription, and it is the caller's job to
//! resubscribe. Dropping the future (breaking out of the consuming call)
//! closes the underlying connection.

use futures_util::{SinkExt, StreamExt};
use reqwest::StatusCode;
use serde_json::{Value, json};
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

use super::TonApiClient;
use super::http::{Query, classify_status, error_message};
use crate::error::{Result, TonApiError};
use crate::models::{BlockEventData, MempoolEventData, TraceEventData, TransactionEventData};

// ============================================================================
// SSE framing
// ============================================================================

/// Reassembles SSE lines from arbitrary chunk boundaries.
#[derive(Debug, Default)]
pub(crate) struct SseLineBuffer {
    pending: Vec<u8>,
}

impl SseLineBuffer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk and returns every line completed by it.
    pub(crate) fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(newline) = self.pending.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.pending.drain(..=newline).collect();
            lines.push(String::from_utf8_lossy(&line).trim().to_string());
        }
        lines
    }
}

/// Parses one SSE line, returning the payload to deliver, if any.
///
/// Lines that do not split on `": "` are skipped, heartbeat values are
/// liveness pings and discarded, and only `data` keys carry payloads.
pub(crate) fn parse_sse_line(line: &str) -> Option<&str> {
    let (key, value) = line.split_once(": ")?;
    if value == "heartbeat" {
        return None;
    }
    (key == "data").then_some(value)
}

// ============================================================================
// WebSocket framing
// ============================================================================

/// Classifies one inbound WebSocket JSON envelope.
///
/// `{params}` carries an event to deliver; `{result}` acknowledges the
/// subscription and must start with `"success"`; anything else is a protocol
/// violation.
pub(crate) fn handle_ws_message(message: &Value) -> Result<Option<Value>> {
    if let Some(params) = message.get("params") {
        return Ok(Some(params.clone()));
    }
    if let Some(result) = message.get("result") {
        if result.as_str().is_some_and(|text| text.starts_with("success")) {
            return Ok(None);
        }
        return Err(TonApiError::stream(format!(
            "subscription rejected: {result}"
        )));
    }
    Err(TonApiError::stream(format!(
        "unexpected websocket message: {message}"
    )))
}

// ============================================================================
// Subscription primitives
// ============================================================================

impl TonApiClient {
    /// Subscribes to an SSE endpoint and delivers each `data` payload to
    /// `handler` until the server closes the stream or the handler fails.
    ///
    /// # Errors
    ///
    /// Returns the classified error for a non-200 response, and
    /// [`TonApiError::Stream`] for failures while reading or decoding the
    /// stream.
    pub async fn subscribe<F, Fut>(&self, method: &str, query: &Query, mut handler: F) -> Result<()>
    where
        F: FnMut(Value) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let url = format!("{}{}", self.base_url, method);
        tracing::debug!(%url, "subscribing to SSE stream");

        let mut builder = self
            .http
            .get(&url)
            .headers(self.default_headers.clone());
        if !query.is_empty() {
            builder = builder.query(query.pairs());
        }
        let response = builder.send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_status(status.as_u16(), error_message(&body)));
        }

        let mut chunks = response.bytes_stream();
        let mut lines = SseLineBuffer::new();

        while let Some(chunk) = chunks.next().await {
            let chunk = chunk.map_err(|e| TonApiError::stream(e.to_string()))?;
            for line in lines.push(&chunk) {
                let Some(payload) = parse_sse_line(&line) else {
                    tracing::debug!(%line, "skipped SSE line");
                    continue;
                };
                let event: Value = serde_json::from_str(payload)
                    .map_err(|e| TonApiError::stream(format!("malformed SSE payload: {e}")))?;
                handler(event).await?;
            }
        }

        tracing::debug!(%url, "SSE stream ended");
        Ok(())
    }

    /// Opens the WebSocket endpoint, sends one JSON-RPC subscribe request and
    /// delivers each event's `params` to `handler` until the server closes
    /// the socket or the handler fails.
    ///
    /// # Errors
    ///
    /// Returns [`TonApiError::Stream`] for connection failures, protocol
    /// violations and rejected subscriptions.
    pub async fn subscribe_websocket<F, Fut>(
        &self,
        method: &str,
        params: Value,
        mut handler: F,
    ) -> Result<()>
    where
        F: FnMut(Value) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let request = json!({
            "id": 1,
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
        });
        tracing::debug!(url = %self.websocket_url, %method, "subscribing over websocket");

        let (mut socket, _) = connect_async(self.websocket_url.as_str())
            .await
            .map_err(|e| TonApiError::stream(format!("websocket connect failed: {e}")))?;
        socket
            .send(Message::text(request.to_string()))
            .await
            .map_err(|e| TonApiError::stream(format!("websocket send failed: {e}")))?;

        while let Some(message) = socket.next().await {
            let message = message.map_err(|e| TonApiError::stream(e.to_string()))?;
            match message {
                Message::Text(text) => {
                    let envelope: Value = serde_json::from_str(&text).map_err(|e| {
                        TonApiError::stream(format!("malformed websocket message: {e}"))
                    })?;
                    if let Some(event) = handle_ws_message(&envelope)? {
                        handler(event).await?;
                    }
                }
                Message::Close(_) => {
                    tracing::debug!("websocket closed by server");
                    break;
                }
                Message::Ping(_) | Message::Pong(_) => {}
                other => {
                    return Err(TonApiError::stream(format!(
                        "unexpected websocket frame: {other:?}"
                    )));
                }
            }
        }

        Ok(())
    }
}

// ============================================================================
// Typed subscriptions
// ============================================================================

impl TonApiClient {
    /// Subscribes to transaction SSE events for the given accounts.
    pub async fn subscribe_to_transactions<F, Fut>(
        &self,
        accounts: &[&str],
        mut handler: F,
    ) -> Result<()>
    where
        F: FnMut(TransactionEventData) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let query = Query::new().list("accounts", accounts);
        self.subscribe("v2/sse/accounts/transactions", &query, |event| {
            let pending = decode_event::<TransactionEventData>(event).map(&mut handler);
            async move { pending?.await }
        })
        .await
    }

    /// Subscribes to trace SSE events for the given accounts.
    pub async fn subscribe_to_traces<F, Fut>(&self, accounts: &[&str], mut handler: F) -> Result<()>
    where
        F: FnMut(TraceEventData) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let query = Query::new().list("accounts", accounts);
        self.subscribe("v2/sse/accounts/traces", &query, |event| {
            let pending = decode_event::<TraceEventData>(event).map(&mut handler);
            async move { pending?.await }
        })
        .await
    }

    /// Subscribes to mempool SSE events for the given accounts.
    pub async fn subscribe_to_mempool<F, Fut>(&self, accounts: &[&str], mut handler: F) -> Result<()>
    where
        F: FnMut(MempoolEventData) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let query = Query::new().list("accounts", accounts);
        self.subscribe("v2/sse/mempool", &query, |event| {
            let pending = decode_event::<MempoolEventData>(event).map(&mut handler);
            async move { pending?.await }
        })
        .await
    }

    /// Subscribes to new-block SSE events, optionally filtered to one
    /// workchain.
    pub async fn subscribe_to_blocks<F, Fut>(
        &self,
        workchain: Option<i32>,
        mut handler: F,
    ) -> Result<()>
    where
        F: FnMut(BlockEventData) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        let query = Query::new().opt("workchain", workchain);
        self.subscribe("v2/sse/blocks", &query, |event| {
            let pending = decode_event::<BlockEventData>(event).map(&mut handler);
            async move { pending?.await }
        })
        .await
    }

    /// Subscribes to transaction WebSocket events for the given accounts.
    pub async fn subscribe_to_transactions_ws<F, Fut>(
        &self,
        accounts: &[&str],
        mut handler: F,
    ) -> Result<()>
    where
        F: FnMut(TransactionEventData) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        self.subscribe_websocket("subscribe_account", json!(accounts), |event| {
            let pending = decode_event::<TransactionEventData>(event).map(&mut handler);
            async move { pending?.await }
        })
        .await
    }

    /// Subscribes to trace WebSocket events for the given accounts.
    pub async fn subscribe_to_traces_ws<F, Fut>(
        &self,
        accounts: &[&str],
        mut handler: F,
    ) -> Result<()>
    where
        F: FnMut(TraceEventData) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        self.subscribe_websocket("subscribe_trace", json!(accounts), |event| {
            let pending = decode_event::<TraceEventData>(event).map(&mut handler);
            async move { pending?.await }
        })
        .await
    }

    /// Subscribes to mempool WebSocket events for the given accounts.
    pub async fn subscribe_to_mempool_ws<F, Fut>(
        &self,
        accounts: &[&str],
        mut handler: F,
    ) -> Result<()>
    where
        F: FnMut(MempoolEventData) -> Fut,
        Fut: Future<Output = Result<()>>,
    {
        self.subscribe_websocket("mempool_message", json!(accounts), |event| {
            let pending = decode_event::<MempoolEventData>(event).map(&mut handler);
            async move { pending?.await }
        })
        .await
    }
}

fn decode_event<T: serde::de::DeserializeOwned>(event: Value) -> Result<T> {
    serde_json::from_value(event).map_err(|e| TonApiError::stream(format!("malformed event: {e}")))
}
