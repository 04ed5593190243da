use std::cell::Cell;
use std::time::Duration;

use rstest::rstest;
use serde_json::json;

use super::http::{Query, RETRY_BACKOFF, classify_status, error_message, read_payload, with_retries};
use super::stream::{SseLineBuffer, handle_ws_message, parse_sse_line};
use super::{DEFAULT_TIMEOUT_SECS, TonApiClient};
use crate::error::TonApiError;
use crate::network::Network;

// ========================================================================
// Status classification
// ========================================================================

#[rstest]
#[case::bad_request(400, "bad")]
#[case::unauthorized(401, "denied")]
#[case::forbidden(403, "forbidden")]
#[case::not_found(404, "missing")]
#[case::rate_limited(429, "slow down")]
#[case::internal(500, "boom")]
#[case::not_implemented(501, "todo")]
#[case::bad_gateway(502, "proxy")]
#[case::teapot(418, "teapot")]
fn test_classify_status(#[case] status: u16, #[case] message: &str) {
    let error = classify_status(status, message.to_string());
    match status {
        400 => assert!(matches!(error, TonApiError::BadRequest(_))),
        401 => assert!(matches!(error, TonApiError::Unauthorized)),
        404 => assert!(matches!(error, TonApiError::NotFound(_))),
        429 => assert!(matches!(error, TonApiError::RateLimited(_))),
        501 => assert!(matches!(error, TonApiError::NotImplemented(_))),
        // 403 is folded into the internal-error class, like the 5xx family.
        403 | 500 | 502 => assert!(matches!(error, TonApiError::InternalServerError(_))),
        _ => assert!(matches!(
            error,
            TonApiError::Unclassified { status: 418, .. }
        )),
    }
}

#[test]
fn test_error_message_extraction() {
    assert_eq!(error_message(r#"{"error": "no such method"}"#), "no such method");
    assert_eq!(error_message(r#"{"error": {"code": 7}}"#), r#"{"code":7}"#);
    assert_eq!(error_message(r#"{"detail": "x"}"#), r#"{"detail":"x"}"#);
    // Non-JSON bodies are carried verbatim instead of failing the parse.
    assert_eq!(error_message("<html>502</html>"), "<html>502</html>");
}

#[test]
fn test_success_body_read_defensively() {
    assert_eq!(read_payload(r#"{"ok": 1}"#), json!({"ok": 1}));
    // Endpoints like account reindexing answer 200 with an empty body;
    // non-JSON success bodies are wrapped instead of failing the parse.
    assert_eq!(read_payload(""), json!({"error": ""}));
    assert_eq!(read_payload("OK"), json!({"error": "OK"}));
}

// ========================================================================
// Query serialization
// ========================================================================

#[test]
fn test_query_booleans_lowercased() {
    let query = Query::new().flag("subject_only", true).flag("verified", false);
    assert_eq!(
        query.pairs(),
        &[
            ("subject_only".to_string(), "true".to_string()),
            ("verified".to_string(), "false".to_string()),
        ]
    );
}

#[test]
fn test_query_lists_comma_joined() {
    let query = Query::new().list("accounts", &["0:aa", "0:bb", "0:cc"]);
    assert_eq!(
        query.pairs(),
        &[("accounts".to_string(), "0:aa,0:bb,0:cc".to_string())]
    );
}

#[test]
fn test_query_optional_parameters() {
    let query = Query::new()
        .pair("limit", 100)
        .opt("before_lt", None::<u64>)
        .opt("period", Some(30));
    assert_eq!(
        query.pairs(),
        &[
            ("limit".to_string(), "100".to_string()),
            ("period".to_string(), "30".to_string()),
        ]
    );
    assert!(!query.is_empty());
    assert!(Query::new().is_empty());
}

// ========================================================================
// Retry loop
// ========================================================================

#[tokio::test(start_paused = true)]
async fn test_retry_bound_on_rate_limit() {
    let calls = Cell::new(0u32);
    let started = tokio::time::Instant::now();

    let result: crate::error::Result<()> = with_retries(3, |_attempt| {
        calls.set(calls.get() + 1);
        async { Err(TonApiError::RateLimited("too many requests".to_string())) }
    })
    .await;

    assert_eq!(calls.get(), 3);
    assert!(matches!(result, Err(TonApiError::RateLimited(_))));
    // Two backoffs between three attempts, none after the last.
    assert_eq!(started.elapsed(), RETRY_BACKOFF * 2);
}

#[tokio::test(start_paused = true)]
async fn test_non_retryable_errors_fail_fast() {
    let calls = Cell::new(0u32);
    let started = tokio::time::Instant::now();

    let result: crate::error::Result<()> = with_retries(5, |_attempt| {
        calls.set(calls.get() + 1);
        async { Err(TonApiError::NotFound("no such method".to_string())) }
    })
    .await;

    assert_eq!(calls.get(), 1);
    assert!(matches!(result, Err(TonApiError::NotFound(_))));
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_retry_recovers_after_backoff() {
    let calls = Cell::new(0u32);

    let result = with_retries(3, |attempt| {
        calls.set(calls.get() + 1);
        async move {
            if attempt < 2 {
                Err(TonApiError::RateLimited("slow down".to_string()))
            } else {
                Ok(42)
            }
        }
    })
    .await;

    assert_eq!(calls.get(), 2);
    assert_eq!(result.unwrap(), 42);
}

#[tokio::test(start_paused = true)]
async fn test_single_attempt_never_sleeps() {
    let started = tokio::time::Instant::now();

    let result: crate::error::Result<()> = with_retries(1, |_attempt| async {
        Err(TonApiError::RateLimited("slow down".to_string()))
    })
    .await;

    assert!(matches!(result, Err(TonApiError::RateLimited(_))));
    assert_eq!(started.elapsed(), Duration::ZERO);
}

// ========================================================================
// SSE framing
// ========================================================================

#[test]
fn test_sse_heartbeat_filtered() {
    let lines = [
        r#"data: {"a":1}"#,
        "data: heartbeat",
        r#"data: {"a":2}"#,
    ];
    let payloads: Vec<&str> = lines.iter().filter_map(|l| parse_sse_line(l)).collect();
    assert_eq!(payloads, vec![r#"{"a":1}"#, r#"{"a":2}"#]);
}

#[rstest]
#[case::empty_line("")]
#[case::no_separator("just some text")]
#[case::comment(": keep-alive")]
#[case::event_key("event: message")]
#[case::heartbeat("data: heartbeat")]
fn test_sse_non_data_lines_skipped(#[case] line: &str) {
    assert_eq!(parse_sse_line(line), None);
}

#[test]
fn test_sse_data_line_yields_value() {
    assert_eq!(
        parse_sse_line(r#"data: {"tx_hash":"abc"}"#),
        Some(r#"{"tx_hash":"abc"}"#)
    );
}

#[test]
fn test_sse_buffer_reassembles_split_lines() {
    let mut buffer = SseLineBuffer::new();

    assert!(buffer.push(b"data: {\"a\"").is_empty());
    let lines = buffer.push(b":1}\ndata: hea");
    assert_eq!(lines, vec![r#"data: {"a":1}"#]);
    let lines = buffer.push(b"rtbeat\n\ndata: {\"a\":2}\n");
    assert_eq!(lines, vec!["data: heartbeat", "", r#"data: {"a":2}"#]);
}

#[test]
fn test_sse_buffer_strips_carriage_returns() {
    let mut buffer = SseLineBuffer::new();
    let lines = buffer.push(b"data: x\r\n");
    assert_eq!(lines, vec!["data: x"]);
}

// ========================================================================
// WebSocket framing
// ========================================================================

#[test]
fn test_ws_params_yielded() {
    let message = json!({"jsonrpc": "2.0", "method": "subscribe_account", "params": {"tx_hash": "abc"}});
    let event = handle_ws_message(&message).unwrap();
    assert_eq!(event, Some(json!({"tx_hash": "abc"})));
}

#[test]
fn test_ws_success_result_acknowledged() {
    let message = json!({"id": 1, "jsonrpc": "2.0", "result": "success! 2 new subscriptions created"});
    assert_eq!(handle_ws_message(&message).unwrap(), None);
}

#[test]
fn test_ws_failed_result_raises() {
    let message = json!({"id": 1, "jsonrpc": "2.0", "result": "error: too many subscriptions"});
    assert!(matches!(
        handle_ws_message(&message),
        Err(TonApiError::Stream(_))
    ));
}

#[test]
fn test_ws_unexpected_shape_raises() {
    let message = json!({"id": 1, "jsonrpc": "2.0"});
    assert!(matches!(
        handle_ws_message(&message),
        Err(TonApiError::Stream(_))
    ));
}

// ========================================================================
// Client configuration
// ========================================================================

#[test]
fn test_client_defaults() {
    let client = TonApiClient::new("API_KEY", Network::Mainnet).unwrap();
    assert_eq!(client.base_url(), "https://tonapi.io/");
    assert_eq!(client.websocket_url(), "wss://tonapi.io/v2/websocket");
    assert_eq!(client.max_attempts, 1);
    assert_eq!(client.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert_eq!(
        client.default_headers.get("authorization").unwrap(),
        "Bearer API_KEY"
    );
}

#[test]
fn test_builder_testnet_and_overrides() {
    let client = TonApiClient::builder()
        .api_key("API_KEY")
        .network(Network::Testnet)
        .timeout(Duration::from_secs(5))
        .max_attempts(4)
        .header("Accept-Language", "ru")
        .build()
        .unwrap();

    assert_eq!(client.base_url(), "https://testnet.tonapi.io/");
    assert!(client.websocket_url().contains("testnet"));
    assert_eq!(client.timeout, Duration::from_secs(5));
    assert_eq!(client.max_attempts, 4);
    assert_eq!(
        client.default_headers.get("accept-language").unwrap(),
        "ru"
    );
}

#[test]
fn test_builder_appends_trailing_slash() {
    let client = TonApiClient::builder()
        .base_url("http://localhost:8080")
        .build()
        .unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080/");
}

#[test]
fn test_builder_clamps_zero_attempts() {
    let client = TonApiClient::builder().max_attempts(0).build().unwrap();
    assert_eq!(client.max_attempts, 1);
}

#[test]
fn test_builder_rejects_invalid_api_key() {
    let result = TonApiClient::builder().api_key("bad\nkey").build();
    assert!(matches!(result, Err(TonApiError::InvalidInput(_))));
}
