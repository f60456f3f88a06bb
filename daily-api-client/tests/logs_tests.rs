/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Integration tests for the logs endpoint.

mod test_helpers;

use daily_api_client::daily_api_types::{LogLevel, LogOrder, LogsRequest};
use mockito::Matcher;
use serde_json::json;
use test_helpers::*;

#[tokio::test]
async fn test_logs_sends_camel_case_query() {
    let mut server = mock_server().await;
    let mock = respond_json(
        authed_mock(&mut server, "GET", "/logs").match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("mtgSessionId".into(), "sess-1".into()),
            Matcher::UrlEncoded("includeLogs".into(), "true".into()),
            Matcher::UrlEncoded("includeMetrics".into(), "true".into()),
            Matcher::UrlEncoded("logLevel".into(), "ERROR".into()),
            Matcher::UrlEncoded("order".into(), "ASC".into()),
            Matcher::UrlEncoded("startTime".into(), "1700000000000".into()),
            Matcher::UrlEncoded("limit".into(), "20".into()),
        ])),
        json!({
            "logs": [{"time": 1700000000123i64, "level": 1, "message": "ice connection failed"}],
            "logs_count": 1,
            "metrics": [{"time": 1700000000500i64, "userRecvBitsPerSecond": 350000}]
        }),
    )
    .await;

    let logs = client_for(&server)
        .logs(&LogsRequest {
            mtg_session_id: Some("sess-1".to_string()),
            include_logs: Some(true),
            include_metrics: Some(true),
            log_level: Some(LogLevel::Error),
            order: Some(LogOrder::Asc),
            start_time: Some(1_700_000_000_000),
            limit: Some(20),
            ..Default::default()
        })
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(logs.logs_count, 1);
    assert_eq!(logs.logs[0]["message"], json!("ice connection failed"));
    assert_eq!(logs.metrics[0]["userRecvBitsPerSecond"], json!(350000));
}
