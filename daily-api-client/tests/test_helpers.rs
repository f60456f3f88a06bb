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

//! Shared test helpers for daily-api-client integration tests.

#![allow(dead_code)]

use daily_api_client::DailyClient;
use mockito::{Mock, ServerGuard};

pub const TEST_TOKEN: &str = "test-api-key";

/// Start a mock Daily API server.
pub async fn mock_server() -> ServerGuard {
    mockito::Server::new_async().await
}

/// Build a client that targets the given mock server with [`TEST_TOKEN`].
pub fn client_for(server: &ServerGuard) -> DailyClient {
    DailyClient::with_base_url(&server.url(), TEST_TOKEN)
        .expect("building a client against the mock server should not fail")
}

/// Start building a mock that also requires the bearer header.
pub fn authed_mock(server: &mut ServerGuard, method: &str, path: &str) -> Mock {
    server
        .mock(method, path)
        .match_header("authorization", format!("Bearer {TEST_TOKEN}").as_str())
}

/// Finish a mock with a 200 JSON answer.
pub async fn respond_json(mock: Mock, body: serde_json::Value) -> Mock {
    mock.with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await
}
