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

//! Typed async REST client for the Daily.co video API.
//!
//! One [`DailyClient`] method per endpoint. Each call issues exactly one
//! HTTP request signed with the bearer token given at construction, sends
//! its input unmodified and decodes the JSON answer into the matching type
//! from [`daily_api_types`]. There is no retry and no client-side validation;
//! the service is the only authority on what it accepts.
//!
//! # Example
//!
//! ```no_run
//! use daily_api_client::DailyClient;
//! use daily_api_client::daily_api_types::{MeetingToken, MeetingTokenRequest};
//!
//! # async fn example() -> Result<(), daily_api_client::ApiError> {
//! let client = DailyClient::new("your-api-key")?;
//!
//! let room = client.get_room("standup").await?;
//! println!("Join at: {:?}", room.url);
//!
//! let token = client
//!     .create_meeting_token(&MeetingTokenRequest {
//!         properties: MeetingToken {
//!             room_name: Some("standup".to_string()),
//!             is_owner: Some(true),
//!             ..Default::default()
//!         },
//!     })
//!     .await?;
//! println!("Token: {:?}", token.token);
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod error;
pub mod logs;
pub mod meetings;
pub mod rooms;
pub mod tokens;

pub use daily_api_types;
pub use error::ApiError;

use std::fmt;
use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;

/// Origin of the production Daily REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.daily.co/v1";

/// Per-request timeout. There is no per-call override.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// A typed REST client for the Daily API.
///
/// Holds only the bearer token, the base URL and a pooled HTTP handle, none
/// of which change after construction. Cloning is cheap and clones share the
/// connection pool, so one client can serve any number of concurrent calls.
#[derive(Clone)]
pub struct DailyClient {
    base_url: String,
    token: String,
    http: Client,
}

impl DailyClient {
    /// Create a client for the production API.
    ///
    /// The token is not validated and no request is made; a bad token shows
    /// up as a 401 on the first call. Fails only if the underlying HTTP
    /// client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        Self::build(DEFAULT_BASE_URL.to_string(), token.into())
    }

    /// Create a client that talks to `base_url` instead of the production
    /// API (a proxy, a mock server).
    ///
    /// # Arguments
    ///
    /// * `base_url` - e.g. `"http://127.0.0.1:1234"`; a trailing `/` is ignored
    /// * `token` - the Daily API key
    pub fn with_base_url(base_url: &str, token: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.trim_end_matches('/');
        Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        Self::build(base_url.to_string(), token.into())
    }

    fn build(base_url: String, token: String) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("daily-api-client/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url,
            token,
            http,
        })
    }

    /// The origin every request is sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request with auth applied.
    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::GET, path)
    }

    /// Build a POST request with auth applied.
    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::POST, path)
    }

    /// Build a DELETE request with auth applied.
    pub(crate) fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.request(Method::DELETE, path)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        debug!("{method} {path}");
        self.http
            .request(method, self.url(path))
            .bearer_auth(&self.token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for DailyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DailyClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Decode a successful body as `T`, or turn a non-2xx answer into
/// [`ApiError::Status`] carrying the status and raw body.
pub(crate) async fn parse_api_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!("Daily API answered {status}: {body}");
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(source) => Err(ApiError::Decode { source, body }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_targets_production_api() {
        let client = DailyClient::new("secret").unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.url("/rooms"), "https://api.daily.co/v1/rooms");
        assert_eq!(client.url("/"), "https://api.daily.co/v1/");
    }

    #[test]
    fn with_base_url_trims_trailing_slash() {
        let client = DailyClient::with_base_url("http://127.0.0.1:9000/", "secret").unwrap();
        assert_eq!(client.url("/rooms/r1"), "http://127.0.0.1:9000/rooms/r1");
    }

    #[test]
    fn with_base_url_rejects_garbage() {
        let err = DailyClient::with_base_url("not a url", "secret").unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let client = DailyClient::new("super-secret-key").unwrap();
        let printed = format!("{client:?}");
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("redacted"));
    }

    #[test]
    fn requests_carry_bearer_token() {
        let client = DailyClient::new("tok").unwrap();
        let request = client.get("/rooms").build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "https://api.daily.co/v1/rooms");
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer tok"
        );
    }

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DailyClient>();
    }
}
