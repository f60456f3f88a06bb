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

//! Error types for the Daily API client.

use daily_api_types::DailyApiError;
use thiserror::Error;

/// Errors returned by [`DailyClient`](crate::DailyClient) methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-2xx status. The raw body is kept
    /// as-is; see [`ApiError::api_error`] for the parsed form.
    #[error("Daily API error ({status}): {body}")]
    Status { status: u16, body: String },

    /// A network or transport error, including the request timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx body that is not JSON of the expected kind.
    #[error("Could not decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// A configuration error (e.g. an unparsable base URL).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of a [`ApiError::Status`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body, when one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            ApiError::Status { body, .. } | ApiError::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// The service's error body, if the failure carried one in the usual
    /// `{"error": ..., "info": ...}` shape.
    pub fn api_error(&self) -> Option<DailyApiError> {
        match self {
            ApiError::Status { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }

    /// The service answered 404, e.g. for an unknown room name.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// The request hit the client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Network(err) if err.is_timeout())
    }
}
