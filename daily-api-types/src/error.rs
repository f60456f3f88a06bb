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

//! Service error body.
//!
//! When a request fails, Daily answers with a non-2xx status and a small JSON
//! object such as `{"error": "not-found", "info": "room r1 not found"}`.

use serde::{Deserialize, Serialize};

/// Structured error body returned by the Daily API on non-2xx responses.
///
/// The `error` field is a machine-readable identifier (e.g. `"not-found"`,
/// `"invalid-request-error"`, `"authentication-error"`). The `info` field is a
/// human-readable description and may be absent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DailyApiError {
    /// Machine-readable error identifier.
    pub error: String,

    /// Human-readable detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

impl DailyApiError {
    pub const NOT_FOUND: &'static str = "not-found";
    pub const INVALID_REQUEST: &'static str = "invalid-request-error";
    pub const AUTHENTICATION: &'static str = "authentication-error";

    pub fn is_not_found(&self) -> bool {
        self.error == Self::NOT_FOUND
    }
}

impl std::fmt::Display for DailyApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.info {
            Some(info) => write!(f, "[{}] {}", self.error, info),
            None => write!(f, "[{}]", self.error),
        }
    }
}

impl std::error::Error for DailyApiError {}
