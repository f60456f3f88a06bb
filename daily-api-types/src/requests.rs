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

//! Request types for the Daily REST API.
//!
//! These define request bodies and query strings. Unset optional fields are
//! left out of the serialized form entirely so the service applies its own
//! defaults.

use serde::{Deserialize, Serialize};

use crate::room::{Privacy, RoomConfig};
use crate::token::MeetingToken;

/// Cursor pagination for list endpoints such as `GET /rooms`.
///
/// Cursors are opaque ids taken from a previous page.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PaginatedRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
}

/// Request body for `POST /rooms`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CreateRoomRequest {
    /// Room name. Generated by the service if omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<RoomConfig>,
}

/// Request body for `POST /rooms/{name}`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UpdateRoomRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<RoomConfig>,
}

/// Request body for `POST /meeting-tokens`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MeetingTokenRequest {
    pub properties: MeetingToken,
}

impl From<MeetingToken> for MeetingTokenRequest {
    fn from(properties: MeetingToken) -> Self {
        MeetingTokenRequest { properties }
    }
}

/// Query parameters for `GET /meetings`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MeetingsRequest {
    /// Only sessions held in this room.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,

    /// Unix seconds; sessions starting at or after this time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe_start: Option<i64>,

    /// Unix seconds; sessions starting before this time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe_end: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_before: Option<String>,
}

/// Sort order of `GET /logs` results.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogOrder {
    Asc,
    Desc,
}

/// Log level filter for `GET /logs`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Error,
    Info,
    Debug,
}

/// Query parameters for `GET /logs`.
///
/// Unlike the rest of the API, this endpoint spells its parameters in
/// camelCase. At least one of `user_session_id` or `mtg_session_id` must be
/// set for the service to accept the request.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogsRequest {
    /// Return a `logs` array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_logs: Option<bool>,

    /// Return a `metrics` array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_metrics: Option<bool>,

    /// Participant id filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_session_id: Option<String>,

    /// Meeting session id filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtg_session_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<LogOrder>,

    /// Epoch milliseconds (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,

    /// Epoch milliseconds (UTC). The service defaults to now.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,

    /// Maximum number of logs and metrics returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of records to skip.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}
