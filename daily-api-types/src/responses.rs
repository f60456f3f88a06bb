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

//! Response types for the Daily REST API.
//!
//! The service answers with bare JSON objects (there is no envelope). Fields
//! the service may leave out decode to their default instead of failing, so a
//! partially populated body still yields a value and any gap shows up only
//! where the caller reads it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::DomainConfig;
use crate::room::{Privacy, RoomConfig};

// ---------------------------------------------------------------------------
// Generic envelope
// ---------------------------------------------------------------------------

/// One page of a cursor-paginated list.
///
/// ```json
/// { "total_count": 2, "data": [ { ... }, { ... } ] }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    /// Number of matching records across all pages.
    #[serde(default)]
    pub total_count: u64,

    /// Records on this page, in service order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

// ---------------------------------------------------------------------------
// Endpoint-specific response payloads
// ---------------------------------------------------------------------------

/// Response payload for `GET /`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DomainResponse {
    #[serde(default, alias = "domainName")]
    pub domain_name: String,

    #[serde(default)]
    pub config: DomainConfig,

    /// Top-level fields without a typed counterpart.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Room as returned by `POST /rooms`, `GET /rooms/{name}` and
/// `POST /rooms/{name}`.
///
/// `id`, `api_created`, `url` and `created_at` are assigned by the service.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CreateRoomResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Whether the room was created through the REST API rather than the
    /// dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_created: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,

    /// Join URL, e.g. `https://your-domain.daily.co/standup`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// ISO 8601 creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RoomConfig>,

    /// Top-level fields without a typed counterpart.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response payload for `DELETE /rooms/{name}`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DeleteResponse {
    #[serde(default)]
    pub deleted: bool,

    #[serde(default)]
    pub name: String,
}

/// Response payload for `POST /meeting-tokens`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MeetingTokenResponse {
    /// The signed token, to be passed to the call client when joining.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// One meeting session inside a `GET /meetings` page.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MeetingsResponse {
    /// Session id.
    #[serde(default)]
    pub id: String,

    /// Room the session was held in.
    #[serde(default)]
    pub room: String,

    /// Unix seconds.
    #[serde(default)]
    pub start_time: i64,

    /// Seconds.
    #[serde(default)]
    pub duration: u64,

    #[serde(default)]
    pub ongoing: bool,

    /// Peak number of simultaneous participants.
    #[serde(default)]
    pub max_participants: u32,

    #[serde(default)]
    pub participants: Vec<Participant>,
}

/// A participant of a meeting session.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Participant {
    /// The `user_id` from the meeting token, if one was used.
    #[serde(default)]
    pub user_id: Option<String>,

    #[serde(default)]
    pub participant_id: String,

    #[serde(default)]
    pub user_name: Option<String>,

    /// Unix seconds.
    #[serde(default)]
    pub join_time: i64,

    /// Seconds.
    #[serde(default)]
    pub duration: u64,
}

/// A single log line from `GET /logs`. The service does not publish a schema
/// for these, so they are kept as loose JSON objects.
pub type LogEntry = Map<String, Value>;

/// A single metrics sample from `GET /logs`. Schema-less like [`LogEntry`].
pub type MetricEntry = Map<String, Value>;

/// Response payload for `GET /logs`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LogsResponse {
    #[serde(default)]
    pub logs: Vec<LogEntry>,

    #[serde(default)]
    pub logs_count: u64,

    #[serde(default)]
    pub metrics: Vec<MetricEntry>,
}
