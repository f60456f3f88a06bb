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

//! Room records and the room configuration bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::Language;

/// Who may join a room without a meeting token.
///
/// Values this crate does not know yet (e.g. `"org"`) decode into `Other`
/// and are sent back unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    Public,
    Private,
    #[serde(untagged)]
    Other(String),
}

/// Where a recording is stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Recording {
    /// Uploaded to Daily's cloud while the call runs.
    Cloud,
    /// Saved to the recording participant's disk.
    Local,
    /// Any other mode the service reports, such as `"raw-tracks"`.
    #[serde(untagged)]
    Other(String),
}

/// Room configuration properties.
///
/// The set of properties is owned by the service and grows over time. The
/// commonly used ones are typed below; every other key lands in `extra` and
/// is sent back untouched, so nothing the service returns is dropped.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RoomConfig {
    /// Unix seconds before which nobody can join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Unix seconds after which nobody can join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_screenshare: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_chat: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_knocking: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_prejoin_ui: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_video_off: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_audio_off: Option<bool>,

    /// Only owners may send audio, video and screenshares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_only_broadcast: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_recording: Option<Recording>,

    /// Eject everyone when `exp` is reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eject_at_room_exp: Option<bool>,

    /// Eject each participant this many seconds after they join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eject_after_elapsed: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,

    /// Properties without a typed field above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A named video-call space.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Room {
    pub name: String,

    /// Controls who joins a meeting.
    pub privacy: Privacy,

    #[serde(default)]
    pub config: RoomConfig,
}
