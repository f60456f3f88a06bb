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

//! Meeting token properties.
//!
//! A meeting token is a signed credential that Daily issues for one
//! participant. It scopes access to a room (or to every room in the domain
//! when `room_name` is unset) for a time window and carries per-session
//! overrides of the room's defaults.

use serde::{Deserialize, Serialize};

use crate::domain::Language;
use crate::room::Recording;

/// Properties encoded into a meeting token.
///
/// Every field is optional; unset fields are omitted from the request so the
/// room and domain defaults apply.
///
/// # Example payload
///
/// ```json
/// {
///   "room_name": "standup",
///   "is_owner": true,
///   "user_name": "Alice",
///   "exp": 1700000000,
///   "eject_at_token_exp": true
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct MeetingToken {
    /// Unix seconds. The token is not valid before this time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Unix seconds. The token is not valid after this time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Room the token is valid for. Valid for every room in the domain
    /// when unset, so always set it when the token gates access.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,

    /// Grants meeting-owner privileges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_owner: Option<bool>,

    /// Display name shown in the call and stored in the meeting events log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,

    /// Caller-side user id, stored in the meeting events log. Defaults to
    /// the random session id of the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_screenshare: Option<bool>,

    /// Join with the camera off.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_video_off: Option<bool>,

    /// Join with the microphone muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_audio_off: Option<bool>,

    /// Allows recording, and selects where it is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_recording: Option<Recording>,

    /// Start a cloud recording as soon as this user joins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_cloud_recording: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_tab_on_exit: Option<bool>,

    /// URL loaded when the user leaves through the in-call UI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_on_meeting_exit: Option<String>,

    /// Eject the user when the token expires. Overrides the room's eject
    /// settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eject_at_token_exp: Option<bool>,

    /// Eject the user this many seconds after joining. Overrides the room's
    /// eject settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eject_after_elapsed: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Language>,
}
