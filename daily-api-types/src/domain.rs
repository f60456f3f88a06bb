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

//! Account-wide domain configuration: `GET /` and `POST /`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Language of the in-call UI.
///
/// `User` follows the browser's language when it is one of the supported
/// ones. Languages added by the service later decode into `Other`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
    User,
    #[serde(untagged)]
    Other(String),
}

/// Defaults that apply to every room in the domain.
///
/// Rooms and meeting tokens can override `lang` and the exit redirect.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DomainConfig {
    /// Whether the "Powered by Daily" branding is hidden in the call UI.
    /// Only settable on plans that allow it.
    #[serde(default, alias = "hideDailyBranding")]
    pub hide_daily_branding: bool,

    /// Default UI language. `null` on the wire means "service default".
    #[serde(default)]
    pub lang: Option<Language>,

    /// URL loaded when a user leaves a meeting opened in its own tab.
    /// The service appends `recent_call=<domain>/<room>` to it.
    #[serde(default, alias = "redirectOnMeetingExit")]
    pub redirect_on_meeting_exit: String,

    /// Other domain properties the service reports (e.g. `enable_prejoin_ui`,
    /// `enable_network_ui`). Empty unless set; sent back as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
