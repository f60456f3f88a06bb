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

//! Request and response types for the Daily.co REST API.
//!
//! Every type here is a plain data record that mirrors the JSON the service
//! accepts or returns. Field names follow the wire spelling exactly; no value
//! is transformed on the way in or out. The crate does no I/O, so it can be
//! shared by the HTTP client, the CLI and anything that stores or forwards
//! Daily payloads.

pub mod domain;
pub mod error;
pub mod requests;
pub mod responses;
pub mod room;
pub mod token;

pub use domain::{DomainConfig, Language};
pub use error::DailyApiError;
pub use requests::{
    CreateRoomRequest, LogLevel, LogOrder, LogsRequest, MeetingTokenRequest, MeetingsRequest,
    PaginatedRequest, UpdateRoomRequest,
};
pub use responses::{
    CreateRoomResponse, DeleteResponse, DomainResponse, LogEntry, LogsResponse,
    MeetingTokenResponse, MeetingsResponse, MetricEntry, PaginatedResponse, Participant,
};
pub use room::{Privacy, Recording, Room, RoomConfig};
pub use token::MeetingToken;
