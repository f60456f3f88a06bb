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

use clap::{Args, Parser, Subcommand};
use daily_api_client::daily_api_types::{
    CreateRoomRequest, DomainConfig, Language, LogLevel, LogOrder, LogsRequest, MeetingToken,
    MeetingsRequest, PaginatedRequest, Privacy, RoomConfig,
    UpdateRoomRequest,
};
use serde::de::DeserializeOwned;

/// Daily CLI
///
/// Calls the Daily.co REST API with the given API key and prints the JSON
/// answer on stdout.
#[derive(Parser, Debug)]
#[clap(name = "daily")]
pub struct Opt {
    /// Daily API key, sent as a bearer token.
    #[clap(long = "api-key", env = "DAILY_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Override the API origin (defaults to https://api.daily.co/v1).
    #[clap(long = "base-url", env = "DAILY_API_URL")]
    pub base_url: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Domain-wide configuration.
    Domain {
        #[clap(subcommand)]
        action: DomainCommand,
    },

    /// Room management.
    Rooms {
        #[clap(subcommand)]
        action: RoomsCommand,
    },

    /// Meeting session analytics.
    Meetings {
        #[clap(subcommand)]
        action: MeetingsCommand,
    },

    /// Meeting token issuance and validation.
    Tokens {
        #[clap(subcommand)]
        action: TokensCommand,
    },

    /// Call logs and metrics for a session or participant.
    Logs(LogsArgs),
}

#[derive(Subcommand, Debug)]
pub enum DomainCommand {
    /// Show the domain configuration.
    Get,
    /// Replace the domain configuration.
    Update(DomainUpdate),
}

/// Every field is required: `POST /` replaces the whole configuration, so a
/// flag left out would otherwise reset that setting.
#[derive(Args, Debug, Clone)]
pub struct DomainUpdate {
    #[clap(long = "hide-branding", action = clap::ArgAction::Set)]
    pub hide_branding: bool,

    /// One of en, fr, user, or `default` for the service default.
    #[clap(long = "lang", value_parser = parse_domain_lang)]
    pub lang: DomainLang,

    /// Pass an empty string to clear the redirect.
    #[clap(long = "redirect-on-exit")]
    pub redirect_on_exit: String,
}

/// `--lang` value; `None` is sent as `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainLang(pub Option<Language>);

#[derive(Subcommand, Debug)]
pub enum RoomsCommand {
    /// List rooms.
    List(Pagination),
    /// Create a room.
    Create(RoomCreate),
    /// Show one room.
    Get { name: String },
    /// Change a room's privacy or properties.
    Update(RoomUpdate),
    /// Delete a room.
    Delete { name: String },
}

#[derive(Args, Debug, Clone, Default)]
pub struct Pagination {
    #[clap(long = "limit")]
    pub limit: Option<u32>,

    #[clap(long = "starting-after")]
    pub starting_after: Option<String>,

    #[clap(long = "ending-before")]
    pub ending_before: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct RoomCreate {
    /// Generated by the service if omitted.
    #[clap(long = "name")]
    pub name: Option<String>,

    /// public or private.
    #[clap(long = "privacy", value_parser = parse_privacy)]
    pub privacy: Option<Privacy>,

    /// Room properties as a JSON object, e.g. '{"max_participants": 4}'.
    #[clap(long = "properties", value_parser = parse_json::<RoomConfig>)]
    pub properties: Option<RoomConfig>,
}

#[derive(Args, Debug, Clone)]
pub struct RoomUpdate {
    pub name: String,

    #[clap(long = "privacy", value_parser = parse_privacy)]
    pub privacy: Option<Privacy>,

    #[clap(long = "properties", value_parser = parse_json::<RoomConfig>)]
    pub properties: Option<RoomConfig>,
}

#[derive(Subcommand, Debug)]
pub enum MeetingsCommand {
    /// List meeting sessions.
    List(MeetingsFilter),
}

#[derive(Args, Debug, Clone)]
pub struct MeetingsFilter {
    #[clap(long = "room")]
    pub room: Option<String>,

    /// Unix seconds.
    #[clap(long = "timeframe-start")]
    pub timeframe_start: Option<i64>,

    /// Unix seconds.
    #[clap(long = "timeframe-end")]
    pub timeframe_end: Option<i64>,

    #[clap(flatten)]
    pub pagination: Pagination,
}

#[derive(Subcommand, Debug)]
pub enum TokensCommand {
    /// Create a meeting token.
    Create {
        /// Token properties as a JSON object, e.g. '{"room_name": "r1", "is_owner": true}'.
        #[clap(long = "properties", value_parser = parse_json::<MeetingToken>)]
        properties: MeetingToken,
    },
    /// Validate a meeting token and show its properties.
    Validate { token: String },
}

#[derive(Args, Debug, Clone)]
pub struct LogsArgs {
    #[clap(long = "mtg-session-id")]
    pub mtg_session_id: Option<String>,

    #[clap(long = "user-session-id")]
    pub user_session_id: Option<String>,

    #[clap(long = "include-logs")]
    pub include_logs: bool,

    #[clap(long = "include-metrics")]
    pub include_metrics: bool,

    /// ERROR, INFO or DEBUG.
    #[clap(long = "log-level", value_parser = parse_wire::<LogLevel>)]
    pub log_level: Option<LogLevel>,

    /// ASC or DESC.
    #[clap(long = "order", value_parser = parse_wire::<LogOrder>)]
    pub order: Option<LogOrder>,

    /// Epoch milliseconds.
    #[clap(long = "start-time")]
    pub start_time: Option<i64>,

    /// Epoch milliseconds.
    #[clap(long = "end-time")]
    pub end_time: Option<i64>,

    #[clap(long = "limit")]
    pub limit: Option<u32>,

    #[clap(long = "offset")]
    pub offset: Option<u32>,
}

/// Parse a value by its wire spelling, e.g. `private` or `DESC`.
fn parse_wire<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(s.to_string()))
        .map_err(|e| format!("invalid value {s:?}: {e}"))
}

fn parse_privacy(s: &str) -> Result<Privacy, String> {
    match parse_wire(s)? {
        Privacy::Other(other) => Err(format!(
            "invalid privacy {other:?}: expected public or private"
        )),
        privacy => Ok(privacy),
    }
}

fn parse_domain_lang(s: &str) -> Result<DomainLang, String> {
    if s == "default" {
        return Ok(DomainLang(None));
    }
    match parse_wire(s)? {
        Language::Other(other) => Err(format!(
            "invalid language {other:?}: expected en, fr, user or default"
        )),
        lang => Ok(DomainLang(Some(lang))),
    }
}

fn parse_json<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    serde_json::from_str(s).map_err(|e| format!("invalid JSON: {e}"))
}

impl From<DomainUpdate> for DomainConfig {
    fn from(args: DomainUpdate) -> Self {
        DomainConfig {
            hide_daily_branding: args.hide_branding,
            lang: args.lang.0,
            redirect_on_meeting_exit: args.redirect_on_exit,
            ..Default::default()
        }
    }
}

impl From<Pagination> for PaginatedRequest {
    fn from(args: Pagination) -> Self {
        PaginatedRequest {
            limit: args.limit,
            ending_before: args.ending_before,
            starting_after: args.starting_after,
        }
    }
}

impl From<RoomCreate> for CreateRoomRequest {
    fn from(args: RoomCreate) -> Self {
        CreateRoomRequest {
            name: args.name,
            privacy: args.privacy,
            properties: args.properties,
        }
    }
}

impl From<&RoomUpdate> for UpdateRoomRequest {
    fn from(args: &RoomUpdate) -> Self {
        UpdateRoomRequest {
            privacy: args.privacy.clone(),
            properties: args.properties.clone(),
        }
    }
}

impl From<MeetingsFilter> for MeetingsRequest {
    fn from(args: MeetingsFilter) -> Self {
        MeetingsRequest {
            room: args.room,
            timeframe_start: args.timeframe_start,
            timeframe_end: args.timeframe_end,
            limit: args.pagination.limit,
            starting_after: args.pagination.starting_after,
            ending_before: args.pagination.ending_before,
        }
    }
}

impl From<LogsArgs> for LogsRequest {
    fn from(args: LogsArgs) -> Self {
        // Flags that were not passed stay off the query entirely.
        LogsRequest {
            include_logs: args.include_logs.then_some(true),
            include_metrics: args.include_metrics.then_some(true),
            user_session_id: args.user_session_id,
            mtg_session_id: args.mtg_session_id,
            log_level: args.log_level,
            order: args.order,
            start_time: args.start_time,
            end_time: args.end_time,
            limit: args.limit,
            offset: args.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Opt {
        let mut argv = vec!["daily", "--api-key", "k"];
        argv.extend_from_slice(args);
        Opt::try_parse_from(argv).unwrap()
    }

    #[test]
    fn rooms_list_pagination() {
        let opt = parse(&["rooms", "list", "--limit", "10", "--starting-after", "abc"]);
        let Command::Rooms {
            action: RoomsCommand::List(page),
        } = opt.command
        else {
            panic!("expected rooms list");
        };
        let request = PaginatedRequest::from(page);
        assert_eq!(request.limit, Some(10));
        assert_eq!(request.starting_after.as_deref(), Some("abc"));
        assert_eq!(request.ending_before, None);
    }

    #[test]
    fn rooms_create_parses_privacy_and_properties() {
        let opt = parse(&[
            "rooms",
            "create",
            "--name",
            "standup",
            "--privacy",
            "private",
            "--properties",
            r#"{"max_participants": 4, "geo": "eu-central-1"}"#,
        ]);
        let Command::Rooms {
            action: RoomsCommand::Create(create),
        } = opt.command
        else {
            panic!("expected rooms create");
        };
        let request = CreateRoomRequest::from(create);
        assert_eq!(request.privacy, Some(Privacy::Private));
        let properties = request.properties.unwrap();
        assert_eq!(properties.max_participants, Some(4));
        assert!(properties.extra.contains_key("geo"));
    }

    #[test]
    fn invalid_privacy_is_rejected() {
        let result = Opt::try_parse_from([
            "daily",
            "--api-key",
            "k",
            "rooms",
            "create",
            "--privacy",
            "secret",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn logs_flags_map_to_query() {
        let opt = parse(&[
            "logs",
            "--mtg-session-id",
            "s1",
            "--include-metrics",
            "--order",
            "DESC",
        ]);
        let Command::Logs(args) = opt.command else {
            panic!("expected logs");
        };
        let request = LogsRequest::from(args);
        assert_eq!(request.mtg_session_id.as_deref(), Some("s1"));
        assert_eq!(request.include_logs, None);
        assert_eq!(request.include_metrics, Some(true));
        assert_eq!(request.order, Some(LogOrder::Desc));
    }

    #[test]
    fn domain_update_requires_every_field() {
        let result = Opt::try_parse_from([
            "daily",
            "--api-key",
            "k",
            "domain",
            "update",
            "--hide-branding",
            "true",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn domain_update_default_lang_is_null() {
        let opt = parse(&[
            "domain",
            "update",
            "--hide-branding",
            "true",
            "--lang",
            "default",
            "--redirect-on-exit",
            "https://acme.example/bye",
        ]);
        let Command::Domain {
            action: DomainCommand::Update(update),
        } = opt.command
        else {
            panic!("expected domain update");
        };
        let config = DomainConfig::from(update);
        assert!(config.hide_daily_branding);
        assert_eq!(config.lang, None);
        assert_eq!(config.redirect_on_meeting_exit, "https://acme.example/bye");
    }

    #[test]
    fn domain_update_rejects_unknown_lang() {
        let result = Opt::try_parse_from([
            "daily",
            "--api-key",
            "k",
            "domain",
            "update",
            "--hide-branding",
            "false",
            "--lang",
            "de",
            "--redirect-on-exit",
            "",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn token_create_requires_valid_json() {
        let result = Opt::try_parse_from([
            "daily",
            "--api-key",
            "k",
            "tokens",
            "create",
            "--properties",
            "{not json",
        ]);
        assert!(result.is_err());
    }
}
