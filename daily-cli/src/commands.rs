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

//! Dispatch of parsed CLI commands to [`DailyClient`] calls.

use anyhow::Context;
use daily_api_client::DailyClient;
use log::info;
use serde_json::Value;

use crate::cli_args::{
    Command, DomainCommand, MeetingsCommand, Opt, RoomsCommand, TokensCommand,
};

/// Build the client described by the global options.
pub fn client_from_opt(opt: &Opt) -> anyhow::Result<DailyClient> {
    let client = match &opt.base_url {
        Some(base_url) => DailyClient::with_base_url(base_url, opt.api_key.clone())?,
        None => DailyClient::new(opt.api_key.clone())?,
    };
    info!("Using Daily API at {}", client.base_url());
    Ok(client)
}

/// Run one command and return the decoded answer as JSON.
pub async fn run(client: &DailyClient, command: Command) -> anyhow::Result<Value> {
    let value = match command {
        Command::Domain { action } => match action {
            DomainCommand::Get => to_json(client.domain_config().await?)?,
            DomainCommand::Update(update) => {
                to_json(client.update_domain_config(&update.into()).await?)?
            }
        },
        Command::Rooms { action } => match action {
            RoomsCommand::List(page) => to_json(client.list_rooms(Some(&page.into())).await?)?,
            RoomsCommand::Create(create) => to_json(client.create_room(&create.into()).await?)?,
            RoomsCommand::Get { name } => to_json(client.get_room(&name).await?)?,
            RoomsCommand::Update(update) => {
                to_json(client.update_room(&update.name, &(&update).into()).await?)?
            }
            RoomsCommand::Delete { name } => to_json(client.delete_room(&name).await?)?,
        },
        Command::Meetings { action } => match action {
            MeetingsCommand::List(filter) => {
                to_json(client.list_meetings(Some(&filter.into())).await?)?
            }
        },
        Command::Tokens { action } => match action {
            TokensCommand::Create { properties } => {
                to_json(client.create_meeting_token(&properties.into()).await?)?
            }
            TokensCommand::Validate { token } => client.validate_meeting_token(&token).await?,
        },
        Command::Logs(args) => to_json(client.logs(&args.into()).await?)?,
    };
    Ok(value)
}

fn to_json<T: serde::Serialize>(value: T) -> anyhow::Result<Value> {
    serde_json::to_value(value).context("failed to re-encode response")
}
