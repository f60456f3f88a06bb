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

use clap::Parser;
use daily_cli::cli_args::Opt;
use daily_cli::commands::{client_from_opt, run};
use env_logger::Env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let opt = Opt::parse();
    let client = client_from_opt(&opt)?;
    let value = run(&client, opt.command).await?;
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}
