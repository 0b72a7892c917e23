mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Args, Command};
use nhl_api::error::CliError;
use nhl_api::{Config, NhlClient};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn error_message(error: &CliError) -> String {
    format!("Error: {error}")
}

async fn run(args: Args) -> Result<(), CliError> {
    let config = Config::load().await;

    // A broken config must not keep logging or `config` from starting
    let log_config = config.as_ref().ok().cloned().unwrap_or_default();
    let (log_file_path, _guard) = logging::setup_logging(&args, &log_config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if let Command::Config {
        set_timeout,
        set_log_file,
        clear_log_file,
    } = &args.command
    {
        return commands::handle_config_command(
            *set_timeout,
            set_log_file.as_deref(),
            *clear_log_file,
        )
        .await;
    }

    let config = config?;
    let options = commands::client_options(&args, &config)?;
    let client = NhlClient::with_options(options)?;

    let output = commands::run_api_command(&client, &args.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
