use crate::cli::{Args, Command, SchedulePeriod};
use nhl_api::config::validation::validate_config;
use nhl_api::error::CliError;
use nhl_api::utils::parse_season_string;
use nhl_api::{ClientOptions, Config, NhlClient, SearchOptions};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

/// Client settings in effect: `--timeout` wins over the config file.
pub fn client_options(args: &Args, config: &Config) -> Result<ClientOptions, CliError> {
    let timeout_ms = args.timeout.unwrap_or(config.http_timeout_ms);
    validate_config(timeout_ms, &None)?;
    Ok(ClientOptions::default().with_timeout_ms(timeout_ms))
}

fn to_json<T: Serialize>(value: T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}

/// Runs one API subcommand and returns the response as JSON.
pub async fn run_api_command(client: &NhlClient, command: &Command) -> Result<Value, CliError> {
    info!("Running command: {command:?}");
    match command {
        Command::Today => to_json(client.schedule.today().await?),
        Command::Schedule { date } => to_json(client.schedule.get_date(date.as_str()).await?),
        Command::TeamSchedule { team, period } => {
            let query = client.schedule.team(team);
            let schedule = match period {
                SchedulePeriod::Season => query.season().await?,
                SchedulePeriod::Week => query.week().await?,
                SchedulePeriod::Month => query.month().await?,
            };
            to_json(schedule)
        }
        Command::Scores => to_json(client.games.scores().await?),
        Command::Boxscore { game_id } => to_json(client.games.boxscore(*game_id).await?),
        Command::PlayByPlay { game_id } => to_json(client.games.play_by_play(*game_id).await?),
        Command::Roster { team, season } => {
            let season = season.as_deref().map(parse_season_string).transpose()?;
            to_json(client.teams.get(team).roster(season).await?)
        }
        Command::TeamStats { team } => to_json(client.teams.get(team).stats().await?),
        Command::Search {
            name,
            limit,
            include_inactive,
        } => {
            let options = SearchOptions {
                limit: *limit,
                active: !include_inactive,
            };
            to_json(client.players.search(name, options).await?)
        }
        Command::Player { player_id } => to_json(client.players.get(*player_id).stats().await?),
        Command::Standings { season: true } => to_json(client.standings.season().await?),
        Command::Standings { season: false } => to_json(client.standings.current().await?),
        Command::Config { .. } => Err(CliError::config_error(
            "The config command does not call the API",
        )),
    }
}

/// Applies `config --set-timeout/--set-log-file/--clear-log-file` to `config`.
///
/// Returns `true` when something changed and the file needs saving.
pub fn apply_config_changes(
    config: &mut Config,
    set_timeout: Option<u64>,
    set_log_file: Option<&str>,
    clear_log_file: bool,
) -> Result<bool, CliError> {
    let mut changed = false;

    if let Some(timeout) = set_timeout {
        config.http_timeout_ms = timeout;
        changed = true;
    }

    if let Some(path) = set_log_file {
        config.log_file_path = Some(path.to_string());
        changed = true;
    } else if clear_log_file {
        config.log_file_path = None;
        changed = true;
    }

    if changed {
        config.validate()?;
    }
    Ok(changed)
}

/// Applies the requested changes to the config file at `config_path`.
///
/// The file is read without validation so a broken one can be repaired. An
/// unreadable file is replaced by defaults plus the requested changes.
pub async fn update_config_file(
    config_path: &str,
    set_timeout: Option<u64>,
    set_log_file: Option<&str>,
    clear_log_file: bool,
) -> Result<bool, CliError> {
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::load_from_path(config_path).await.unwrap_or_else(|e| {
            warn!("Could not read {config_path} ({e}), starting from defaults");
            Config::default()
        })
    } else {
        Config::default()
    };

    let changed = apply_config_changes(&mut config, set_timeout, set_log_file, clear_log_file)?;
    if changed {
        config.save_to_path(config_path).await?;
        info!("Configuration saved to {config_path}");
    }
    Ok(changed)
}

/// Handles the `config` subcommand: saves any requested changes, then prints
/// the configuration.
pub async fn handle_config_command(
    set_timeout: Option<u64>,
    set_log_file: Option<&str>,
    clear_log_file: bool,
) -> Result<(), CliError> {
    let config_path = Config::get_config_path();

    if update_config_file(&config_path, set_timeout, set_log_file, clear_log_file).await? {
        println!("Config updated successfully!");
        if clear_log_file {
            println!("Custom log file path cleared. Using default location.");
        }
    }

    Config::display().await
}
