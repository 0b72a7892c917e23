use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand, ValueEnum};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NHL web API client
///
/// Queries schedules, scores, game details, rosters, players and standings
/// from the public NHL API and prints the responses as JSON.
#[derive(Parser, Debug)]
#[command(name = "nhl", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// HTTP timeout in milliseconds. Overrides the config file and NHL_API_HTTP_TIMEOUT_MS.
    #[arg(long, global = true, value_name = "MS", help_heading = "Request Options")]
    pub timeout: Option<u64>,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Log at debug level and mirror logs to stderr.
    #[arg(long, global = true, help_heading = "Debug")]
    pub debug: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Games scheduled for today
    Today,

    /// League schedule for the week containing DATE (YYYY-MM-DD)
    Schedule { date: String },

    /// Schedule of one team
    TeamSchedule {
        /// Three-letter team code, e.g. TOR
        team: String,
        #[arg(long, value_enum, default_value_t = SchedulePeriod::Season)]
        period: SchedulePeriod,
    },

    /// Live scoreboard for today
    Scores,

    /// Box score of a game
    Boxscore { game_id: i64 },

    /// Play-by-play events of a game
    PlayByPlay { game_id: i64 },

    /// Team roster
    Roster {
        team: String,
        /// Season as YYYY-YY, e.g. 2024-25. Defaults to the current season.
        #[arg(long)]
        season: Option<String>,
    },

    /// Season statistics of a team
    TeamStats { team: String },

    /// Search players by name
    Search {
        name: String,
        /// Maximum number of results
        #[arg(long, default_value_t = nhl_api::constants::search::DEFAULT_LIMIT)]
        limit: u32,
        /// Include retired and inactive players
        #[arg(long)]
        include_inactive: bool,
    },

    /// Landing page and statistics of a player
    Player { player_id: i64 },

    /// League standings
    Standings {
        /// List the seasons that have standings instead of today's table
        #[arg(long)]
        season: bool,
    },

    /// Show or change the configuration file
    Config {
        /// Persist a new HTTP timeout in milliseconds
        #[arg(long = "set-timeout", value_name = "MS")]
        set_timeout: Option<u64>,

        /// Persist a custom log file path
        #[arg(long = "set-log-file", value_name = "PATH", conflicts_with = "clear_log_file")]
        set_log_file: Option<String>,

        /// Remove the custom log file path and go back to the default location
        #[arg(long = "clear-log-file")]
        clear_log_file: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePeriod {
    Season,
    Week,
    Month,
}
