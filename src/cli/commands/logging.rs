use clap::{builder::ValueParser, Arg, ArgAction, Command};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ENV_LOG_LEVEL: &str = "LINGO_LOG_LEVEL";

const MAX_VERBOSITY: u8 = 5;

/// Level names accepted by `LINGO_LOG_LEVEL`, in verbosity order.
const LEVEL_NAMES: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Parse a verbosity given as a count (`0..=5`) or a level name.
fn parse_log_level(level: &str) -> Result<u8, String> {
    if let Ok(count) = level.parse::<u8>() {
        if count <= MAX_VERBOSITY {
            return Ok(count);
        }
    }

    let name = level.to_ascii_lowercase();
    LEVEL_NAMES
        .iter()
        .zip(0u8..)
        .find_map(|(known, count)| (*known == name).then_some(count))
        .ok_or_else(|| format!("invalid log level: {level}"))
}

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(parse_log_level)
}

/// Tracing level for a verbosity count; `0` leaves the subscriber default.
#[must_use]
pub const fn level_for(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env(ENV_LOG_LEVEL)
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
