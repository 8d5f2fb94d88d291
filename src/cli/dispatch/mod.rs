//! Map validated CLI arguments to the action to run.

use crate::cli::{
    actions::{server::Args, Action},
    commands::{self, auth},
};
use anyhow::{Context, Result};

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches
        .get_one::<u16>(commands::ARG_PORT)
        .copied()
        .context("missing required argument: --port")?;

    Ok(Action::Server(Args {
        port,
        auth: auth::parse(matches),
    }))
}
