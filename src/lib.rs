//! Fail-fast validation of required environment variables.
//!
//! Intended to run first in a program's startup sequence: either call
//! [check_vars] directly, or wire the bundled binary into an entrypoint
//! script before the real workload starts.

use anyhow::Result;

use cli::Cli;
use env::Env;

pub mod check;
pub mod cli;
pub mod env;

pub use check::{check_vars, MissingVariables};

/// Checks the variables named on the command line against `env` and logs a
/// confirmation when all of them are present.
pub fn run(cli: &Cli, env: &impl Env) -> Result<()> {
    check_vars(env, &cli.variables)?;
    log::info!(
        "All {} required environment variable(s) are set",
        cli.variables.len()
    );
    Ok(())
}
