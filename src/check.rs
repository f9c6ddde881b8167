//! Presence check for required environment variables

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::env::Env;

/// One or more required variables are unset or empty. Carries the missing
/// names in the order they were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingVariables(pub Vec<String>);

impl Display for MissingVariables {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Missing environment variables: {}", self.0.join(", "))
    }
}

impl Error for MissingVariables {}

/// Checks that every name in `required` maps to a non-empty value in `env`.
///
/// A variable set to an empty string counts as missing, same as an unset one.
pub fn check_vars<S: AsRef<str>>(env: &impl Env, required: &[S]) -> Result<(), MissingVariables> {
    let missing: Vec<String> = required
        .iter()
        .map(|name| name.as_ref())
        .filter(|name| env.var(name).map_or(true, |value| value.is_empty()))
        .map(str::to_owned)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingVariables(missing))
    }
}
