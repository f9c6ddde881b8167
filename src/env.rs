//! Isolates process environment access

#[cfg_attr(test, mockall::automock)]
pub trait Env {
    /// Returns the variable's value, or [None] when it is unset or not
    /// valid Unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment. Never mutates it.
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
