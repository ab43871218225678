//! ANSI coloring for failure reports.
//!
//! Whether colors are used is decided by a [`Colorizer`] value. The default
//! one is detected once per process: colors are off when stdout is not a
//! terminal or when `NO_COLOR` holds a true boolean.

use std::borrow::Cow;
use std::io::{self, IsTerminal};
use std::sync::OnceLock;

use tracing::debug;

use crate::errors::{Error, Result};

/// Environment variable that force-disables colors.
pub const NO_COLOR: &str = "NO_COLOR";

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    pub fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
        }
    }
}

/// Source of environment variables.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colorizer {
    enabled: bool,
}

impl Colorizer {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub const fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Detect color support for stdout from the process environment.
    pub fn detect() -> Self {
        Self::from_env(&OsEnv, io::stdout().is_terminal())
    }

    /// The detected colorizer, computed on first use and then fixed.
    pub fn global() -> Self {
        static DETECTED: OnceLock<Colorizer> = OnceLock::new();
        *DETECTED.get_or_init(Self::detect)
    }

    /// Decide color support from explicit inputs.
    pub fn from_env(env: &dyn Env, is_tty: bool) -> Self {
        let no_color = match env.var(NO_COLOR) {
            Some(value) if !value.is_empty() => parse_bool(&value).unwrap_or_else(|err| {
                debug!(%err, var = NO_COLOR, "ignoring unparsable value");
                false
            }),
            _ => false,
        };
        let enabled = is_tty && !no_color;
        debug!(is_tty, no_color, enabled, "detected color mode");
        Self { enabled }
    }

    /// Wrap `text` in `color`, or return it untouched when colors are off.
    pub fn paint<'a>(&self, color: Color, text: &'a str) -> Cow<'a, str> {
        if !self.enabled {
            return Cow::Borrowed(text);
        }
        Cow::Owned(format!("{}{text}{RESET}", color.code()))
    }
}

impl Default for Colorizer {
    fn default() -> Self {
        Self::global()
    }
}

/// Parse the boolean spellings accepted for `NO_COLOR`.
pub fn parse_bool(s: &str) -> Result<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(Error::InvalidBool(s.to_string())),
    }
}
