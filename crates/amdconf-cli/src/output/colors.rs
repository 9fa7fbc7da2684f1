//! Terminal color support.
//!
//! Colors are off when NO_COLOR is set or either output stream is not a TTY.

use std::env;
use std::io::{self, IsTerminal};

/// ANSI color formatting that can be switched off
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically
    pub fn detect() -> Self {
        if env::var_os("NO_COLOR").is_some() || !io::stderr().is_terminal() || !io::stdout().is_terminal() {
            return Self::disabled();
        }
        Self { enabled: true }
    }

    /// Never emit escape codes
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }

    pub fn green(&self, text: &str) -> String {
        self.paint("32", text)
    }

    pub fn yellow(&self, text: &str) -> String {
        self.paint("33", text)
    }

    pub fn red(&self, text: &str) -> String {
        self.paint("31", text)
    }

    /// Dim/gray
    pub fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }
}
