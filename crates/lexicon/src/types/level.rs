use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::Level;

/// Severity attached to a console message.
///
/// Console sinks decide what to do with the level; the default sink prints
/// it as a `[LEVEL]` prefix.
#[derive(
    Copy, Clone, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConsoleLogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl ConsoleLogLevel {
    /// Every level, from most to least severe.
    pub const ALL: [ConsoleLogLevel; 5] = [
        ConsoleLogLevel::Error,
        ConsoleLogLevel::Warn,
        ConsoleLogLevel::Info,
        ConsoleLogLevel::Debug,
        ConsoleLogLevel::Trace,
    ];

    /// Upper-case name of the level, e.g. `"WARN"`.
    pub fn name(self) -> &'static str {
        match self {
            ConsoleLogLevel::Error => "ERROR",
            ConsoleLogLevel::Warn => "WARN",
            ConsoleLogLevel::Info => "INFO",
            ConsoleLogLevel::Debug => "DEBUG",
            ConsoleLogLevel::Trace => "TRACE",
        }
    }
}

impl Display for ConsoleLogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ConsoleLogLevel> for Level {
    fn from(level: ConsoleLogLevel) -> Self {
        match level {
            ConsoleLogLevel::Error => Level::ERROR,
            ConsoleLogLevel::Warn => Level::WARN,
            ConsoleLogLevel::Info => Level::INFO,
            ConsoleLogLevel::Debug => Level::DEBUG,
            ConsoleLogLevel::Trace => Level::TRACE,
        }
    }
}
