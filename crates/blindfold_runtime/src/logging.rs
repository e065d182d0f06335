//! Logging setup for the binary.
//!
//! The library crates only emit `tracing` events; installing a subscriber is
//! left to whoever owns the process.

use tracing::Level;

/// How much of the translators' logging to show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Warnings and errors only.
    #[default]
    Warn,
    /// Grammar selection and results per translation.
    Debug,
    /// Every matched section.
    Trace,
}

impl LogLevel {
    /// The matching `tracing` level.
    #[must_use]
    pub const fn level(self) -> Level {
        match self {
            Self::Warn => Level::WARN,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Installs a stderr subscriber at `level`.
///
/// Returns false if a global subscriber was already installed.
pub fn init(level: LogLevel) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level.level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
