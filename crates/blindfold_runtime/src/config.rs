//! Command-line configuration.

use std::path::PathBuf;

use blindfold_speech::PhrasingConfig;
use thiserror::Error;

use crate::logging::LogLevel;

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Files whose lines are translated before the REPL starts.
    pub files: Vec<PathBuf>,
    /// Translate the files and exit without starting the REPL.
    pub batch_mode: bool,
    /// Print usage and exit.
    pub show_help: bool,
    /// Print the version and exit.
    pub show_version: bool,
    /// How much translator logging reaches stderr.
    pub log_level: LogLevel,
    /// Drop pause cues from spoken output.
    pub no_pauses: bool,
}

/// Why the command line could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseArgsError {
    /// An option that is not recognized.
    #[error("unknown option: {0}")]
    UnknownOption(String),
}

impl CliConfig {
    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown options.
    pub fn parse<I, S>(args: I) -> Result<Self, ParseArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();

        for arg in args {
            match arg.as_ref() {
                "-h" | "--help" => config.show_help = true,
                "-V" | "--version" => config.show_version = true,
                "-b" | "--batch" => config.batch_mode = true,
                "--debug" => config.log_level = config.log_level.max(LogLevel::Debug),
                "--trace" => config.log_level = LogLevel::Trace,
                "--no-pauses" => config.no_pauses = true,
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(ParseArgsError::UnknownOption(other.to_string()));
                }
                path => config.files.push(PathBuf::from(path)),
            }
        }

        Ok(config)
    }

    /// The phrasing these options ask for.
    #[must_use]
    pub fn phrasing(&self) -> PhrasingConfig {
        if self.no_pauses {
            PhrasingConfig::plain()
        } else {
            PhrasingConfig::default()
        }
    }
}
