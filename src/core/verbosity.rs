//! Verbosity levels for log entries

use std::fmt;
use std::str::FromStr;

/// Ordered severity classification for log entries.
///
/// The declared ranks are stable and are what threshold filtering and
/// comparisons rely on, from `Debug` (lowest) through `Exception`
/// (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    Debug = 0,
    #[default]
    Info = 1,
    Warning = 2,
    Error = 3,
    Exception = 4,
}

impl Verbosity {
    /// All verbosities in ascending rank order.
    pub const ALL: [Verbosity; 5] = [
        Verbosity::Debug,
        Verbosity::Info,
        Verbosity::Warning,
        Verbosity::Error,
        Verbosity::Exception,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Verbosity::Debug => "DEBUG",
            Verbosity::Info => "INFO",
            Verbosity::Warning => "WARNING",
            Verbosity::Error => "ERROR",
            Verbosity::Exception => "EXCEPTION",
        }
    }

    /// Syslog severity equivalent (RFC 5424 numeric codes).
    ///
    /// `Error` and everything above it map to `ERR`.
    pub fn as_syslog(&self) -> u8 {
        match self {
            Verbosity::Debug => 7,   // LOG_DEBUG
            Verbosity::Info => 6,    // LOG_INFO
            Verbosity::Warning => 4, // LOG_WARNING
            _ => 3,                  // LOG_ERR
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Verbosity::Debug),
            "INFO" => Ok(Verbosity::Info),
            "WARN" | "WARNING" => Ok(Verbosity::Warning),
            "ERROR" => Ok(Verbosity::Error),
            "EXCEPTION" => Ok(Verbosity::Exception),
            _ => Err(format!("Invalid verbosity: '{}'", s)),
        }
    }
}
