//! Print job outcome
//!
//! Every printer operation resolves to exactly one [`PrintResult`]. A
//! failed print is an expected, recoverable outcome for the caller (fix
//! the address, power the printer on, retry), so it is surfaced as data
//! with a human-readable message rather than as an error to propagate.

use std::fmt;

/// Outcome of one print job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintResult {
    /// The full byte stream was written and flushed
    Success {
        /// Human-readable confirmation
        message: String,
    },
    /// The job failed; nothing is known about partial printer output
    Error {
        /// Human-readable description of what went wrong
        message: String,
    },
}

impl PrintResult {
    /// Build a success result
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    /// Build an error result
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// True for `Success`
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// True for `Error`
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// The message, whichever variant carries it
    pub fn message(&self) -> &str {
        match self {
            Self::Success { message } | Self::Error { message } => message,
        }
    }
}

impl From<rawprint_transport::Error> for PrintResult {
    fn from(err: rawprint_transport::Error) -> Self {
        Self::error(err.to_string())
    }
}

impl fmt::Display for PrintResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { message } => write!(f, "ok: {message}"),
            Self::Error { message } => write!(f, "error: {message}"),
        }
    }
}
