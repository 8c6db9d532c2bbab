//! Error types for pillbox operations.

use alloc::string::String;
use core::fmt;

/// Result type alias for pillbox operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for widget operations.
///
/// Validation is not an error: every input classifies into valid/invalid
/// and the outcome is recorded on the `Entry` itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Internal fault while building entries during a mutation.
    ///
    /// Aborts the mutation before any state change or notification.
    Construction {
        message: String,
    },
    /// A subscriber callback reported a failure during notification.
    ///
    /// Swallowed at the dispatch boundary; never surfaced to the mutating
    /// caller.
    Subscriber {
        message: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Construction { message } => {
                write!(f, "Entry construction failed: {}", message)
            }
            Error::Subscriber { message } => {
                write!(f, "Subscriber failed: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates a construction fault.
    pub fn construction(message: impl Into<String>) -> Self {
        Error::Construction {
            message: message.into(),
        }
    }

    /// Creates a subscriber fault.
    pub fn subscriber(message: impl Into<String>) -> Self {
        Error::Subscriber {
            message: message.into(),
        }
    }
}
