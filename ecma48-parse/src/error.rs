use std::fmt;

use thiserror::Error;

use crate::function::FunctionType;

/// Why an introducer could not be turned into a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    /// An introducer was found but no cataloged function matches.
    UnknownFunction,
    /// The function starts but the text ends before its terminator.
    NoEndOfFunction,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFunction => f.write_str("UNKNOWN_FUNCTION"),
            Self::NoEndOfFunction => f.write_str("NO_END_OF_FUNCTION"),
        }
    }
}

/// Errors raised while turning text into fragments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown function at index {index}")]
    UnknownFunction { index: usize },

    #[error("function at index {index} has no end")]
    NoEndOfFunction { index: usize },

    #[error("{mnemonic} declares no default for omitted argument {position}")]
    MissingDefault {
        mnemonic: &'static str,
        position: usize,
    },
}

impl ParseError {
    pub(crate) fn failure(reason: FailureReason, index: usize) -> Self {
        match reason {
            FailureReason::UnknownFunction => Self::UnknownFunction { index },
            FailureReason::NoEndOfFunction => Self::NoEndOfFunction { index },
        }
    }

    /// The recoverable reason, or `None` for fatal errors.
    pub fn reason(&self) -> Option<FailureReason> {
        match self {
            Self::UnknownFunction { .. } => {
                Some(FailureReason::UnknownFunction)
            },
            Self::NoEndOfFunction { .. } => {
                Some(FailureReason::NoEndOfFunction)
            },
            Self::MissingDefault { .. } => None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.reason().is_none()
    }
}

/// Errors raised while assembling a catalog or a parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no handler registered for {0} functions")]
    MissingHandler(FunctionType),

    #[error("more than one handler registered for {0} functions")]
    DuplicateHandler(FunctionType),

    #[error("invalid pattern {pattern:?} of {mnemonic}: {message}")]
    InvalidPattern {
        mnemonic: &'static str,
        pattern: &'static str,
        message: &'static str,
    },

    #[error("{first} and {second} are both cataloged under {key}")]
    ConflictingFunctions {
        key: String,
        first: &'static str,
        second: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
