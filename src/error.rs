//! Crate-level error types.

use std::fmt;

use crate::zones::ProjectionKind;

/// Errors produced by the stateplane crate.
///
/// Absences (unknown zone codes, unparsable angle fields) are modeled as
/// `Option`s and sentinels at their call sites, never as errors; this enum
/// covers the failures a caller must act on.
#[derive(Debug)]
pub enum StateplaneError {
    /// Alignment requested for a projection kind with no implemented
    /// surface strategy.
    UnsupportedProjection(ProjectionKind),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure (options preset files).
    Io(std::io::Error),
}

impl fmt::Display for StateplaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedProjection(kind) => {
                write!(f, "no projection surface implemented for {kind}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for StateplaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StateplaneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
