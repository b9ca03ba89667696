use thiserror::Error;

/// Errors raised while reading timecodes out of subtitle blocks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("missing '-->' in time range: '{0}'")]
    MissingArrow(String),

    #[error("unrecognized timestamp: '{0}'")]
    Unrecognized(String),

    #[error("bad {field} in timestamp '{input}'")]
    BadComponent { field: &'static str, input: String },
}
