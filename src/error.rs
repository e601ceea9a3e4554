//! Errors raised while parsing versions, operators and requirements, or while
//! looking a version up from a source.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("version input is absent")]
    NullInput,

    #[error("invalid version format {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("unknown comparison operator {symbol:?}")]
    UnknownOperator { symbol: String },

    #[error("version source did not yield a version")]
    VersionNotFound,

    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

impl Error {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
