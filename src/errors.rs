use std::fmt::Display;

use thiserror::Error;

/// Errors raised at the edges of the crate; assertion failures are reported, not returned.
#[derive(Debug, Error)]
pub enum Error {
    /// Text that is not one of the accepted boolean spellings.
    #[error("invalid boolean: {0:?}")]
    InvalidBool(String),

    /// A `Serialize` impl refused to describe itself to the kind probe.
    #[error("serialize error: {0}")]
    Serialize(String),

    /// Command line input that does not parse as JSON.
    #[error("invalid {side} JSON: {source}")]
    InvalidJson {
        side: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Error::Serialize(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
