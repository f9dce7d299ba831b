use thiserror::Error;

/// Errors raised while reading a matrix or reducing it.
#[derive(Error, Debug)]
pub enum Error {
    /// The input grid could not be turned into a matrix.
    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A row operation was asked to do something the engine never does.
    #[error("invalid row operation: {0}")]
    InvalidOperation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
