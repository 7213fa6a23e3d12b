//! Error types for the console process itself.
//!
//! API failures are not represented here: views turn every `ApiError` into a
//! rendered panel. This type covers what can stop the process: bad
//! configuration and terminal I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration loaded but holds unusable values.
    #[error("invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// Reading input or writing a page failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
