use std::io;

use thiserror::Error;

use crate::cli::ParseError;
use crate::pass::GenerateError;

/// Errors surfaced to the user by the CLI and the interactive form.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("Please generate a password first.")]
    NoPassword,
    #[error("Clipboard error: {0}")]
    Clipboard(String),
    #[error(transparent)]
    Args(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Heading for the error box.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Generate(err) => err.title(),
            Error::NoPassword => "No Password",
            Error::Clipboard(_) => "Clipboard Unavailable",
            Error::Args(_) => "Invalid Arguments",
            Error::Io(_) => "I/O Error",
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
