use alloc::string::String;

use thiserror::Error;

/// An error raised by a state function through [`Lexer::error`].
///
/// The display form is exactly the message the state function supplied.
///
/// [`Lexer::error`]: crate::Lexer::error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LexError {
    message: String,
    bytes_read: usize,
}

impl LexError {
    pub(crate) fn new(message: String, bytes_read: usize) -> Self {
        Self {
            message,
            bytes_read,
        }
    }

    /// The message passed to [`Lexer::error`](crate::Lexer::error).
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// How many input bytes had been decoded when the error was raised.
    #[must_use]
    pub fn bytes_read(&self) -> usize {
        self.bytes_read
    }
}
