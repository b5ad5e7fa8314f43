//! Command layer errors
//!
//! None of these end a session; they are rendered as a single line and the
//! loop moves on.

use thiserror::Error;

use crate::parser::LexerError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("environment variable {name} is not set")]
    UnboundVariable { name: String },

    #[error("syntax error: {0}")]
    Syntax(#[from] LexerError),
}
