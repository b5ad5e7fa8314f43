//! Command line parsing.

pub mod lexer;

pub use lexer::{tokenize, Lexer, LexerError};
