//! Interpreter support for the command layer: word expansion and errors.

pub mod errors;
pub mod expansion;

pub use errors::ShellError;
pub use expansion::{expand_args, Expanded};
