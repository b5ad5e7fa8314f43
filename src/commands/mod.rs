// src/commands/mod.rs
pub mod cd_cmd;
pub mod date;
pub mod exit_cmd;
pub mod history_cmd;
pub mod ls;
pub mod registry;
pub mod touch;
pub mod tree_cmd;
pub mod types;

pub use registry::{create_builtin_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult, Flow};
