//! vfs-shell - an in-process emulator of a hierarchical filesystem
//!
//! The tree lives entirely in memory, is built once from a CSV description
//! and is driven by a small line-oriented shell (`ls`, `cd`, `touch`,
//! `tree`, `date`, `history`, `exit`).

pub mod commands;
pub mod config;
pub mod fs;
pub mod interpreter;
pub mod parser;
pub mod repl;
pub mod vfs_shell;

pub use config::ShellConfig;
pub use fs::{Node, NodeKind, TreeStore};
pub use vfs_shell::{ShellOptions, VfsShell};
