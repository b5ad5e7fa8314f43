//! VFS Shell Session
//!
//! Main entry point for the emulator. Ties together the tree store, the
//! lexer, argument expansion and the command registry. One `VfsShell` is
//! one session: it owns the tree, the current path and the history.

use std::collections::HashMap;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::commands::{create_builtin_registry, CommandContext, CommandRegistry, CommandResult};
use crate::config::ShellConfig;
use crate::fs::{render_path, TreeStore};
use crate::interpreter::{expand_args, ShellError};
use crate::parser::tokenize;

/// Exit status reported for an unknown command.
pub const NOT_FOUND_EXIT_CODE: i32 = 127;

/// Options for creating a session.
#[derive(Default)]
pub struct ShellOptions {
    pub config: ShellConfig,
    /// Environment used for `$VAR` lookups (defaults to the host environment)
    pub env: Option<HashMap<String, String>>,
    /// Initial tree (defaults to an empty root)
    pub store: Option<TreeStore>,
}

pub struct VfsShell {
    store: TreeStore,
    cwd: Vec<String>,
    history: Vec<String>,
    registry: CommandRegistry,
    env: HashMap<String, String>,
    config: ShellConfig,
}

impl VfsShell {
    pub fn new(options: ShellOptions) -> Self {
        Self {
            store: options.store.unwrap_or_default(),
            cwd: Vec::new(),
            history: Vec::new(),
            registry: create_builtin_registry(),
            env: options.env.unwrap_or_else(|| std::env::vars().collect()),
            config: options.config,
        }
    }

    /// Run one input line. Never fails: every problem is folded into the
    /// returned result's `stderr`.
    pub fn exec_line(&mut self, line: &str) -> CommandResult {
        let line = line.trim();
        if line.is_empty() {
            return CommandResult::success(String::new());
        }
        self.record_history(line);

        let words = match tokenize(line) {
            Ok(words) => words,
            Err(e) => return CommandResult::error(format!("vfs: {}\n", ShellError::from(e))),
        };
        let Some((name, raw_args)) = words.split_first() else {
            return CommandResult::success(String::new());
        };

        let expanded = expand_args(raw_args, &self.config.home, &self.env);
        let mut warnings = String::new();
        for w in &expanded.warnings {
            debug!("{}", w);
            warnings.push_str(&format!("warning: {}\n", w));
        }

        let Some(command) = self.registry.get(name) else {
            debug!(command = %name, "command not found");
            return CommandResult::with_exit_code(
                String::new(),
                format!("{}vfs: {}: command not found\n", warnings, name),
                NOT_FOUND_EXIT_CODE,
            );
        };

        debug!(command = %name, args = ?expanded.args, "dispatch");
        let mut result = command.execute(CommandContext {
            args: expanded.args,
            store: &mut self.store,
            cwd: &mut self.cwd,
            history: &self.history,
        });
        if !warnings.is_empty() {
            result.stderr.insert_str(0, &warnings);
        }
        result
    }

    /// Prompt text, e.g. `vfs:/a/c$ `.
    pub fn prompt(&self) -> String {
        format!("{}:{}$ ", self.config.prompt, self.cwd_path())
    }

    /// Current directory as an absolute path.
    pub fn cwd_path(&self) -> String {
        render_path(&self.cwd)
    }

    pub fn store(&self) -> &TreeStore {
        &self.store
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    fn record_history(&mut self, line: &str) {
        self.history.push(line.to_string());
        if let Some(path) = &self.config.history_file {
            if let Err(e) = append_history_log(path, line) {
                warn!("Failed to write history log {}: {}", path.display(), e);
            }
        }
    }
}

fn append_history_log(path: &Path, line: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", line)
}

// ============================================================================
// Tests
// ============================================================================
