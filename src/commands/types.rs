// src/commands/types.rs
use crate::fs::TreeStore;

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Flow {
    #[default]
    Continue,
    Exit,
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub flow: Flow,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0, flow: Flow::Continue }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1, flow: Flow::Continue }
    }

    pub fn with_exit_code(stdout: String, stderr: String, exit_code: i32) -> Self {
        Self { stdout, stderr, exit_code, flow: Flow::Continue }
    }

    /// Ask the loop to end the session.
    pub fn exit() -> Self {
        Self { stdout: String::new(), stderr: String::new(), exit_code: 0, flow: Flow::Exit }
    }

    pub fn is_exit(&self) -> bool {
        self.flow == Flow::Exit
    }
}

/// Command execution context: borrowed session state for one invocation.
pub struct CommandContext<'a> {
    pub args: Vec<String>,
    pub store: &'a mut TreeStore,
    pub cwd: &'a mut Vec<String>,
    pub history: &'a [String],
}

/// Command trait
pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
