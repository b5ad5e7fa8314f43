// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

const HELP: &str = "Usage: ls [PATH]\n\n\
List directory contents, sorted by name, on a single line.\n\
With no PATH, list the current directory. A file PATH lists just that file.\n";

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(HELP.to_string());
        }
        if ctx.args.len() > 1 {
            return CommandResult::error("ls: too many arguments\n".to_string());
        }

        let target = ctx.args.first().map(String::as_str);
        match ctx.store.list_directory(target, ctx.cwd) {
            Ok(names) if names.is_empty() => CommandResult::success(String::new()),
            Ok(names) => CommandResult::success(format!("{}\n", names.join(" "))),
            Err(e) => CommandResult::error(format!("ls: cannot access {}\n", e)),
        }
    }
}
