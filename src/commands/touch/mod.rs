// src/commands/touch/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{normalize_path, NodeKind};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "Usage: touch FILE...\n\n\
                 Create each FILE as an empty file if it does not exist.\n\
                 Existing files are left as they are.\n".to_string()
            );
        }

        let files: Vec<&String> = ctx.args.iter().filter(|a| *a != "--").collect();
        if files.is_empty() {
            return CommandResult::error("touch: missing file operand\n".to_string());
        }

        let mut stderr = String::new();
        let mut exit_code = 0;

        for file in files {
            let components = normalize_path(file, ctx.cwd);
            if let Err(e) = ctx.store.create_node(&components, NodeKind::File, None) {
                stderr.push_str(&format!("touch: cannot touch {}\n", e.with_path(file.as_str())));
                exit_code = 1;
            }
        }

        CommandResult::with_exit_code(String::new(), stderr, exit_code)
    }
}
