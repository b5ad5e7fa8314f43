//! cd - Change the current directory
//!
//! Supports:
//! - cd          - stay where we are
//! - cd .        - stay where we are
//! - cd <path>   - absolute or relative, with `.` and `..`

use tracing::debug;

use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::render_path;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.len() > 1 {
            return CommandResult::error("cd: too many arguments\n".to_string());
        }
        let target = ctx.args.first().map(String::as_str).unwrap_or("");

        match ctx.store.change_directory(target, ctx.cwd) {
            Ok(new_dir) => {
                debug!(from = %render_path(ctx.cwd), to = %render_path(&new_dir), "cd");
                *ctx.cwd = new_dir;
                CommandResult::success(String::new())
            }
            Err(e) => CommandResult::error(format!("cd: {}\n", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{make_ctx, sample_store};

    #[test]
    fn test_cd_relative_and_back() {
        let mut store = sample_store();
        let mut cwd = Vec::new();
        let result = CdCommand.execute(make_ctx(&["a/c"], &mut store, &mut cwd, &[]));
        assert_eq!(result.exit_code, 0);
        assert_eq!(render_path(&cwd), "/a/c");

        CdCommand.execute(make_ctx(&[".."], &mut store, &mut cwd, &[]));
        assert_eq!(render_path(&cwd), "/a");
    }

    #[test]
    fn test_cd_without_operand_stays() {
        let mut store = sample_store();
        let mut cwd = vec!["a".to_string()];
        let result = CdCommand.execute(make_ctx(&[], &mut store, &mut cwd, &[]));
        assert_eq!(result.exit_code, 0);
        assert_eq!(cwd, vec!["a".to_string()]);
    }

    #[test]
    fn test_cd_above_root() {
        let mut store = sample_store();
        let mut cwd = Vec::new();
        let result = CdCommand.execute(make_ctx(&["../../.."], &mut store, &mut cwd, &[]));
        assert_eq!(result.exit_code, 0);
        assert!(cwd.is_empty());
    }

    #[test]
    fn test_cd_failures_keep_cwd() {
        let mut store = sample_store();
        let mut cwd = vec!["a".to_string()];

        let result = CdCommand.execute(make_ctx(&["missing"], &mut store, &mut cwd, &[]));
        assert_eq!(result.stderr, "cd: missing: No such file or directory\n");
        assert_eq!(cwd, vec!["a".to_string()]);

        let result = CdCommand.execute(make_ctx(&["b.txt"], &mut store, &mut cwd, &[]));
        assert_eq!(result.stderr, "cd: b.txt: Not a directory\n");
        assert_eq!(cwd, vec!["a".to_string()]);

        let result = CdCommand.execute(make_ctx(&["b.txt/x"], &mut store, &mut cwd, &[]));
        assert_eq!(result.stderr, "cd: b.txt/x: Not a directory\n");
        assert_eq!(cwd, vec!["a".to_string()]);
    }
}
