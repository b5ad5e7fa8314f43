use crate::commands::{Command, CommandContext, CommandResult};

pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str { "history" }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        if ctx.args.iter().any(|a| a == "--help") {
            return CommandResult::success(
                "history - display command history\n\nUsage: history [n]\n\nWith n, show only the last n entries.\n".to_string()
            );
        }

        let history = ctx.history;
        let count = match ctx.args.first() {
            Some(arg) => match arg.parse::<usize>() {
                Ok(n) => n.min(history.len()),
                Err(_) => {
                    return CommandResult::error(format!("history: {}: numeric argument required\n", arg));
                }
            },
            None => history.len(),
        };

        let start = history.len().saturating_sub(count);
        let mut stdout = String::new();
        for (i, cmd) in history.iter().enumerate().skip(start) {
            stdout.push_str(&format!("{:5}  {}\n", i + 1, cmd));
        }

        CommandResult::success(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{make_ctx, sample_store};

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_history_one_indexed() {
        let mut store = sample_store();
        let mut cwd = Vec::new();
        let history = lines(&["ls", "foo", "history"]);
        let result = HistoryCommand.execute(make_ctx(&[], &mut store, &mut cwd, &history));
        assert_eq!(result.stdout, "    1  ls\n    2  foo\n    3  history\n");
    }

    #[test]
    fn test_history_last_n() {
        let mut store = sample_store();
        let mut cwd = Vec::new();
        let history = lines(&["a", "b", "c"]);
        let result = HistoryCommand.execute(make_ctx(&["2"], &mut store, &mut cwd, &history));
        assert_eq!(result.stdout, "    2  b\n    3  c\n");
    }

    #[test]
    fn test_history_bad_count() {
        let mut store = sample_store();
        let mut cwd = Vec::new();
        let result = HistoryCommand.execute(make_ctx(&["x"], &mut store, &mut cwd, &[]));
        assert_eq!(result.exit_code, 1);
    }
}
