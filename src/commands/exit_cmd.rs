use crate::commands::{Command, CommandContext, CommandResult};

/// Ends the session by returning `Flow::Exit` to the loop.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str { "exit" }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::exit()
    }
}
