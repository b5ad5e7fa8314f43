// src/commands/date/mod.rs
use chrono::{DateTime, Local, TimeZone, Utc};

use crate::commands::{Command, CommandContext, CommandResult};

pub struct DateCommand;

/// e.g. "Tue Jan 15 12:00:00 +01:00 2024"
pub const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

const HELP: &str = "Usage: date [-u]\n\n\
Display the current host date and time.\n\n\
Options:\n  -u         print UTC\n      --help display this help\n";

impl Command for DateCommand {
    fn name(&self) -> &'static str { "date" }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut utc = false;
        for a in &ctx.args {
            match a.as_str() {
                "--help" => return CommandResult::success(HELP.into()),
                "-u" | "--utc" => utc = true,
                other if other.starts_with('-') => {
                    return CommandResult::error(format!("date: invalid option '{}'\n", other));
                }
                other => return CommandResult::error(format!("date: extra operand '{}'\n", other)),
            }
        }

        let output = if utc {
            format_date(&Utc::now())
        } else {
            format_date(&Local::now())
        };
        CommandResult::success(format!("{}\n", output))
    }
}

pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{make_ctx, sample_store};

    #[test]
    fn test_format_date_fixed() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(format_date(&dt), "Mon Jan 15 12:00:00 UTC 2024");
    }

    #[test]
    fn test_date_prints_one_line() {
        let mut store = sample_store();
        let mut cwd = Vec::new();
        let result = DateCommand.execute(make_ctx(&["-u"], &mut store, &mut cwd, &[]));
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.ends_with('\n'));
        assert_eq!(result.stdout.lines().count(), 1);
        assert!(result.stdout.contains("UTC"));
    }

    #[test]
    fn test_date_rejects_operands() {
        let mut store = sample_store();
        let mut cwd = Vec::new();
        let result = DateCommand.execute(make_ctx(&["tomorrow"], &mut store, &mut cwd, &[]));
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("extra operand"));
    }
}
