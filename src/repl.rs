//! Session loops
//!
//! - interactive: line editor with the current path in the prompt
//! - script replay: runs a file line by line, echoing each command
//!
//! Both stop on `exit`. Per-line failures are printed and the loop goes on.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use thiserror::Error;
use tracing::{debug, warn};

use crate::commands::CommandResult;
use crate::vfs_shell::VfsShell;

#[derive(Error, Debug)]
pub enum ReplError {
    #[error("cannot read script '{name}': {error}")]
    Script {
        name: String,
        #[source]
        error: io::Error,
    },

    #[error("cannot read input: {0}")]
    Input(#[source] io::Error),

    #[error("line editor failed: {0}")]
    Editor(#[from] ReadlineError),

    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Write a command's output to the given streams.
pub fn emit<W: Write, E: Write>(result: &CommandResult, out: &mut W, err: &mut E) -> io::Result<()> {
    if !result.stdout.is_empty() {
        out.write_all(result.stdout.as_bytes())?;
        out.flush()?;
    }
    if !result.stderr.is_empty() {
        err.write_all(result.stderr.as_bytes())?;
        err.flush()?;
    }
    Ok(())
}

/// Replay a script. Blank lines and `#` comments are skipped; every other
/// line is echoed after the prompt and then run. Bytes that are not valid
/// UTF-8 are replaced, so a bad line fails on its own like any other.
pub fn run_script<R, W, E>(shell: &mut VfsShell, script: R, out: &mut W, err: &mut E) -> Result<(), ReplError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    for (idx, raw) in script.split(b'\n').enumerate() {
        let raw = raw.map_err(ReplError::Input)?;
        let line = String::from_utf8_lossy(&raw);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        writeln!(out, "{}{}", shell.prompt(), trimmed)?;
        let result = shell.exec_line(trimmed);
        emit(&result, out, err)?;

        if result.is_exit() {
            debug!(line = idx + 1, "script stopped by exit");
            break;
        }
    }
    Ok(())
}

/// Replay a script file against `shell`, printing to stdout/stderr.
pub fn run_script_file(shell: &mut VfsShell, path: &Path) -> Result<(), ReplError> {
    let name = path.display().to_string();
    let file = File::open(path).map_err(|error| ReplError::Script { name: name.clone(), error })?;
    run_script(shell, BufReader::new(file), &mut io::stdout(), &mut io::stderr()).map_err(|e| match e {
        ReplError::Input(error) => ReplError::Script { name, error },
        other => other,
    })
}

/// Run the interactive REPL until `exit` or end of input.
pub fn run_interactive(shell: &mut VfsShell) -> Result<(), ReplError> {
    let mut rl: Editor<(), DefaultHistory> = Editor::new()?;
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    loop {
        match rl.readline(&shell.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = rl.add_history_entry(line.as_str()) {
                        warn!("Failed to add history entry: {}", e);
                    }
                }

                let result = shell.exec_line(&line);
                emit(&result, &mut stdout, &mut stderr)?;
                if result.is_exit() {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!();
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}
