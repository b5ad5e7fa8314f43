use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vfs_shell::repl::{run_interactive, run_script_file};
use vfs_shell::{ShellConfig, ShellOptions, TreeStore, VfsShell};

#[derive(Parser, Debug)]
#[command(name = "vfs-shell")]
#[command(about = "An in-memory virtual filesystem driven by a small shell")]
#[command(version)]
struct Cli {
    /// CSV description of the initial tree (header: path,type,content)
    #[arg(long = "vfs")]
    vfs: PathBuf,

    /// Replay commands from this file instead of starting a prompt
    #[arg(long = "script")]
    script: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Virtual path substituted for $HOME and ~
    #[arg(long = "home")]
    home: Option<String>,

    /// Append every entered line to this file
    #[arg(long = "history-file")]
    history_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" (defaults to RUST_LOG, then "warn")
    #[arg(long = "log-level")]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.log_level.as_deref());
    debug!("Parsed CLI arguments: {cli:?}");

    let mut config = match &cli.config {
        Some(path) => match ShellConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => ShellConfig::default(),
    };
    if let Some(home) = cli.home {
        config.home = home;
    }
    if let Some(history_file) = cli.history_file {
        config.history_file = Some(history_file);
    }

    let mut store = TreeStore::new();
    if let Err(e) = store.load_csv_file(&cli.vfs) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let mut shell = VfsShell::new(ShellOptions {
        config,
        store: Some(store),
        ..Default::default()
    });

    let outcome = match &cli.script {
        Some(script) => run_script_file(&mut shell, script),
        None => run_interactive(&mut shell),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time().compact())
        .with(filter)
        .init();
}
