//! CLI entry point for twig

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use twig::{TreeError, TreeFormatter, TreeWalker, WalkerConfig};

/// Verbosity of diagnostic logging on stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Display directory tree structure")]
#[command(version)]
struct Args {
    /// Path(s) to display the tree for (defaults to current directory)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Limit the depth of the tree
    #[arg(short = 'd', long = "depth", value_name = "N")]
    depth: Option<usize>,

    /// Patterns to exclude from the tree (can be used multiple times).
    /// Without this flag, __pycache__, *venv* and .git are excluded.
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN", action = ArgAction::Append)]
    exclude: Vec<String>,

    /// Diagnostic log level written to stderr
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

impl Args {
    /// Walker configuration with default exclusions applied when none were given.
    fn walker_config(&self) -> WalkerConfig {
        let mut config = if self.exclude.is_empty() {
            WalkerConfig::with_default_excludes()
        } else {
            WalkerConfig {
                exclude: self.exclude.clone(),
                ..Default::default()
            }
        };
        config.max_depth = self.depth;
        config
    }
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

/// Failure while handling one root.
enum RootFailure {
    Tree(TreeError),
    Output(io::Error),
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    let walker = TreeWalker::new(args.walker_config());
    let formatter = TreeFormatter::new();
    let mut failed = false;

    // Each root is independent: a failure is reported and the next root still runs.
    for path in &args.paths {
        let result = walker
            .walk(path)
            .map_err(RootFailure::Tree)
            .and_then(|root| formatter.print(&root).map_err(RootFailure::Output));

        match result {
            Ok(()) => {}
            Err(RootFailure::Tree(e)) => {
                eprintln!("twig: {}", e);
                failed = true;
            }
            Err(RootFailure::Output(e)) => {
                // Broken pipe or similar; later roots could not be written either.
                eprintln!("twig: error writing output: {}", e);
                process::exit(1);
            }
        }
    }

    if failed {
        process::exit(1);
    }
}
