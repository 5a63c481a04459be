//! CLI Adapter.

mod check;
mod paths;

use std::borrow::Cow;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, ProjectPaths};

#[derive(Parser)]
#[command(name = "build-dori")]
#[command(version)]
#[command(
    about = "Resolve Greatdori checkout paths for the build tool",
    long_about = None
)]
struct Cli {
    /// Resolve as if the tool's source file lived at FILE
    #[arg(long, global = true, value_name = "FILE")]
    from: Option<PathBuf>,
    /// Log resolution details to stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every resolved path
    #[clap(visible_alias = "p")]
    Paths {
        /// Emit single-line JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the source root (the directory holding the checkout)
    #[clap(visible_alias = "sr")]
    SourceRoot,
    /// Print the checkout's repo name
    #[clap(visible_alias = "rn")]
    RepoName,
    /// Check whether a directory is a Greatdori checkout
    #[clap(visible_alias = "c")]
    Check {
        /// Directory to check (default: the resolved project root)
        dir: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let paths = resolve(cli.from);
    let result: Result<i32, AppError> = match cli.command {
        Commands::Paths { json } => paths::run_paths(&paths, json).map(|_| 0),
        Commands::SourceRoot => paths::run_source_root(&paths).map(|_| 0),
        Commands::RepoName => paths::run_repo_name(&paths).map(|_| 0),
        Commands::Check { dir } => Ok(check::run_check(&paths, dir)),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn resolve(from: Option<PathBuf>) -> Cow<'static, ProjectPaths> {
    match from {
        Some(module_file) => Cow::Owned(crate::app::api::resolve_from(&module_file)),
        None => Cow::Borrowed(crate::app::api::current()),
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}
