//! filenav CLI - Interactive terminal file explorer
//!
//! Usage:
//!   filenav                  # Explore the current directory
//!   filenav /var/log         # Start somewhere else
//!   filenav --max-depth 3    # Bound how deep `find` descends
//!   filenav -vv              # Debug logging on stderr

mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use filenav::{FindLimits, RealFs, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// filenav - Interactive file explorer
#[derive(Parser, Debug)]
#[command(name = "filenav")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory to start in (defaults to the current directory)
    #[arg()]
    dir: Option<PathBuf>,

    /// Maximum number of directory levels `find` descends
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn limits(&self) -> FindLimits {
        match self.max_depth {
            Some(depth) => FindLimits::new().max_depth(depth),
            None => FindLimits::new(),
        }
    }

    fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true)
        .with_max_level(args.log_level())
        .init();
    if args.verbose > 3 {
        warn!(
            verbosity = args.verbose,
            "Too much verbosity, capping to TRACE (equivalent to -vvv)"
        );
    }

    let mut builder = Session::builder()
        .fs(Arc::new(RealFs::new()))
        .limits(args.limits());
    if let Some(dir) = &args.dir {
        builder = builder.cwd(dir);
    }
    let mut session = builder.build().context("Failed to start session")?;

    let mut input = repl::terminal_input().context("Failed to open terminal")?;
    let stdout = std::io::stdout();
    repl::run(&mut session, input.as_mut(), &mut stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["filenav"]).unwrap();
        assert_eq!(args.dir, None);
        assert_eq!(args.limits(), FindLimits::new());
        assert_eq!(args.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_start_dir_and_depth() {
        let args = Args::try_parse_from(["filenav", "/srv", "--max-depth", "2"]).unwrap();
        assert_eq!(args.dir, Some(PathBuf::from("/srv")));
        assert_eq!(args.limits(), FindLimits::new().max_depth(2));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = Args::try_parse_from(["filenav", "-vv"]).unwrap();
        assert_eq!(args.log_level(), tracing::Level::DEBUG);
        let args = Args::try_parse_from(["filenav", "-vvvvv"]).unwrap();
        assert_eq!(args.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_rejects_bad_depth() {
        assert!(Args::try_parse_from(["filenav", "--max-depth", "deep"]).is_err());
    }
}
