//! N-in-a-row console game
//!
//! Play generalized tic-tac-toe against the minimax engine on stdin/stdout.

use std::io;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use nrow::ui::{run, GameSettings};
use nrow::{Mark, PruneScope};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "N-in-a-row against a minimax opponent")]
struct Cli {
    /// Board size N (prompted for on stdin when omitted)
    #[arg(long)]
    size: Option<usize>,

    /// Search depth in plies (defaults to the board size)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    depth: Option<u32>,

    /// Mark played by the human; X always moves first
    #[arg(long, value_enum, default_value_t = Side::X)]
    human: Side,

    /// Stop scanning a node on cutoff instead of only the current row
    #[arg(long)]
    full_cutoff: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    let settings = GameSettings {
        size: cli.size,
        depth: cli.depth,
        human: cli.human.into(),
        prune_scope: if cli.full_cutoff {
            PruneScope::Tree
        } else {
            PruneScope::Row
        },
    };

    run(io::stdin().lock(), io::stdout().lock(), settings)?;
    Ok(())
}
