use anyhow::{bail, Result};
use clap::Parser;
use othello_engine::{Settings, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use othello_player::connectors::Console;
use othello_player::{Session, VersionInfo};
use std::io;
use tracing_subscriber::EnvFilter;

/// A simple Othello CLI game.
#[derive(Parser, Debug)]
#[command(name = "othello", disable_version_flag = true)]
struct Args {
    /// Board size, from 4 to 10
    size: Option<usize>,

    /// Let the computer play both sides
    #[arg(short, long, conflicts_with = "default")]
    autoplay: bool,

    /// Autoplay and only print the result and log fingerprint
    #[arg(short, long)]
    check: bool,

    /// Play black against the computer without setup questions
    #[arg(short, long)]
    default: bool,

    /// Show the game log at the end
    #[arg(short, long)]
    log: bool,

    /// Hide disk placement hints
    #[arg(short, long)]
    no_helpers: bool,

    /// Deterministic computer moves without delays
    #[arg(short, long)]
    test: bool,

    /// Print version and exit
    #[arg(short, long)]
    version: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.version {
        println!("{}", VersionInfo::current());
        return Ok(());
    }

    if !args.check {
        println!("OTHELLO GAME - RUST");
    }

    let console = Console::new(io::stdin().lock(), io::stdout()).shared();
    let board_size = match args.size {
        Some(size) => {
            if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
                bail!("Unsupported board size: {}", size);
            }
            if !args.check {
                println!("Using board size: {}", size);
            }
            size
        }
        None if args.autoplay || args.check || args.default => DEFAULT_BOARD_SIZE,
        None => console.borrow_mut().ask_board_size()?,
    };

    let settings = Settings {
        board_size,
        autoplay_mode: args.autoplay || args.check,
        check_mode: args.check,
        show_helpers: !args.no_helpers,
        show_log: args.log || args.check,
        test_mode: args.test || args.check,
        use_defaults: args.default,
    };

    Session::new(settings, console)?.run()
}
