//! kifu-replay: step through recorded Reversi games in the terminal.
//!
//! ## Usage
//!
//! - `kifu-replay list store.json` - Show the folder tree
//! - `kifu-replay show store.json Openings/Tiger 0 --at 12` - Board after 12 plies
//! - `kifu-replay moves F5 D6 C3 --auto` - Animate an inline move list

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use web_time::Instant;

use reversi_kifu::autoplay::AutoPlay;
use reversi_kifu::config::ViewerConfig;
use reversi_kifu::render::{move_info, render_board};
use reversi_kifu::replay::{ReplayOutcome, Session};
use reversi_kifu::store::Store;

/// Replay viewer for Reversi game records
#[derive(Parser)]
#[command(name = "kifu-replay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List folders and records in a store
    List {
        store: PathBuf,
        /// Only records whose name or comment contains this text
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Replay one record from a store
    Show {
        store: PathBuf,
        /// Folder as `big/small`
        folder: String,
        /// Record index within the folder
        index: usize,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Replay an inline move list
    Moves {
        moves: Vec<String>,
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(clap::Args)]
struct ViewArgs {
    /// Number of plies to apply (clamped; defaults to the whole record)
    #[arg(long, allow_negative_numbers = true)]
    at: Option<i64>,
    /// Step through every ply at the configured interval
    #[arg(long)]
    auto: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ViewerConfig::default(),
    };

    match cli.command {
        Commands::List { store, search } => list(&load_store(&store)?, &search, &config),
        Commands::Show {
            store,
            folder,
            index,
            view,
        } => {
            let store = load_store(&store)?;
            let Some((big, small)) = folder.split_once('/') else {
                bail!("folder must be given as big/small, got {folder:?}");
            };
            let kifu = store.kifu(big, small, index)?;
            println!("{}", kifu.title(index));
            for (label, value) in [("ID", &kifu.id), ("Comment", &kifu.comment), ("Sig", &kifu.sig)] {
                if let Some(value) = value {
                    println!("{label}: {value}");
                }
            }
            view_moves(kifu.moves.clone(), &view, &config);
            Ok(())
        }
        Commands::Moves { moves, view } => {
            view_moves(moves, &view, &config);
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Result<ViewerConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    ViewerConfig::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn load_store(path: &Path) -> Result<Store> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading store {}", path.display()))?;
    let store =
        Store::from_json(&text).with_context(|| format!("parsing store {}", path.display()))?;
    info!(folders = store.big_folders.len(), "store loaded");
    Ok(store)
}

fn list(store: &Store, search: &str, config: &ViewerConfig) -> Result<()> {
    for big in &store.big_folders {
        match &big.default_color {
            Some(color) => println!("{} ({color})", big.name),
            None => println!("{}", big.name),
        }
        for small in store.small_folders(&big.name) {
            println!("  {small}");
            for summary in store.summaries(&big.name, small, search, config.comment_preview_chars) {
                println!("    [{}] {}  {}", summary.index, summary.title, summary.preview);
            }
        }
    }
    Ok(())
}

fn view_moves(moves: Vec<String>, view: &ViewArgs, config: &ViewerConfig) {
    let session = Session::new(moves);
    if view.auto {
        auto_play(session, config);
        return;
    }

    let target = view.at.unwrap_or(session.total_moves() as i64);
    let (_, outcome) = session.seek(target);
    print_outcome(&outcome);
}

fn auto_play(session: Session, config: &ViewerConfig) {
    let mut auto = AutoPlay::new(config.auto_play_interval());
    print_outcome(&session.outcome());
    auto.start(Instant::now());

    let mut session = session;
    while auto.is_running() {
        std::thread::sleep(auto.interval());
        let (next, outcome) = auto.tick(Instant::now(), session);
        session = next;
        if let Some(outcome) = outcome {
            print_outcome(&outcome);
        }
    }
}

fn print_outcome(outcome: &ReplayOutcome) {
    print!("{}", render_board(&outcome.board));
    let (black, white) = outcome.board.count();
    println!(
        "{}  next: {:?}  B {black} / W {white}",
        move_info(outcome.move_index, outcome.total_moves),
        outcome.next_player
    );
    if let Some(last) = outcome.last_move {
        println!("last: {last}");
    }
    for warning in &outcome.warnings {
        println!("skipped #{} {:?}: {}", warning.index + 1, warning.notation, warning.reason);
    }
    println!();
}
