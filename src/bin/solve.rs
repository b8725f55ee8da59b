use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use five_in_a_row::ai::{MinimaxAgent, SearchResult};
use five_in_a_row::config::AppConfig;
use five_in_a_row::game::parse::parse_board;
use five_in_a_row::game::{winner, GameState, Player};

/// Find the best move for a board position and print it as JSON.
#[derive(Parser)]
#[command(name = "solve", about = "Search a five-in-a-row position")]
struct Cli {
    /// Board file (rows of comma-separated -1/0/1); reads stdin when omitted
    board: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "five_in_a_row.toml")]
    config: PathBuf,

    /// Side to move
    #[arg(long, value_enum, default_value = "machine")]
    player: Side,

    /// Override search.max_depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Override search.seed
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Human,
    Machine,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Player::Human,
            Side::Machine => Player::Machine,
        }
    }
}

#[derive(Serialize)]
struct Report {
    player: Player,
    empty_cells: usize,
    depth: usize,
    winner: Option<Player>,
    /// 1-based cell number of the chosen move, as typed in the game
    move_number: Option<usize>,
    result: Option<SearchResult>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(depth) = cli.max_depth {
        config.search.max_depth = Some(depth);
    }
    if let Some(seed) = cli.seed {
        config.search.seed = Some(seed);
    }
    config.validate().context("validating configuration")?;

    let text = match &cli.board {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading board from {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading board from stdin")?;
            text
        }
    };
    let board =
        parse_board(&text, config.game.size, config.game.win_length).context("parsing board")?;

    let mut agent = match config.search.seed {
        Some(seed) => MinimaxAgent::with_seed(config.search.max_depth, seed),
        None => MinimaxAgent::new(config.search.max_depth),
    };

    let size = board.size();
    let empty_cells = board.empty_count();
    let winner = winner(&board);
    let state = GameState::from_board(board, cli.player.into());
    let result = agent.search(&state);

    let report = Report {
        player: state.current_player(),
        empty_cells,
        depth: agent.depth_for(empty_cells),
        winner,
        move_number: result.and_then(|r| r.best_move()).map(|mv| mv.number(size)),
        result,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    }
    .context("serializing result")?;
    println!("{json}");
    Ok(())
}
