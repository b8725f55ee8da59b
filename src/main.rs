use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use five_in_a_row::ai::MinimaxAgent;
use five_in_a_row::config::{AppConfig, GameConfig};
use five_in_a_row::game::parse::parse_board;
use five_in_a_row::game::{Board, GameState, Player};
use five_in_a_row::ui::console::{write_farewell, Preset};
use five_in_a_row::ui::{App, Console, Symbols};

/// Play five in a row against an exhaustive minimax opponent.
#[derive(Parser)]
#[command(name = "five_in_a_row", version, about)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "five_in_a_row.toml")]
    config: PathBuf,

    /// Initial board file (rows of comma-separated -1/0/1); skips the board prompt
    #[arg(long)]
    board: Option<PathBuf>,

    /// Your symbol: X or O
    #[arg(long)]
    symbol: Option<char>,

    /// Who moves first
    #[arg(long, value_enum)]
    first: Option<Side>,

    /// Full-screen terminal UI instead of the line-based dialog
    #[arg(long)]
    tui: bool,

    /// Override search.max_depth
    #[arg(long)]
    max_depth: Option<usize>,

    /// Override search.seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
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

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref(), cli.tui)?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.max_depth {
        config.search.max_depth = Some(depth);
    }
    if let Some(seed) = cli.seed {
        config.search.seed = Some(seed);
    }
    config.validate().context("validating configuration")?;

    let symbols = match cli.symbol {
        Some(c) => match Symbols::for_human(c) {
            Some(symbols) => Some(symbols),
            None => bail!("unknown symbol '{}' (expected 'X' or 'O')", c),
        },
        None => None,
    };
    let board = cli
        .board
        .as_deref()
        .map(|path| load_board(path, &config.game))
        .transpose()?;

    let agent = match config.search.seed {
        Some(seed) => MinimaxAgent::with_seed(config.search.max_depth, seed),
        None => MinimaxAgent::new(config.search.max_depth),
    };

    info!(
        size = config.game.size,
        win_length = config.game.win_length,
        max_depth = ?config.search.max_depth,
        tui = cli.tui,
        "starting"
    );

    if cli.tui {
        let board = match board {
            Some(board) => board,
            None => Board::with_rules(config.game.size, config.game.win_length),
        };
        let first = cli.first.map(Player::from).unwrap_or(Player::Human);
        let state = GameState::from_board(board, first);
        let app = App::new(state, Box::new(agent), symbols.unwrap_or_default());
        return run_tui(app);
    }

    run_console(
        &config,
        agent,
        Preset {
            board,
            symbols,
            first: cli.first.map(Player::from),
        },
    )
}

fn run_console(config: &AppConfig, mut agent: MinimaxAgent, preset: Preset) -> Result<()> {
    exit_on_interrupt()?;
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), &config.ui);

    let Some(setup) = console
        .setup(config.game.size, config.game.win_length, preset)
        .context("reading game setup")?
    else {
        return Ok(());
    };

    let state = GameState::from_board(setup.board, setup.first);
    console
        .play(state, setup.symbols, &mut agent)
        .context("playing game")?;
    Ok(())
}

/// Ctrl-C at a console prompt ends the program with the farewell message.
/// The full-screen UI reads Ctrl-C as a key in raw mode and does not need this.
fn exit_on_interrupt() -> Result<()> {
    ctrlc::set_handler(|| {
        info!("interrupted");
        let _ = write_farewell(&mut io::stdout());
        process::exit(0);
    })
    .context("installing Ctrl-C handler")
}

fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let res = app.run(&mut terminal);

    // Restore terminal, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running terminal UI")
}

fn load_board(path: &Path, game: &GameConfig) -> Result<Board> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading board from {}", path.display()))?;
    parse_board(&text, game.size, game.win_length)
        .with_context(|| format!("parsing board from {}", path.display()))
}

/// Logs go to stderr, or to `log_file` when given. The full-screen UI owns the
/// terminal, so without a log file it only logs when `RUST_LOG` asks for it.
fn init_tracing(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let default_filter = if tui && log_file.is_none() {
        "off"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}
