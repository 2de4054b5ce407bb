use antichess_engine::agent::ai::{EngineConfig, EnginePlayer, SearchStrategy, DEFAULT_TIME_LIMIT};
use antichess_engine::agent::human_player::ConsolePlayer;
use antichess_engine::agent::player::Player;
use antichess_engine::board::Board;
use antichess_engine::error::EngineResult;
use antichess_engine::game_repr::Color;
use antichess_engine::orchestrator::Orchestrator;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use std::io;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Parser)]
#[command(name = "antichess")]
#[command(about = "Play antichess against a minimax engine", long_about = None)]
struct Args {
    /// Side the engine plays
    #[arg(short, long, value_enum, default_value = "white")]
    engine: Side,

    /// Time limit per engine move in seconds
    #[arg(short, long, default_value = "10.0")]
    time_limit: f64,

    /// Fixed search depth instead of the adaptive one
    #[arg(short, long)]
    depth: Option<u8>,

    /// Search once at full depth instead of deepening iteratively
    #[arg(long)]
    fixed_depth: bool,

    /// Starting position
    #[arg(short, long)]
    fen: Option<String>,

    /// Do not print the board between moves
    #[arg(short, long)]
    quiet: bool,

    /// Let the engine play both sides
    #[arg(long)]
    self_play: bool,
}

impl Args {
    fn engine_config(&self) -> EngineConfig {
        let time_limit = Duration::try_from_secs_f64(self.time_limit.max(0.0))
            .unwrap_or(DEFAULT_TIME_LIMIT);
        let strategy = if self.fixed_depth {
            SearchStrategy::FixedDepth
        } else {
            SearchStrategy::IterativeDeepening
        };

        let config = EngineConfig::default()
            .with_time_limit(time_limit)
            .with_strategy(strategy);
        match self.depth {
            Some(depth) => config.with_depth(depth),
            None => config,
        }
    }
}

fn human() -> Box<dyn Player> {
    Box::new(ConsolePlayer::new(
        io::stdin().lock(),
        io::stdout(),
        "Human".to_string(),
    ))
}

fn engine(config: &EngineConfig) -> Box<dyn Player> {
    Box::new(EnginePlayer::new(config.clone(), "AI".to_string()))
}

fn run(args: Args) -> EngineResult<()> {
    let board = match &args.fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::default(),
    };
    let config = args.engine_config();

    let (white, black) = if args.self_play {
        (engine(&config), engine(&config))
    } else {
        match Color::from(args.engine) {
            Color::White => (engine(&config), human()),
            Color::Black => (human(), engine(&config)),
        }
    };

    let mut orchestrator = Orchestrator::new(board, white, black, io::stdout()).quiet(args.quiet);
    orchestrator.run()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
