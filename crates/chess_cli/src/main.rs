use chess_core::{Engine, SelectorConfig, select};
use one_ply_engine::OnePlyEngine;
use random_engine::RandomEngine;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EngineKind {
    /// Apply each move and keep the best static evaluation
    OnePly,
    /// Uniform choice among applicable moves
    Random,
}

#[derive(Parser, Debug)]
#[command(about = "Pick one move from a list of legal moves", author, version)]
struct CmdArgs {
    /// Board position in Forsyth-Edwards Notation
    fen: String,

    /// Space-separated legal moves in algebraic notation
    moves: String,

    /// Seconds available to decide
    #[arg(allow_negative_numbers = true)]
    timeout: i64,

    /// Selector settings in TOML
    #[arg(long, value_name = "CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Stop evaluating once the timeout has passed
    #[arg(long)]
    enforce_deadline: bool,

    #[arg(long, value_enum, default_value_t = EngineKind::OnePly)]
    engine: EngineKind,

    /// Print the full selection report as JSON instead of the bare index
    #[arg(long)]
    json: bool,
}

fn create_engine(kind: EngineKind) -> Box<dyn Engine> {
    match kind {
        EngineKind::OnePly => Box::new(OnePlyEngine::new()),
        EngineKind::Random => Box::new(RandomEngine::new()),
    }
}

fn main() -> Result<()> {
    // stdout carries only the answer; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd_args = CmdArgs::parse();
    let mut config = match &cmd_args.config {
        Some(path) => SelectorConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SelectorConfig::default(),
    };
    config.enforce_deadline |= cmd_args.enforce_deadline;

    let mut engine = create_engine(cmd_args.engine);
    let result = select(
        engine.as_mut(),
        &cmd_args.fen,
        &cmd_args.moves,
        cmd_args.timeout,
        &config,
    );
    info!(
        engine = engine.name(),
        index = result.best_index,
        score = ?result.best_score,
        evaluated = result.evaluated,
        skipped = result.skipped,
        "move selected"
    );

    if cmd_args.json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", result.best_index);
    }
    Ok(())
}
