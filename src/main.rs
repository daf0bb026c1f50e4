use anyhow::{Context, Result};
use chesscoach::board::{Color, Position};
use chesscoach::config::EngineConfig;
use chesscoach::game::MatchConfig;
use chesscoach::shell::Shell;
use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a short casual chess match with move advice", long_about = None)]
struct Args {
    /// Your color: 'w' for white, 'b' for black
    #[arg(long, default_value = "w")]
    color: String,

    /// Who moves first: 'w' or 'b' (defaults to the position's side to move)
    #[arg(long)]
    first: Option<String>,

    /// Detected position as JSON (defaults to the 24-piece demo layout)
    #[arg(long)]
    position: Option<PathBuf>,

    /// Engine config as JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Opponent seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Opponent picks among this many top-scored moves (overrides config)
    #[arg(long)]
    topk: Option<usize>,
}

fn parse_color(color_str: &str) -> Result<Color> {
    color_str.parse::<Color>().map_err(|_| anyhow::anyhow!("Invalid color {:?}: use 'w' or 'b'", color_str))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut cfg = EngineConfig::load(args.config.as_deref()).context("loading engine config")?;
    if let Some(s) = args.seed { cfg.seed = s; }
    if let Some(k) = args.topk { cfg.opponent_topk = k; }

    let start = match &args.position {
        Some(path) => {
            let json = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            Position::from_json(&json).with_context(|| format!("parsing {}", path.display()))?
        }
        None => Position::demo(),
    };

    let config = MatchConfig {
        user_color: parse_color(&args.color)?,
        first_player: args.first.as_deref().map(parse_color).transpose()?,
        max_plies: cfg.max_plies,
        piece_values: cfg.piece_values,
    };
    println!("{}", start);
    println!("commands: board, moves <sq>, move <from><to>, best, advise, skip, score, new, quit");

    let mut shell = Shell::new(start, config, cfg.opponent_topk, cfg.seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
