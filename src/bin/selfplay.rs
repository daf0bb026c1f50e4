use clap::Parser;
use chesscoach::config::EngineConfig;
use chesscoach::selfplay::{play_game, write_jsonl, GameRecord, SelfPlayParams};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chesscoach-selfplay", about = "Play bot-vs-bot matches from the demo layout and write JSONL records")]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    topk: Option<usize>,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let cfg = EngineConfig::load(a.config.as_deref())?;
    let params = SelfPlayParams {
        games: a.games,
        max_plies: cfg.max_plies,
        topk: a.topk.unwrap_or(cfg.opponent_topk),
        seed: a.seed.unwrap_or(cfg.seed),
        piece_values: cfg.piece_values,
    };
    eprintln!("Playing {} games (topk={}, seed={}, threads={})", params.games, params.topk, params.seed, a.threads);

    let pb = ProgressBar::new(params.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}]")?);
    let pool = rayon::ThreadPoolBuilder::new().num_threads(a.threads.max(1)).build()?;
    let games: Vec<GameRecord> = pool.install(|| {
        (0..params.games).into_par_iter().map(|gi| {
            let r = play_game(&params, gi);
            pb.inc(1);
            r
        }).collect::<Result<Vec<_>, _>>()
    })?;
    pb.finish();

    let (w, d, b) = games.iter().fold((0, 0, 0), |(w, d, b), g| match g.result {
        1 => (w + 1, d, b),
        -1 => (w, d, b + 1),
        _ => (w, d + 1, b),
    });
    eprintln!("white {} draw {} black {}", w, d, b);
    write_jsonl(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
