use anyhow::Context;
use chesscoach::board::Position;
use chesscoach::movegen::candidate_moves;
use chesscoach::perft::{divide, perft};
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for the simplified move generator")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Position JSON file; the demo layout when omitted
    #[arg(long)]
    position: Option<PathBuf>,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print node counts per root move
    #[arg(long, default_value_t = false)]
    divide: bool,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let base = match &args.position {
        Some(p) => {
            let json = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            Position::from_json(&json)?
        }
        None => Position::demo(),
    };

    if args.divide {
        let mut total = 0u64;
        for (mv, n) in divide(&base, args.depth) {
            println!("{}: {}", mv, n);
            total += n;
        }
        println!("total: {}", total);
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let t0 = Instant::now();
    let nodes = pool.install(|| {
        if args.threads <= 1 || args.depth <= 1 {
            perft(&base, args.depth)
        } else {
            let root = candidate_moves(&base, base.side_to_move());
            root.par_iter().map(|mv| {
                let mut child = base.clone();
                match child.apply(&mv.piece.id, mv.to) {
                    Ok(_) => perft(&child, args.depth - 1),
                    Err(_) => 0,
                }
            }).sum()
        }
    });
    let dt = t0.elapsed().as_secs_f64();
    if args.nps {
        let nps = if dt > 0.0 { nodes as f64 / dt } else { f64::INFINITY };
        println!("nodes: {} elapsed: {:.3}s nps: {:.1}", nodes, dt, nps);
    } else {
        println!("nodes: {}", nodes);
    }
    Ok(())
}
