use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::board::{Color, Position};
use crate::error::EngineError;
use crate::game::{Game, MatchConfig, Outcome};
use crate::search::eval::PieceValues;
use crate::search::noise::Opponent;

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: u32,
    pub topk: usize,
    pub seed: u64,
    pub piece_values: PieceValues,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self { games: 10, max_plies: crate::game::DEFAULT_MAX_PLIES, topk: 3, seed: 42, piece_values: PieceValues::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    pub white_score: i32,
    pub black_score: i32,
    pub result: i8, // 1 white win, 0 draw, -1 black win
}

/// Bot against bot from the demo position. White is the "user" side of the
/// match, so user score is White's score.
pub fn play_game(params: &SelfPlayParams, game_index: usize) -> Result<GameRecord, EngineError> {
    let config = MatchConfig {
        user_color: Color::White,
        first_player: Some(Color::White),
        max_plies: params.max_plies,
        piece_values: params.piece_values,
    };
    let base = params.seed.wrapping_add(2 * game_index as u64);
    let mut white = Opponent::new(params.piece_values, params.topk, base);
    let mut black = Opponent::new(params.piece_values, params.topk, base.wrapping_add(1));
    let mut game = Game::new(Position::demo(), config);
    while game.outcome().is_none() {
        if game.is_users_turn() {
            match white.pick(game.position()) {
                Some(m) => { game.play(&m.mv.piece.id, m.mv.to)?; }
                None => game.skip()?,
            }
        } else {
            game.play_opponent(&mut black)?;
        }
    }
    let result = match game.outcome() {
        Some(Outcome::UserWins) => 1,
        Some(Outcome::OpponentWins) => -1,
        _ => 0,
    };
    debug!("game {}: white {} black {} in {} plies", game_index, game.user_score(), game.opponent_score(), game.move_count());
    Ok(GameRecord {
        moves: game.history().iter().map(|h| h.mv.clone()).collect(),
        white_score: game.user_score(),
        black_score: game.opponent_score(),
        result,
    })
}

pub fn generate_games(params: &SelfPlayParams) -> Result<Vec<GameRecord>, EngineError> {
    (0..params.games).map(|gi| play_game(params, gi)).collect()
}

pub fn write_jsonl<P: AsRef<Path>>(games: &[GameRecord], path: P) -> std::io::Result<()> {
    if let Some(dir) = path.as_ref().parent() {
        if !dir.as_os_str().is_empty() { create_dir_all(dir)?; }
    }
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        let line = serde_json::to_string(g).map_err(std::io::Error::other)?;
        writeln!(w, "{}", line)?;
    }
    w.flush()
}

pub fn read_jsonl<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<GameRecord>> {
    let rdr = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in rdr.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line).map_err(std::io::Error::other)?);
    }
    Ok(out)
}
