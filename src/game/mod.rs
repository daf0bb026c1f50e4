use log::{debug, info};
use serde::Serialize;
use crate::board::{Color, Piece, Position, Square};
use crate::error::EngineError;
use crate::movegen::is_legal;
use crate::search::advisor::Advisor;
use crate::search::eval::{Evaluator, PieceValues, ScoredMove};
use crate::search::noise::Opponent;

pub const DEFAULT_MAX_PLIES: u32 = 12;

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub user_color: Color,
    /// Overrides the position's side to move when set.
    pub first_player: Option<Color>,
    pub max_plies: u32,
    pub piece_values: PieceValues,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            user_color: Color::White,
            first_player: None,
            max_plies: DEFAULT_MAX_PLIES,
            piece_values: PieceValues::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Playing,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    UserWins,
    OpponentWins,
    Draw,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipTally {
    pub user: u32,
    pub opponent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// `"e2e4"`, or `"skip"`.
    pub mv: String,
    pub player: Color,
    pub captured: Option<Piece>,
}

/// A fixed-length match between the user and the simulated opponent.
///
/// Owns the only mutable `Position`; every move is validated against the
/// generator and applied in full before the next query.
pub struct Game {
    position: Position,
    config: MatchConfig,
    move_count: u32,
    user_score: i32,
    opponent_score: i32,
    captured: Vec<Piece>,
    skipped: SkipTally,
    history: Vec<HistoryEntry>,
    phase: Phase,
    evaluator: Evaluator,
    advisor: Advisor,
}

impl Game {
    pub fn new(mut position: Position, config: MatchConfig) -> Self {
        if let Some(first) = config.first_player { position.set_side_to_move(first); }
        info!("match started: user plays {}, {} moves first, {} plies", config.user_color, position.side_to_move(), config.max_plies);
        let phase = if config.max_plies == 0 { Phase::Finished } else { Phase::Playing };
        Self {
            position,
            evaluator: Evaluator::new(config.piece_values),
            advisor: Advisor::new(config.piece_values),
            config,
            move_count: 0,
            user_score: 0,
            opponent_score: 0,
            captured: Vec::new(),
            skipped: SkipTally::default(),
            history: Vec::new(),
            phase,
        }
    }

    pub fn position(&self) -> &Position { &self.position }
    pub fn config(&self) -> &MatchConfig { &self.config }
    pub fn move_count(&self) -> u32 { self.move_count }
    pub fn user_score(&self) -> i32 { self.user_score }
    pub fn opponent_score(&self) -> i32 { self.opponent_score }
    pub fn captured(&self) -> &[Piece] { &self.captured }
    pub fn skipped(&self) -> SkipTally { self.skipped }
    pub fn history(&self) -> &[HistoryEntry] { &self.history }
    pub fn phase(&self) -> Phase { self.phase }

    pub fn is_users_turn(&self) -> bool {
        self.phase == Phase::Playing && self.position.side_to_move() == self.config.user_color
    }

    /// Validates and applies a move; returns the captured piece, if any.
    pub fn play(&mut self, piece_id: &str, to: Square) -> Result<Option<Piece>, EngineError> {
        if self.phase == Phase::Finished { return Err(EngineError::GameOver); }
        let piece = self.position.piece(piece_id)
            .filter(|p| !p.captured)
            .ok_or_else(|| EngineError::UnknownPiece(piece_id.to_string()))?;
        let side = self.position.side_to_move();
        if piece.color != side { return Err(EngineError::NotYourTurn(side)); }
        if !is_legal(piece, to, &self.position) {
            return Err(EngineError::IllegalMove { kind: piece.kind, from: piece.square, to });
        }
        let uci = format!("{}{}", piece.square, to);
        let captured = self.position.apply(piece_id, to)?;
        if let Some(c) = &captured {
            let points = self.config.piece_values.value(c.kind);
            if c.color == self.config.user_color {
                self.opponent_score = self.opponent_score.saturating_add(points);
            } else {
                self.user_score = self.user_score.saturating_add(points);
            }
            info!("{} captured {} {} on {} for {} points", side, c.color, c.kind, to, points);
            self.captured.push(c.clone());
        }
        debug!("{} played {}", side, uci);
        self.history.push(HistoryEntry { mv: uci, player: side, captured: captured.clone() });
        self.advance();
        Ok(captured)
    }

    /// `play` with the piece looked up by its origin square, e.g. `"e2e4"`.
    pub fn play_uci(&mut self, uci: &str) -> Result<Option<Piece>, EngineError> {
        let malformed = || EngineError::MalformedSquare(uci.to_string());
        if uci.len() != 4 { return Err(malformed()); }
        let from: Square = uci.get(0..2).ok_or_else(malformed)?.parse()?;
        let to: Square = uci.get(2..4).ok_or_else(malformed)?.parse()?;
        let id = self.position.occupant(from).map(|p| p.id.clone()).ok_or(EngineError::EmptySquare(from))?;
        self.play(&id, to)
    }

    /// Pass the turn without moving.
    pub fn skip(&mut self) -> Result<(), EngineError> {
        if self.phase == Phase::Finished { return Err(EngineError::GameOver); }
        let side = self.position.side_to_move();
        if side == self.config.user_color { self.skipped.user += 1; } else { self.skipped.opponent += 1; }
        debug!("{} skipped", side);
        self.history.push(HistoryEntry { mv: "skip".to_string(), player: side, captured: None });
        self.position.pass();
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        self.move_count += 1;
        if self.move_count >= self.config.max_plies {
            self.phase = Phase::Finished;
            info!("match finished: user {} - opponent {}", self.user_score, self.opponent_score);
        }
    }

    /// Numeric best move for the user, while it is their turn.
    pub fn suggestion(&self) -> Option<ScoredMove> {
        if !self.is_users_turn() { return None; }
        self.evaluator.best_move(&self.position)
    }

    /// Tiered advice for the user, while it is their turn.
    pub fn advice(&self) -> Option<ScoredMove> {
        if !self.is_users_turn() { return None; }
        self.advisor.recommend(&self.position)
    }

    /// Let the simulated opponent move; skips when it has nothing legal.
    pub fn play_opponent(&mut self, opponent: &mut Opponent) -> Result<Option<ScoredMove>, EngineError> {
        if self.phase == Phase::Finished { return Err(EngineError::GameOver); }
        if self.position.side_to_move() == self.config.user_color {
            return Err(EngineError::NotYourTurn(self.config.user_color));
        }
        match opponent.pick(&self.position) {
            Some(choice) => {
                self.play(&choice.mv.piece.id, choice.mv.to)?;
                Ok(Some(choice))
            }
            None => {
                self.skip()?;
                Ok(None)
            }
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        if self.phase != Phase::Finished { return None; }
        Some(match self.user_score.cmp(&self.opponent_score) {
            std::cmp::Ordering::Greater => Outcome::UserWins,
            std::cmp::Ordering::Less => Outcome::OpponentWins,
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }
}
