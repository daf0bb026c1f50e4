use std::io::{self, BufRead, Write};
use crate::board::{Position, Square};
use crate::game::{Game, MatchConfig, Outcome};
use crate::movegen::generate_moves;
use crate::search::noise::Opponent;

/// Line-oriented front end for one match: the user types moves, the
/// simulated opponent answers.
pub struct Shell {
    start: Position,
    config: MatchConfig,
    topk: usize,
    seed: u64,
    game: Game,
    opponent: Opponent,
}

impl Shell {
    pub fn new(start: Position, config: MatchConfig, topk: usize, seed: u64) -> Self {
        let game = Game::new(start.clone(), config.clone());
        let opponent = Opponent::new(config.piece_values, topk, seed);
        Self { start, config, topk, seed, game, opponent }
    }

    pub fn game(&self) -> &Game { &self.game }

    fn cmd_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.game.position())
    }

    fn cmd_moves<W: Write>(&self, args: &str, out: &mut W) -> io::Result<()> {
        let sq: Square = match args.trim().parse() {
            Ok(sq) => sq,
            Err(e) => return writeln!(out, "error: {}", e),
        };
        match self.game.position().occupant(sq) {
            Some(p) => {
                let moves: Vec<String> = generate_moves(p, self.game.position()).iter().map(|s| s.to_string()).collect();
                writeln!(out, "{} {} on {}: {}", p.color, p.kind, sq, moves.join(" "))
            }
            None => writeln!(out, "error: no piece on {}", sq),
        }
    }

    fn cmd_move<W: Write>(&mut self, args: &str, out: &mut W) -> io::Result<()> {
        if self.game.outcome().is_some() { return writeln!(out, "error: the match is over"); }
        if !self.game.is_users_turn() { return writeln!(out, "error: not your turn"); }
        match self.game.play_uci(args.trim()) {
            Ok(Some(c)) => writeln!(out, "ok, captured {} {}", c.color, c.kind)?,
            Ok(None) => writeln!(out, "ok")?,
            Err(e) => return writeln!(out, "error: {}", e),
        }
        self.opponent_turns(out)
    }

    fn cmd_best<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.game.suggestion() {
            Some(m) => writeln!(out, "best {} (score {}): {}", m.mv.uci(), m.score, m.reason),
            None => writeln!(out, "best none"),
        }
    }

    fn cmd_advise<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.game.advice() {
            Some(m) => writeln!(out, "advise {}: {}", m.mv.uci(), m.reason),
            None => writeln!(out, "advise none"),
        }
    }

    fn cmd_skip<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.game.outcome().is_some() { return writeln!(out, "error: the match is over"); }
        if !self.game.is_users_turn() { return writeln!(out, "error: not your turn"); }
        if let Err(e) = self.game.skip() { return writeln!(out, "error: {}", e); }
        writeln!(out, "skipped")?;
        self.opponent_turns(out)
    }

    fn cmd_score<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let g = &self.game;
        writeln!(out, "score user {} opponent {} ply {}/{} skips {}/{}",
            g.user_score(), g.opponent_score(), g.move_count(), g.config().max_plies, g.skipped().user, g.skipped().opponent)
    }

    fn cmd_new<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.game = Game::new(self.start.clone(), self.config.clone());
        self.opponent = Opponent::new(self.config.piece_values, self.topk, self.seed);
        writeln!(out, "new match")?;
        self.opponent_turns(out)
    }

    fn opponent_turns<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        while self.game.outcome().is_none() && !self.game.is_users_turn() {
            match self.game.play_opponent(&mut self.opponent) {
                Ok(Some(m)) => writeln!(out, "opponent plays {}", m.mv.uci())?,
                Ok(None) => writeln!(out, "opponent skips")?,
                Err(e) => return writeln!(out, "error: {}", e),
            }
        }
        if let Some(o) = self.game.outcome() {
            let text = match o {
                Outcome::UserWins => "you win",
                Outcome::OpponentWins => "opponent wins",
                Outcome::Draw => "draw",
            };
            writeln!(out, "result: {} ({}-{})", text, self.game.user_score(), self.game.opponent_score())?;
        }
        Ok(())
    }

    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        self.opponent_turns(out)?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() { continue; }
            let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
            match cmd {
                "quit" => break,
                "board" => self.cmd_board(out)?,
                "moves" => self.cmd_moves(rest, out)?,
                "move" => self.cmd_move(rest, out)?,
                "best" => self.cmd_best(out)?,
                "advise" => self.cmd_advise(out)?,
                "skip" => self.cmd_skip(out)?,
                "score" => self.cmd_score(out)?,
                "new" => self.cmd_new(out)?,
                _ => writeln!(out, "unknown command: {}", cmd)?,
            }
            out.flush()?;
        }
        Ok(())
    }
}
