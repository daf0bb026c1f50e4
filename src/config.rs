use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::game::DEFAULT_MAX_PLIES;
use crate::board::PieceKind;
use crate::search::eval::PieceValues;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("reading config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("piece value for {kind} is {value}, expected 0..={max}")]
    InvalidValue { kind: PieceKind, value: i32, max: i32 },
}

/// Tunables shared by the shell, the self-play driver and tests. Missing
/// JSON fields fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub piece_values: PieceValues,
    pub max_plies: u32,
    pub opponent_topk: usize,
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { piece_values: PieceValues::default(), max_plies: DEFAULT_MAX_PLIES, opponent_topk: 3, seed: 42 }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> { std::env::var(name).ok().and_then(|s| s.parse().ok()) }

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.piece_values.out_of_range() {
            Some((kind, value)) => Err(ConfigError::InvalidValue { kind, value, max: PieceValues::MAX }),
            None => Ok(()),
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// `CHESSCOACH_SEED`, `CHESSCOACH_TOPK` and `CHESSCOACH_MAX_PLIES`
    /// override the loaded values when set and parseable.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_parse("CHESSCOACH_SEED") { self.seed = v; }
        if let Some(v) = env_parse("CHESSCOACH_TOPK") { self.opponent_topk = v; }
        if let Some(v) = env_parse("CHESSCOACH_MAX_PLIES") { self.max_plies = v; }
        self
    }

    /// Defaults, then the optional file, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(p) => Self::from_json_file(p)?,
            None => Self::default(),
        };
        Ok(base.with_env_overrides())
    }
}
