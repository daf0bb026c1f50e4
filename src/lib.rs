// Simplified-rules chess engine for short casual matches
pub mod error;
pub mod board;
pub mod rules;
pub mod movegen;
pub mod search;
pub mod game;
pub mod config;
pub mod perft;
pub mod selfplay;
pub mod shell;

// Re-exports for the common entry points
pub use board::{Color, Piece, PieceKind, Position, Square};
pub use error::EngineError;
pub use movegen::{generate_moves, is_legal};
