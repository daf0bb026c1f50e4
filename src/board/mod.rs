pub mod square;
pub mod piece;
pub mod position;

pub use square::{coords_to_square, square_to_coords, Square};
pub use piece::{Color, Piece, PieceKind};
pub use position::Position;
