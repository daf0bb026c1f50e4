use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::EngineError;

/// A square of the 8x8 board, stored as zero-based file and rank indices.
///
/// Strings use the usual `"<file><rank>"` form, `"e4"` being `(4, 3)`.
/// Serializes as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Result<Self, EngineError> {
        coords_to_square(file as i32, rank as i32)
    }

    pub fn file(self) -> u8 { self.file }
    pub fn rank(self) -> u8 { self.rank }
    pub fn coords(self) -> (u8, u8) { (self.file, self.rank) }

    /// The square `df` files and `dr` ranks away, if it is still on the board.
    pub fn offset(self, df: i8, dr: i8) -> Result<Square, EngineError> {
        coords_to_square(self.file as i32 + df as i32, self.rank as i32 + dr as i32)
    }

    /// d4, e4, d5, e5.
    pub fn is_center(self) -> bool {
        (3..=4).contains(&self.file) && (3..=4).contains(&self.rank)
    }
}

pub fn square_to_coords(s: &str) -> Result<(u8, u8), EngineError> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 { return Err(EngineError::MalformedSquare(s.to_string())); }
    let (f, r) = (bytes[0], bytes[1]);
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return Err(EngineError::MalformedSquare(s.to_string()));
    }
    Ok((f - b'a', r - b'1'))
}

pub fn coords_to_square(file: i32, rank: i32) -> Result<Square, EngineError> {
    if !(0..8).contains(&file) || !(0..8).contains(&rank) {
        return Err(EngineError::OutOfRange { file, rank });
    }
    Ok(Square { file: file as u8, rank: rank as u8 })
}

impl FromStr for Square {
    type Err = EngineError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (file, rank) = square_to_coords(s)?;
        Ok(Square { file, rank })
    }
}

impl TryFrom<String> for Square {
    type Error = EngineError;
    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

impl From<Square> for String {
    fn from(sq: Square) -> String { sq.to_string() }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}
