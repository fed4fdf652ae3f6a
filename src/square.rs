// Square mapping: file 0..8 is a..h, rank 0..8 is 1..8 (White starts on ranks 0 and 1)

use crate::error::{GameError, GameResult};
use std::fmt;
use std::str::FromStr;

pub const BOARD_SIZE: i32 = 8;

/// True iff both coordinates fall inside the 8x8 grid.
#[inline]
pub fn position_on_board(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(x: i32, y: i32) -> GameResult<Self> {
        if !position_on_board(x, y) {
            return Err(GameError::OutOfRange { x, y });
        }
        Ok(Self {
            file: x as u8,
            rank: y as u8,
        })
    }

    pub fn file(self) -> i32 {
        self.file as i32
    }

    pub fn rank(self) -> i32 {
        self.rank as i32
    }

    /// Square reached by stepping (dx, dy), or None when that leaves the board.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        Square::new(self.file() + dx, self.rank() + dy).ok()
    }

    // All 64 squares, a1 b1 .. h1 a2 .. h8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|y| {
            (0..BOARD_SIZE).map(move |x| Square {
                file: x as u8,
                rank: y as u8,
            })
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }
}

impl FromStr for Square {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GameError::InvalidSquare {
            text: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let (file, rank) = (bytes[0].to_ascii_lowercase(), bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Square::new((file - b'a') as i32, (rank - b'1') as i32)
    }
}
