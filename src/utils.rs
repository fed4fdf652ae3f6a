// Direction tables and precomputed leaper targets for move generation

use crate::square::Square;
use std::sync::OnceLock;

// Ray directions for sliding pieces, as (file, rank) steps
pub const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ALL_DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (0, 1),
    (1, 1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (-1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
];

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (1, 0),
    (1, -1),
    (1, 1),
];

// Precomputed on-board targets per square, indexed rank * 8 + file
static KNIGHT_TARGETS: OnceLock<Vec<Vec<Square>>> = OnceLock::new();
static KING_TARGETS: OnceLock<Vec<Vec<Square>>> = OnceLock::new();

fn build_targets(offsets: &[(i32, i32)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|from| {
            offsets
                .iter()
                .filter_map(|&(dx, dy)| from.offset(dx, dy))
                .collect()
        })
        .collect()
}

#[inline]
fn table_index(sq: Square) -> usize {
    (sq.rank() * 8 + sq.file()) as usize
}

pub fn init_leaper_tables() {
    KNIGHT_TARGETS.get_or_init(|| build_targets(&KNIGHT_OFFSETS));
    KING_TARGETS.get_or_init(|| build_targets(&KING_OFFSETS));
}

#[inline]
pub fn knight_targets(sq: Square) -> &'static [Square] {
    &KNIGHT_TARGETS.get_or_init(|| build_targets(&KNIGHT_OFFSETS))[table_index(sq)]
}

#[inline]
pub fn king_targets(sq: Square) -> &'static [Square] {
    &KING_TARGETS.get_or_init(|| build_targets(&KING_OFFSETS))[table_index(sq)]
}

/// Coordinate move text, e.g. "e2e3"
pub fn move_to_text(from: Square, to: Square) -> String {
    format!("{}{}", from, to)
}

/// Parse "e2e3" into its two squares
pub fn parse_move_text(text: &str) -> Option<(Square, Square)> {
    if text.len() != 4 || !text.is_ascii() {
        return None;
    }
    let from = text[0..2].parse().ok()?;
    let to = text[2..4].parse().ok()?;
    Some((from, to))
}
