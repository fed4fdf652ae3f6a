// Board model: an 8x8 grid of piece handles backed by a roster of live pieces.
// Cells are indexed [file][rank], so cells[x][y] is the square (x, y).

use crate::error::{GameError, GameResult};
use crate::square::{position_on_board, Square, BOARD_SIZE};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step of a pawn push for this side
    pub fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
}

// Back rank order, file a to h
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Square,
}

impl Piece {
    /// FEN letter: upper case for White, lower case for Black
    pub fn symbol(&self) -> char {
        let ch = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }
}

/// Stable handle to one piece for its whole lifetime. Handles are never reused
/// within a board, so a handle to a captured piece stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PieceId>; 8]; 8],
    // Indexed by PieceId; None once the piece has been captured
    roster: Vec<Option<Piece>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    // Empty board, populated by add_piece or placement import
    pub fn new() -> Self {
        Self {
            cells: [[None; 8]; 8],
            roster: Vec::with_capacity(32),
        }
    }

    /// Standard opening layout: White on ranks 1-2, Black on ranks 7-8.
    pub fn standard() -> Self {
        let mut board = Self::new();
        for square in Square::all() {
            let (color, kind) = match square.rank() {
                0 => (Color::White, BACK_RANK[square.file() as usize]),
                1 => (Color::White, PieceKind::Pawn),
                6 => (Color::Black, PieceKind::Pawn),
                7 => (Color::Black, BACK_RANK[square.file() as usize]),
                _ => continue,
            };
            board.place(kind, color, square);
        }
        board
    }

    fn place(&mut self, kind: PieceKind, color: Color, position: Square) -> PieceId {
        let id = PieceId(self.roster.len());
        self.roster.push(Some(Piece {
            kind,
            color,
            position,
        }));
        self.cells[position.file() as usize][position.rank() as usize] = Some(id);
        id
    }

    pub fn position_on_board(&self, x: i32, y: i32) -> bool {
        position_on_board(x, y)
    }

    pub fn get_position(&self, x: i32, y: i32) -> GameResult<Option<PieceId>> {
        if !position_on_board(x, y) {
            return Err(GameError::OutOfRange { x, y });
        }
        Ok(self.cells[x as usize][y as usize])
    }

    /// Writes the piece into the cell named by its own position, overwriting the
    /// previous occupant. Capture bookkeeping must already be done by the caller.
    pub fn set_position(&mut self, id: PieceId) -> GameResult<()> {
        let position = self
            .piece(id)
            .ok_or_else(|| GameError::invalid_move(format!("piece #{} is not on the board", id.0)))?
            .position;
        self.cells[position.file() as usize][position.rank() as usize] = Some(id);
        Ok(())
    }

    pub fn set_empty(&mut self, x: i32, y: i32) -> GameResult<()> {
        if !position_on_board(x, y) {
            return Err(GameError::OutOfRange { x, y });
        }
        self.cells[x as usize][y as usize] = None;
        Ok(())
    }

    pub fn add_piece(
        &mut self,
        kind: PieceKind,
        color: Color,
        square: Square,
    ) -> GameResult<PieceId> {
        if self.is_occupied(square) {
            return Err(GameError::SquareOccupied { square });
        }
        Ok(self.place(kind, color, square))
    }

    /// The live piece behind a handle, None once captured
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.roster.get(id.0).and_then(Option::as_ref)
    }

    pub fn id_at(&self, square: Square) -> Option<PieceId> {
        self.cells[square.file() as usize][square.rank() as usize]
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.id_at(square).and_then(|id| self.piece(id))
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.id_at(square).is_some()
    }

    pub fn color_at(&self, square: Square) -> Option<Color> {
        self.piece_at(square).map(|p| p.color)
    }

    /// Drops a piece from the live roster and clears its cell.
    pub fn remove_piece(&mut self, id: PieceId) -> Option<Piece> {
        let piece = self.roster.get_mut(id.0)?.take()?;
        if self.id_at(piece.position) == Some(id) {
            self.cells[piece.position.file() as usize][piece.position.rank() as usize] = None;
        }
        Some(piece)
    }

    /// Moves a live piece: clears its origin, updates its position, writes the
    /// destination. Returns the origin square. The destination must already be
    /// empty; captures are removed by the caller first.
    pub fn relocate(&mut self, id: PieceId, to: Square) -> GameResult<Square> {
        let from = self
            .piece(id)
            .ok_or_else(|| GameError::invalid_move(format!("piece #{} is not on the board", id.0)))?
            .position;
        if matches!(self.id_at(to), Some(other) if other != id) {
            return Err(GameError::SquareOccupied { square: to });
        }
        self.set_empty(from.file(), from.rank())?;
        if let Some(Some(piece)) = self.roster.get_mut(id.0) {
            piece.position = to;
        }
        self.set_position(id)?;
        Ok(from)
    }

    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.roster
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|p| (PieceId(i), p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn count(&self) -> usize {
        self.pieces().count()
    }

    pub fn king(&self, color: Color) -> Option<PieceId> {
        self.pieces_of(color)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(id, _)| id)
    }

    /// Back to the opening layout; calling it twice changes nothing.
    pub fn reset(&mut self) {
        *self = Self::standard();
    }

    /// Grid and roster agree: every live piece sits in its own cell and every
    /// occupied cell points at a live piece standing there.
    pub fn is_consistent(&self) -> bool {
        let roster_ok = self.pieces().all(|(id, p)| self.id_at(p.position) == Some(id));
        let cells_ok = Square::all().all(|sq| match self.id_at(sq) {
            Some(id) => self.piece(id).map(|p| p.position) == Some(sq),
            None => true,
        });
        roster_ok && cells_ok
    }
}

// Rank 8 at the top, '.' for empty cells
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            for x in 0..BOARD_SIZE {
                let ch = match self.get_position(x, y) {
                    Ok(Some(id)) => self.piece(id).map(Piece::symbol).unwrap_or('?'),
                    _ => '.',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
