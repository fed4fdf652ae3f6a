//! Piece-placement notation.
//!
//! A position is written as the board field of a FEN record followed by an
//! optional side to move (`w` or `b`, default White). Trailing FEN fields
//! (castling, en-passant, clocks) are accepted and ignored since the variant
//! has no use for them. Parsing and formatting of the board field is done by
//! `shakmaty`.

use crate::board::{Board, Color, PieceKind};
use crate::error::{GameError, GameResult};
use crate::square::Square;
use shakmaty::{Bitboard, File, Rank, Role};

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

fn placement_error(message: impl Into<String>) -> GameError {
    GameError::Placement {
        message: message.into(),
    }
}

pub fn to_shakmaty_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::from_coords(File::new(square.file() as u32), Rank::new(square.rank() as u32))
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn role_from_kind(kind: PieceKind) -> Role {
    match kind {
        PieceKind::Pawn => Role::Pawn,
        PieceKind::Knight => Role::Knight,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Rook => Role::Rook,
        PieceKind::Queen => Role::Queen,
        PieceKind::King => Role::King,
    }
}

pub fn to_shakmaty_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black,
    }
}

fn color_from_shakmaty(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

/// Mirror of the occupancy as a shakmaty board.
pub fn to_shakmaty(board: &Board) -> shakmaty::Board {
    let mut out = shakmaty::Board::empty();
    for (_, piece) in board.pieces() {
        out.set_piece_at(
            to_shakmaty_square(piece.position),
            shakmaty::Piece {
                color: to_shakmaty_color(piece.color),
                role: role_from_kind(piece.kind),
            },
        );
    }
    out
}

/// Parses "<board-fen> [w|b]". Each side must have exactly one king, since a
/// king capture is the only way a game ends.
pub fn parse_placement(text: &str) -> GameResult<(Board, Color)> {
    let mut parts = text.split_whitespace();
    let board_part = parts.next().ok_or_else(|| placement_error("missing piece placement"))?;
    let side = match parts.next() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => return Err(placement_error(format!("invalid side to move {:?}", other))),
    };

    let setup = shakmaty::Board::from_ascii_board_fen(board_part.as_bytes())
        .map_err(|e| placement_error(format!("{}: {:?}", e, board_part)))?;

    let mut board = Board::new();
    for square in Square::all() {
        if let Some(piece) = setup.piece_at(to_shakmaty_square(square)) {
            board.add_piece(kind_from_role(piece.role), color_from_shakmaty(piece.color), square)?;
        }
    }

    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces_of(color)
            .filter(|(_, p)| p.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(placement_error(format!("{} has {} kings, expected 1", color, kings)));
        }
    }
    Ok((board, side))
}

pub fn format_placement(board: &Board, side: Color) -> String {
    let side = match side {
        Color::White => 'w',
        Color::Black => 'b',
    };
    format!("{} {}", to_shakmaty(board).board_fen(Bitboard(0)), side)
}
