//! Move generation for the variant rules.
//!
//! Everything here is read-only over a `Board`: a selection produces a list of
//! `MoveCandidate`s, plain moves onto empty squares and attack moves onto
//! squares held by the other side. Only on-board squares are ever emitted, and
//! a same-colour occupant blocks without producing a candidate.

use crate::board::{Board, Color, Piece, PieceId, PieceKind};
use crate::square::Square;
use crate::utils::{king_targets, knight_targets, ALL_DIRECTIONS, DIAGONAL, ORTHOGONAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCandidate {
    pub target: Square,
    pub is_attack: bool,
    pub piece: PieceId,
}

impl MoveCandidate {
    fn plain(piece: PieceId, target: Square) -> Self {
        Self {
            target,
            is_attack: false,
            piece,
        }
    }

    fn attack(piece: PieceId, target: Square) -> Self {
        Self {
            target,
            is_attack: true,
            piece,
        }
    }
}

/// Candidates for one piece. A captured (dead) handle yields nothing.
pub fn generate_moves(board: &Board, id: PieceId) -> Vec<MoveCandidate> {
    let mut out = Vec::with_capacity(28);
    let Some(piece) = board.piece(id).copied() else {
        return out;
    };
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, id, &piece, &mut out),
        PieceKind::Knight => {
            generate_point_moves(board, id, &piece, knight_targets(piece.position), &mut out)
        }
        PieceKind::King => {
            generate_point_moves(board, id, &piece, king_targets(piece.position), &mut out)
        }
        PieceKind::Bishop => generate_sliding_moves(board, id, &DIAGONAL, &mut out),
        PieceKind::Rook => generate_sliding_moves(board, id, &ORTHOGONAL, &mut out),
        PieceKind::Queen => generate_sliding_moves(board, id, &ALL_DIRECTIONS, &mut out),
    }
    out
}

/// Candidates for every live piece of one side, in roster order.
pub fn moves_for_side(board: &Board, side: Color) -> Vec<MoveCandidate> {
    let ids: Vec<PieceId> = board.pieces_of(side).map(|(id, _)| id).collect();
    let mut out = Vec::with_capacity(ids.len() * 8);
    for id in ids {
        out.extend(generate_moves(board, id));
    }
    out
}

/// Walks one ray from the piece: a plain move per empty square, then at most
/// one attack on the first occupant if it belongs to the other side.
pub fn line_moves(board: &Board, id: PieceId, dx: i32, dy: i32, out: &mut Vec<MoveCandidate>) {
    let Some(piece) = board.piece(id) else {
        return;
    };
    let mut next = piece.position.offset(dx, dy);
    while let Some(sq) = next {
        match board.color_at(sq) {
            None => out.push(MoveCandidate::plain(id, sq)),
            Some(color) => {
                if color != piece.color {
                    out.push(MoveCandidate::attack(id, sq));
                }
                break;
            }
        }
        next = sq.offset(dx, dy);
    }
}

fn generate_sliding_moves(
    board: &Board,
    id: PieceId,
    rays: &[(i32, i32)],
    out: &mut Vec<MoveCandidate>,
) {
    for &(dx, dy) in rays {
        line_moves(board, id, dx, dy, out);
    }
}

// Knight and king: fixed targets, plain if empty, attack if hostile
fn generate_point_moves(
    board: &Board,
    id: PieceId,
    piece: &Piece,
    targets: &[Square],
    out: &mut Vec<MoveCandidate>,
) {
    for &sq in targets {
        match board.color_at(sq) {
            None => out.push(MoveCandidate::plain(id, sq)),
            Some(color) if color != piece.color => out.push(MoveCandidate::attack(id, sq)),
            Some(_) => {}
        }
    }
}

// Single step forward onto an empty square; diagonal steps only to capture.
// No double step, no en-passant, no promotion: a pawn on the far rank is stuck.
fn generate_pawn_moves(board: &Board, id: PieceId, piece: &Piece, out: &mut Vec<MoveCandidate>) {
    let dy = piece.color.forward();
    let Some(ahead) = piece.position.offset(0, dy) else {
        return;
    };
    if !board.is_occupied(ahead) {
        out.push(MoveCandidate::plain(id, ahead));
    }
    for dx in [1, -1] {
        if let Some(sq) = piece.position.offset(dx, dy) {
            if matches!(board.color_at(sq), Some(color) if color != piece.color) {
                out.push(MoveCandidate::attack(id, sq));
            }
        }
    }
}
