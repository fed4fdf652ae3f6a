//! Applies one confirmed move candidate to the board and turn state.
//!
//! All preconditions are checked before anything is touched, so a rejected
//! candidate leaves both the board and the turn controller exactly as they were.
//! A candidate is only accepted if the move rules would generate it for the
//! current board.

use crate::board::{Board, Color, Piece, PieceId, PieceKind};
use crate::error::{GameError, GameResult};
use crate::movegen::{generate_moves, MoveCandidate};
use crate::square::Square;
use crate::turn::TurnController;
use log::{debug, error, info};

/// What a committed move did, for front ends and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub winner: Option<Color>,
}

pub fn execute(
    board: &mut Board,
    turn: &mut TurnController,
    candidate: MoveCandidate,
) -> GameResult<MoveOutcome> {
    let mover = validate(board, candidate).map_err(|e| {
        error!("rejected move candidate {:?}: {}", candidate, e);
        e
    })?;
    let from = mover.position;
    let to = candidate.target;

    let mut captured = None;
    let mut winner = None;
    if candidate.is_attack {
        // validate() guarantees an opposing occupant here
        if let Some(victim) = board.id_at(to).and_then(|id| board.remove_piece(id)) {
            if victim.kind == PieceKind::King {
                winner = Some(victim.color.opposite());
            }
            captured = Some(victim);
        }
    }

    board.relocate(candidate.piece, to)?;

    match winner {
        Some(color) => {
            turn.declare_winner(color);
            info!("{} king captured on {}, {} wins", mover.color.opposite(), to, color);
        }
        None => turn.next_turn(),
    }
    debug!(
        "{:?} {:?} {}{}{}",
        mover.color,
        mover.kind,
        from,
        if captured.is_some() { "x" } else { "-" },
        to
    );

    Ok(MoveOutcome {
        piece: candidate.piece,
        from,
        to,
        captured,
        winner,
    })
}

fn validate(board: &Board, candidate: MoveCandidate) -> GameResult<Piece> {
    let mover = *board
        .piece(candidate.piece)
        .ok_or_else(|| {
            GameError::invalid_move(format!("piece #{} was captured", candidate.piece.index()))
        })?;
    if board.id_at(mover.position) != Some(candidate.piece) {
        return Err(GameError::invalid_move(format!(
            "piece #{} is not on {}",
            candidate.piece.index(),
            mover.position
        )));
    }
    if candidate.target == mover.position {
        return Err(GameError::invalid_move(format!("{} does not move", mover.position)));
    }
    match (candidate.is_attack, board.color_at(candidate.target)) {
        (true, Some(color)) if color != mover.color => {}
        (true, Some(_)) => {
            return Err(GameError::invalid_move(format!(
                "{} holds a friendly piece",
                candidate.target
            )))
        }
        (true, None) => {
            return Err(GameError::invalid_move(format!(
                "attack on empty square {}",
                candidate.target
            )))
        }
        (false, None) => {}
        (false, Some(_)) => {
            return Err(GameError::invalid_move(format!(
                "plain move onto occupied square {}",
                candidate.target
            )))
        }
    }
    // The target must be one the move rules generate for this piece here
    if !generate_moves(board, candidate.piece).contains(&candidate) {
        return Err(GameError::invalid_move(format!(
            "{:?} on {} cannot reach {}",
            mover.kind, mover.position, candidate.target
        )));
    }
    Ok(mover)
}
