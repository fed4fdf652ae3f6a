//! The selection/commit gate used by front ends.
//!
//! `Game` owns one board and one turn controller. It refuses selections for
//! the side not to move or after the game has ended, and only commits
//! candidates the rules would generate for the current position.

use crate::board::{Board, Color};
use crate::error::{GameError, GameResult};
use crate::executor::{execute, MoveOutcome};
use crate::fen::{format_placement, parse_placement};
use crate::movegen::{generate_moves, moves_for_side, MoveCandidate};
use crate::square::Square;
use crate::turn::TurnController;
use log::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: TurnController,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::with_board(Board::standard(), Color::White)
    }

    pub fn with_board(board: Board, side: Color) -> Self {
        Self {
            board,
            turn: TurnController::starting_with(side),
        }
    }

    pub fn from_placement(text: &str) -> GameResult<Self> {
        let (board, side) = parse_placement(text)?;
        Ok(Self::with_board(board, side))
    }

    pub fn placement(&self) -> String {
        format_placement(&self.board, self.turn.current_player())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &TurnController {
        &self.turn
    }

    pub fn side_to_move(&self) -> Color {
        self.turn.current_player()
    }

    pub fn is_game_over(&self) -> bool {
        self.turn.is_game_over()
    }

    pub fn winner(&self) -> Option<Color> {
        self.turn.winner()
    }

    /// Candidates for the piece on `square`, if it belongs to the side to move.
    pub fn select(&self, square: Square) -> GameResult<Vec<MoveCandidate>> {
        if self.turn.is_game_over() {
            return Err(GameError::GameOver);
        }
        let id = self.board.id_at(square).ok_or(GameError::EmptySquare { square })?;
        let expected = self.turn.current_player();
        if self.board.piece(id).map(|p| p.color) != Some(expected) {
            return Err(GameError::NotYourTurn { expected });
        }
        Ok(generate_moves(&self.board, id))
    }

    /// Every candidate of the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<MoveCandidate> {
        if self.turn.is_game_over() {
            return Vec::new();
        }
        moves_for_side(&self.board, self.turn.current_player())
    }

    pub fn commit(&mut self, candidate: MoveCandidate) -> GameResult<MoveOutcome> {
        if self.turn.is_game_over() {
            return Err(GameError::GameOver);
        }
        let expected = self.turn.current_player();
        let color = self
            .board
            .piece(candidate.piece)
            .map(|p| p.color)
            .ok_or_else(|| GameError::invalid_move("candidate refers to a captured piece"))?;
        if color != expected {
            return Err(GameError::NotYourTurn { expected });
        }
        execute(&mut self.board, &mut self.turn, candidate)
    }

    /// Select-then-commit by squares, e.g. from "e2e3".
    pub fn play(&mut self, from: Square, to: Square) -> GameResult<MoveOutcome> {
        let candidate = self
            .select(from)?
            .into_iter()
            .find(|m| m.target == to)
            .ok_or_else(|| {
                GameError::invalid_move(format!("no legal move from {} to {}", from, to))
            })?;
        self.commit(candidate)
    }

    /// Back to the standard opening position with White to move.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn.reset();
        info!("game reset");
    }
}
