//! Turn state: whose move it is, and whether a king has fallen.

use crate::board::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnController {
    current: Color,
    game_over: bool,
    winner: Option<Color>,
    // Moves applied since the last reset
    ply: u32,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    pub fn new() -> Self {
        Self::starting_with(Color::White)
    }

    /// Fresh state with a chosen side to move (used by placement import).
    pub fn starting_with(side: Color) -> Self {
        Self {
            current: side,
            game_over: false,
            winner: None,
            ply: 0,
        }
    }

    /// Hands the move to the other side. Does not look at the game-over flag;
    /// the executor simply never calls this after a winning capture.
    pub fn next_turn(&mut self) {
        self.current = self.current.opposite();
        self.ply += 1;
    }

    /// Terminal: only `reset` leaves this state.
    pub fn declare_winner(&mut self, color: Color) {
        self.game_over = true;
        self.winner = Some(color);
        self.ply += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn current_player(&self) -> Color {
        self.current
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }
}
