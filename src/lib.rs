pub mod board;
pub mod cli;
pub mod error;
pub mod executor;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod perft;
pub mod square;
pub mod turn;
pub mod utils;

pub use board::{Board, Color, Piece, PieceId, PieceKind};
pub use error::{GameError, GameResult};
pub use executor::{execute, MoveOutcome};
pub use game::Game;
pub use movegen::{generate_moves, MoveCandidate};
pub use square::{position_on_board, Square};
pub use turn::TurnController;

/// Warms the leaper tables; move generation also builds them lazily.
pub fn init() {
    utils::init_leaper_tables();
}
