// Move-tree node counting over the variant rules. A finished game has no moves,
// so a king capture before the last ply ends that branch.

use crate::game::Game;
use crate::utils::move_to_text;

pub fn perft(game: &Game, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let mut nodes = 0u64;
    for mv in game.legal_moves() {
        let mut child = game.clone();
        if child.commit(mv).is_ok() {
            nodes += perft(&child, depth - 1);
        }
    }
    nodes
}

/// Per-move breakdown of perft at the root, sorted by move text.
pub fn divide(game: &Game, depth: u8) -> Vec<(String, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for mv in game.legal_moves() {
        let Some(from) = game.board().piece(mv.piece).map(|p| p.position) else {
            continue;
        };
        let mut child = game.clone();
        if child.commit(mv).is_ok() {
            out.push((move_to_text(from, mv.target), perft(&child, depth - 1)));
        }
    }
    out.sort();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perft_start_position() {
        let game = Game::new();
        assert_eq!(perft(&game, 0), 1);
        assert_eq!(perft(&game, 1), 12);
        assert_eq!(perft(&game, 2), 144);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let game = Game::new();
        let parts = divide(&game, 2);
        assert_eq!(parts.len(), 12);
        assert!(parts.iter().all(|(_, n)| *n == 12));
        assert_eq!(parts.iter().map(|(_, n)| n).sum::<u64>(), perft(&game, 2));
    }
}
