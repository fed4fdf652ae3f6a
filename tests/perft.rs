use knightfall::perft::{divide, perft};
use knightfall::Game;

#[test]
fn perft_regression_starting_pos() {
    knightfall::init();
    let game = Game::new();
    let expected = [1u64, 12, 144];
    for (depth, want) in expected.iter().enumerate() {
        let got = perft(&game, depth as u8);
        assert_eq!(got, *want, "perft mismatch at depth {}: got {} expected {}", depth, got, want);
    }
}

#[test]
fn perft_stops_at_king_capture() {
    // The rook can take the king straight away; that branch has no children
    let game = Game::from_placement("4k3/8/8/8/8/8/8/4R1K1 w").unwrap();
    let parts = divide(&game, 2);
    let capture = parts.iter().find(|(mv, _)| mv == "e1e8").expect("king capture");
    assert_eq!(capture.1, 0);
    assert!(parts.iter().filter(|(mv, _)| mv != "e1e8").all(|(_, n)| *n > 0));
    let total: u64 = parts.iter().map(|(_, n)| n).sum();
    assert_eq!(total, perft(&game, 2));
}

#[test]
fn perft_depth_one_counts_candidates() {
    let game =
        Game::from_placement("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w").unwrap();
    assert_eq!(perft(&game, 1), game.legal_moves().len() as u64);
}
