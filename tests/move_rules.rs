use knightfall::movegen::{generate_moves, line_moves, MoveCandidate};
use knightfall::{Board, Color, PieceKind, Square};

fn sq(x: i32, y: i32) -> Square {
    Square::new(x, y).unwrap()
}

fn split(moves: &[MoveCandidate]) -> (Vec<Square>, Vec<Square>) {
    let mut plain: Vec<Square> = moves.iter().filter(|m| !m.is_attack).map(|m| m.target).collect();
    let mut attack: Vec<Square> = moves.iter().filter(|m| m.is_attack).map(|m| m.target).collect();
    plain.sort();
    attack.sort();
    (plain, attack)
}

#[test]
fn rook_ray_with_enemy_pawn_scenario() {
    let mut board = Board::new();
    let rook = board.add_piece(PieceKind::Rook, Color::White, sq(0, 0)).unwrap();
    board.add_piece(PieceKind::Pawn, Color::Black, sq(0, 3)).unwrap();

    let mut ray = Vec::new();
    line_moves(&board, rook, 0, 1, &mut ray);
    let (plain, attack) = split(&ray);
    assert_eq!(plain, vec![sq(0, 1), sq(0, 2)]);
    assert_eq!(attack, vec![sq(0, 3)]);
}

#[test]
fn pawn_scenario_no_diagonal_without_capture() {
    let mut board = Board::new();
    let pawn = board.add_piece(PieceKind::Pawn, Color::White, sq(3, 1)).unwrap();
    board.add_piece(PieceKind::Pawn, Color::Black, sq(4, 2)).unwrap();

    let (plain, attack) = split(&generate_moves(&board, pawn));
    assert_eq!(plain, vec![sq(3, 2)]);
    assert_eq!(attack, vec![sq(4, 2)]);
}

#[test]
fn unobstructed_ray_reaches_edge() {
    // Every square, every direction: ray length equals distance to the edge
    for origin in Square::all() {
        let mut board = Board::new();
        let queen = board.add_piece(PieceKind::Queen, Color::White, origin).unwrap();
        for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1), (1, 1), (1, -1), (-1, 1), (-1, -1)] {
            let mut expected = 0;
            while origin.offset(dx * (expected + 1), dy * (expected + 1)).is_some() {
                expected += 1;
            }
            let mut ray = Vec::new();
            line_moves(&board, queen, dx, dy, &mut ray);
            assert_eq!(ray.len(), expected as usize, "{origin} ({dx}, {dy})");
            assert!(ray.iter().all(|m| !m.is_attack));
        }
    }
}

#[test]
fn blocker_at_distance_d() {
    let origin = sq(0, 0);
    for d in 1..8 {
        // Opposing blocker: d - 1 plain moves then one attack on the blocker
        let mut board = Board::new();
        let rook = board.add_piece(PieceKind::Rook, Color::White, origin).unwrap();
        board.add_piece(PieceKind::Knight, Color::Black, sq(d, 0)).unwrap();
        let mut ray = Vec::new();
        line_moves(&board, rook, 1, 0, &mut ray);
        let (plain, attack) = split(&ray);
        assert_eq!(plain.len(), (d - 1) as usize);
        assert_eq!(attack, vec![sq(d, 0)]);

        // Own blocker: d - 1 plain moves, no attack
        let mut board = Board::new();
        let rook = board.add_piece(PieceKind::Rook, Color::White, origin).unwrap();
        board.add_piece(PieceKind::Knight, Color::White, sq(d, 0)).unwrap();
        let mut ray = Vec::new();
        line_moves(&board, rook, 1, 0, &mut ray);
        let (plain, attack) = split(&ray);
        assert_eq!(plain.len(), (d - 1) as usize);
        assert!(attack.is_empty());
    }
}

#[test]
fn bishop_and_rook_stay_on_their_lines() {
    let mut board = Board::new();
    let bishop = board.add_piece(PieceKind::Bishop, Color::Black, sq(2, 5)).unwrap();
    let rook = board.add_piece(PieceKind::Rook, Color::Black, sq(6, 1)).unwrap();
    for m in generate_moves(&board, bishop) {
        let (dx, dy) = (m.target.file() - 2, m.target.rank() - 5);
        assert_eq!(dx.abs(), dy.abs());
    }
    for m in generate_moves(&board, rook) {
        assert!(m.target.file() == 6 || m.target.rank() == 1);
    }
}

#[test]
fn knight_in_corner_with_mixed_neighbours() {
    let mut board = Board::new();
    let knight = board.add_piece(PieceKind::Knight, Color::White, sq(0, 0)).unwrap();
    board.add_piece(PieceKind::Pawn, Color::White, sq(1, 2)).unwrap();
    board.add_piece(PieceKind::Pawn, Color::Black, sq(2, 1)).unwrap();
    let (plain, attack) = split(&generate_moves(&board, knight));
    assert!(plain.is_empty());
    assert_eq!(attack, vec![sq(2, 1)]);
}

#[test]
fn king_single_steps_only() {
    let mut board = Board::new();
    let king = board.add_piece(PieceKind::King, Color::Black, sq(4, 7)).unwrap();
    board.add_piece(PieceKind::Rook, Color::White, sq(3, 7)).unwrap();
    board.add_piece(PieceKind::Pawn, Color::Black, sq(5, 6)).unwrap();
    let (plain, attack) = split(&generate_moves(&board, king));
    assert_eq!(plain, vec![sq(3, 6), sq(4, 6), sq(5, 7)]);
    assert_eq!(attack, vec![sq(3, 7)]);
}

#[test]
fn pawn_never_double_steps_or_captures_forward() {
    let board = Board::standard();
    for (id, piece) in board.pieces().filter(|(_, p)| p.kind == PieceKind::Pawn) {
        let moves = generate_moves(&board, id);
        assert_eq!(moves.len(), 1);
        let step = moves[0].target.rank() - piece.position.rank();
        assert_eq!(step, piece.color.forward());
        assert!(!moves[0].is_attack);
    }

    let mut board = Board::new();
    let pawn = board.add_piece(PieceKind::Pawn, Color::Black, sq(0, 4)).unwrap();
    board.add_piece(PieceKind::Pawn, Color::White, sq(0, 3)).unwrap();
    board.add_piece(PieceKind::Pawn, Color::White, sq(1, 3)).unwrap();
    let (plain, attack) = split(&generate_moves(&board, pawn));
    assert!(plain.is_empty());
    assert_eq!(attack, vec![sq(1, 3)]);
}

#[test]
fn boxed_in_pieces_have_no_candidates() {
    let board = Board::standard();
    for (id, piece) in board.pieces() {
        let moves = generate_moves(&board, id);
        match piece.kind {
            PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen | PieceKind::King => {
                assert!(
                    moves.is_empty(),
                    "{:?} on {} should be boxed in",
                    piece.kind,
                    piece.position
                )
            }
            PieceKind::Knight => assert_eq!(moves.len(), 2),
            PieceKind::Pawn => assert_eq!(moves.len(), 1),
        }
    }
}
