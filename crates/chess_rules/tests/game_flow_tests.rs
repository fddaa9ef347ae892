//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Turn alternation and move validation
//! - En passant, castling and promotion through the public API
//! - Checkmate and stalemate detection

use chess_rules::api::{apply, game_status, is_member, last_move, legal_moves_for, new_game, reset_game, Game};
use chess_rules::{Board, GameStatus, Move, Piece, PieceKind, PieceView, RulesError, Side, Square};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square name")
}

fn play_all(game: &mut Game, moves: &[&str]) {
    for text in moves {
        let mv: Move = text.parse().expect("valid move text");
        game.play(mv.from, mv.to)
            .unwrap_or_else(|e| panic!("{text} should be legal: {e}"));
    }
}

fn position(pieces: &[(&str, PieceKind, Side)]) -> Board {
    let placed: Vec<(Square, Piece)> = pieces
        .iter()
        .map(|&(name, kind, side)| (sq(name), Piece::new(kind, side)))
        .collect();
    Board::from_pieces(&placed).expect("valid test position")
}

fn view(kind: PieceKind, side: Side) -> Option<PieceView> {
    Some(PieceView { kind, side })
}

// ============================================================================
// Turn Alternation Tests
// ============================================================================

#[test]
fn test_white_has_twenty_opening_moves() {
    let mut game = new_game();
    let moves = game.all_legal_moves();

    assert_eq!(moves.len(), 20, "16 pawn moves + 4 knight moves");
    let knight_moves = moves
        .iter()
        .filter(|m| game.board().piece_at(m.from).map(|p| p.kind) == Some(PieceKind::Knight))
        .count();
    assert_eq!(knight_moves, 4);
}

#[test]
fn test_turns_alternate_and_wrong_side_is_rejected() {
    let mut game = new_game();
    assert_eq!(game.side_to_move(), Side::White);

    let err = game.play(sq("e7"), sq("e5")).unwrap_err();
    assert_eq!(
        err,
        RulesError::WrongSide {
            square: sq("e7"),
            side: Side::White
        }
    );
    assert!(game.legal_moves(sq("e7")).is_empty());

    play_all(&mut game, &["e2e4"]);
    assert_eq!(game.side_to_move(), Side::Black);
    assert_eq!(game.history(), &[Move::new(sq("e2"), sq("e4"))]);
    assert_eq!(game.legal_moves(sq("e7")).len(), 2);
}

#[test]
fn test_illegal_and_empty_proposals_are_rejected() {
    let mut game = new_game();

    assert_eq!(
        game.play(sq("e2"), sq("e5")).unwrap_err(),
        RulesError::IllegalMove {
            from: sq("e2"),
            to: sq("e5")
        }
    );
    assert_eq!(
        game.play(sq("e4"), sq("e5")).unwrap_err(),
        RulesError::EmptySquare { square: sq("e4") }
    );
    assert_eq!(game.side_to_move(), Side::White, "rejections do not pass the turn");
}

#[test]
fn test_apply_requires_membership_in_fresh_query() {
    // A move is only accepted if it is in the stored set, and every execution
    // invalidates the stored sets
    let mut board = Board::new();
    let e2e4 = Move::new(sq("e2"), sq("e4"));

    assert!(!is_member(&board, &e2e4), "nothing generated yet");
    assert!(matches!(apply(&mut board, e2e4), Err(RulesError::IllegalMove { .. })));

    legal_moves_for(&mut board, sq("e2"));
    legal_moves_for(&mut board, sq("d2"));
    assert!(is_member(&board, &e2e4));
    assert!(!is_member(&board, &Move::new(sq("e2"), sq("e5"))));

    let outcome = apply(&mut board, e2e4).unwrap();
    assert!(!outcome.was_capture);
    assert_eq!(last_move(&board), Some(e2e4));

    let d2d4 = Move::new(sq("d2"), sq("d4"));
    assert!(!is_member(&board, &d2d4), "stale query was invalidated");
    assert!(apply(&mut board, d2d4).is_err());
}

#[test]
fn test_speculative_execution_invalidates_stored_moves() {
    // e2-e7 is legal now, but not once a black rook stands on e5
    let mut board = position(&[
        ("e1", PieceKind::King, Side::White),
        ("e2", PieceKind::Rook, Side::White),
        ("a8", PieceKind::King, Side::Black),
        ("h5", PieceKind::Rook, Side::Black),
    ]);
    let e2e7 = Move::new(sq("e2"), sq("e7"));
    assert!(legal_moves_for(&mut board, sq("e2")).contains(&e2e7));

    board.execute(Move::new(sq("h5"), sq("e5")), true).unwrap();
    assert!(!is_member(&board, &e2e7));
    assert!(matches!(apply(&mut board, e2e7), Err(RulesError::IllegalMove { .. })));
    assert_eq!(board.occupant(sq("e5")), view(PieceKind::Rook, Side::Black));
    assert_eq!(board.occupant(sq("e2")), view(PieceKind::Rook, Side::White));

    let moves = legal_moves_for(&mut board, sq("e2"));
    assert!(moves.contains(&Move::new(sq("e2"), sq("e5"))));
    assert!(!moves.contains(&e2e7));
}

#[test]
fn test_legal_move_query_is_idempotent() {
    let mut board = Board::new();
    for name in ["b1", "e2", "e1", "a1"] {
        let first = legal_moves_for(&mut board, sq(name));
        let second = legal_moves_for(&mut board, sq(name));
        assert_eq!(first, second, "query for {name} changed");
    }
    assert!(legal_moves_for(&mut board, sq("e4")).is_empty());
}

#[test]
fn test_capture_is_reported() {
    let mut game = new_game();
    play_all(&mut game, &["e2e4", "d7d5"]);
    let outcome = game.play(sq("e4"), sq("d5")).unwrap();
    assert!(outcome.was_capture);
    assert_eq!(outcome.mv.captured, view(PieceKind::Pawn, Side::Black));
    assert_eq!(game.board().count_pieces(Side::Black), 15);
}

#[test]
fn test_reset_game_restores_start() {
    let mut game = new_game();
    play_all(&mut game, &["e2e4", "e7e5"]);
    reset_game(&mut game);

    assert_eq!(game.side_to_move(), Side::White);
    assert!(game.history().is_empty());
    assert_eq!(game.board().last_move(), None);
    assert_eq!(game.board().occupant(sq("e2")), view(PieceKind::Pawn, Side::White));
}

// ============================================================================
// En Passant Tests
// ============================================================================

#[test]
fn test_en_passant_removes_the_passed_pawn() {
    // After e2-e4 a black pawn on d4 captures onto e3 and removes the pawn on e4
    let mut game = new_game();
    play_all(&mut game, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4"]);

    assert_eq!(game.board().en_passant_pawn(), Some(sq("e4")));
    let moves = game.legal_moves(sq("d4"));
    assert!(moves.contains(&Move::new(sq("d4"), sq("e3"))));

    let outcome = game.play(sq("d4"), sq("e3")).unwrap();
    assert!(!outcome.was_capture, "e3 was empty, so the move reports quiet");
    assert_eq!(outcome.mv.captured, view(PieceKind::Pawn, Side::White));
    assert_eq!(game.board().occupant(sq("e4")), None, "passed pawn removed");
    assert_eq!(game.board().occupant(sq("e3")), view(PieceKind::Pawn, Side::Black));
    assert_eq!(game.board().count_pieces(Side::White), 15);
    assert_eq!(game.board().en_passant_pawn(), None);
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let mut game = new_game();
    play_all(&mut game, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4", "h7h6", "h2h3"]);

    assert_eq!(game.board().en_passant_pawn(), None);
    assert!(!game.legal_moves(sq("d4")).contains(&Move::new(sq("d4"), sq("e3"))));
}

#[test]
fn test_single_step_does_not_grant_en_passant() {
    let mut game = new_game();
    play_all(&mut game, &["e2e4", "a7a6", "e4e5", "d7d6"]);
    // d6 is a single step, so it cannot be taken en passant
    assert_eq!(game.board().en_passant_pawn(), None);
}

// ============================================================================
// Castling Tests
// ============================================================================

fn castling_position(extra: &[(&str, PieceKind, Side)]) -> Board {
    let mut pieces = vec![
        ("e1", PieceKind::King, Side::White),
        ("a1", PieceKind::Rook, Side::White),
        ("h1", PieceKind::Rook, Side::White),
        ("e8", PieceKind::King, Side::Black),
    ];
    pieces.extend_from_slice(extra);
    position(&pieces)
}

#[test]
fn test_no_castling_from_initial_position() {
    let mut board = Board::new();
    let moves = legal_moves_for(&mut board, sq("e1"));
    assert!(moves.is_empty());
}

#[test]
fn test_castling_kingside_relocates_rook() {
    let mut board = castling_position(&[]);
    let moves = legal_moves_for(&mut board, sq("e1"));
    assert!(moves.contains(&Move::new(sq("e1"), sq("g1"))));
    assert!(moves.contains(&Move::new(sq("e1"), sq("c1"))));

    apply(&mut board, Move::new(sq("e1"), sq("g1"))).unwrap();
    assert_eq!(board.occupant(sq("g1")), view(PieceKind::King, Side::White));
    assert_eq!(board.occupant(sq("f1")), view(PieceKind::Rook, Side::White));
    assert_eq!(board.occupant(sq("h1")), None);
    assert_eq!(board.occupant(sq("e1")), None);
    assert!(board.piece_at(sq("f1")).is_some_and(|r| r.has_moved));
    assert_eq!(last_move(&board), Some(Move::new(sq("e1"), sq("g1"))));
}

#[test]
fn test_castling_queenside_relocates_rook() {
    let mut board = castling_position(&[]);
    legal_moves_for(&mut board, sq("e1"));
    apply(&mut board, Move::new(sq("e1"), sq("c1"))).unwrap();

    assert_eq!(board.occupant(sq("c1")), view(PieceKind::King, Side::White));
    assert_eq!(board.occupant(sq("d1")), view(PieceKind::Rook, Side::White));
    assert_eq!(board.occupant(sq("a1")), None);
}

#[test]
fn test_castling_refused_when_path_blocked() {
    // b1 lies between king and rook even though the king never crosses it
    let mut board = castling_position(&[("b1", PieceKind::Knight, Side::White)]);
    let moves = legal_moves_for(&mut board, sq("e1"));
    assert!(!moves.contains(&Move::new(sq("e1"), sq("c1"))));
    assert!(moves.contains(&Move::new(sq("e1"), sq("g1"))));
}

#[test]
fn test_castling_refused_when_in_check() {
    let mut board = castling_position(&[("e4", PieceKind::Rook, Side::Black)]);
    let moves = legal_moves_for(&mut board, sq("e1"));
    assert!(moves.iter().all(|m| m.col_delta().abs() < 2));
}

#[test]
fn test_castling_refused_through_attacked_square() {
    let mut board = castling_position(&[("f5", PieceKind::Rook, Side::Black)]);
    let moves = legal_moves_for(&mut board, sq("e1"));
    assert!(!moves.contains(&Move::new(sq("e1"), sq("g1"))), "f1 is attacked");
    assert!(moves.contains(&Move::new(sq("e1"), sq("c1"))));
}

#[test]
fn test_castling_refused_onto_attacked_square() {
    let mut board = castling_position(&[("g5", PieceKind::Rook, Side::Black)]);
    let moves = legal_moves_for(&mut board, sq("e1"));
    assert!(!moves.contains(&Move::new(sq("e1"), sq("g1"))), "g1 is attacked");
}

#[test]
fn test_castling_allowed_when_only_rook_path_attacked() {
    // An attacked b1 does not stop queenside castling; the king never stands there
    let mut board = castling_position(&[("b5", PieceKind::Rook, Side::Black)]);
    let moves = legal_moves_for(&mut board, sq("e1"));
    assert!(moves.contains(&Move::new(sq("e1"), sq("c1"))));
}

#[test]
fn test_castling_refused_after_king_or_rook_moved() {
    let mut game = Game::from_board(castling_position(&[]), Side::White);
    play_all(&mut game, &["h1h2", "e8e7", "h2h1", "e7e8"]);
    let moves = game.legal_moves(sq("e1"));
    assert!(!moves.contains(&Move::new(sq("e1"), sq("g1"))), "h-rook has moved");
    assert!(moves.contains(&Move::new(sq("e1"), sq("c1"))));

    play_all(&mut game, &["e1d1", "e8d8", "d1e1", "d8e8"]);
    let moves = game.legal_moves(sq("e1"));
    assert!(moves.iter().all(|m| m.col_delta().abs() < 2), "king has moved");
}

// ============================================================================
// Promotion Tests
// ============================================================================

#[test]
fn test_white_pawn_promotes_to_queen() {
    let board = position(&[
        ("e1", PieceKind::King, Side::White),
        ("h8", PieceKind::King, Side::Black),
        ("a7", PieceKind::Pawn, Side::White),
        ("b8", PieceKind::Rook, Side::Black),
    ]);
    let mut game = Game::from_board(board.clone(), Side::White);
    game.play(sq("a7"), sq("a8")).unwrap();
    assert_eq!(game.board().occupant(sq("a8")), view(PieceKind::Queen, Side::White));

    let mut game = Game::from_board(board, Side::White);
    let outcome = game.play(sq("a7"), sq("b8")).unwrap();
    assert!(outcome.was_capture);
    assert_eq!(game.board().occupant(sq("b8")), view(PieceKind::Queen, Side::White));
    assert_eq!(game.board().occupant(sq("a7")), None);
}

#[test]
fn test_black_pawn_promotes_to_queen() {
    let board = position(&[
        ("e1", PieceKind::King, Side::White),
        ("h8", PieceKind::King, Side::Black),
        ("c2", PieceKind::Pawn, Side::Black),
    ]);
    let mut game = Game::from_board(board, Side::Black);
    game.play(sq("c2"), sq("c1")).unwrap();
    assert_eq!(game.board().occupant(sq("c1")), view(PieceKind::Queen, Side::Black));
    assert_eq!(game.side_to_move(), Side::White);
}

// ============================================================================
// Terminal State Tests
// ============================================================================

#[test]
fn test_fools_mate() {
    let mut game = new_game();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4"]);
    let outcome = game.play(sq("d8"), sq("h4")).unwrap();

    assert_eq!(outcome.status, GameStatus::Checkmate { winner: Side::Black });
    assert_eq!(game.status(), GameStatus::Checkmate { winner: Side::Black });
    assert!(game.all_legal_moves().is_empty());

    let mut board = game.board().clone();
    let whites: Vec<Square> = board.pieces(Side::White).map(|(s, _)| s).collect();
    assert_eq!(whites.len(), 16);
    for square in whites {
        assert!(legal_moves_for(&mut board, square).is_empty(), "{square} can still move");
    }

    assert_eq!(game.play(sq("a2"), sq("a3")).unwrap_err(), RulesError::GameOver);
}

#[test]
fn test_stalemate() {
    // Black king on a8, white queen on b6: no legal move, no check
    let mut board = position(&[
        ("a8", PieceKind::King, Side::Black),
        ("b6", PieceKind::Queen, Side::White),
        ("h1", PieceKind::King, Side::White),
    ]);
    assert_eq!(game_status(&mut board, Side::Black), GameStatus::Stalemate);
    assert_eq!(game_status(&mut board, Side::White), GameStatus::Ongoing);

    let game = Game::from_board(board, Side::Black);
    assert_eq!(game.status(), GameStatus::Stalemate);
}

#[test]
fn test_queen_move_delivers_stalemate() {
    let board = position(&[
        ("a8", PieceKind::King, Side::Black),
        ("b5", PieceKind::Queen, Side::White),
        ("h1", PieceKind::King, Side::White),
    ]);
    let mut game = Game::from_board(board, Side::White);
    let outcome = game.play(sq("b5"), sq("b6")).unwrap();
    assert_eq!(outcome.status, GameStatus::Stalemate);
}

#[test]
fn test_back_rank_mate() {
    let board = position(&[
        ("g8", PieceKind::King, Side::Black),
        ("f7", PieceKind::Pawn, Side::Black),
        ("g7", PieceKind::Pawn, Side::Black),
        ("h7", PieceKind::Pawn, Side::Black),
        ("a1", PieceKind::Rook, Side::White),
        ("g1", PieceKind::King, Side::White),
    ]);
    let mut game = Game::from_board(board, Side::White);
    let outcome = game.play(sq("a1"), sq("a8")).unwrap();
    assert_eq!(outcome.status, GameStatus::Checkmate { winner: Side::White });
}
