//! Pseudo-legal generator tests.

use super::{diagram, sq, targets};
use crate::board::{Board, BoardBuilder, Color, Move, PieceKind, PROMOTION_KINDS};

#[test]
fn test_empty_square_generates_nothing() {
    let board = Board::new();
    assert!(board.pseudo_legal_moves(sq(4, 4)).is_empty());
}

#[test]
fn test_starting_position_counts() {
    let board = Board::new();
    let total: usize = board
        .iter()
        .filter(|(_, o)| o.piece.color == Color::White)
        .map(|(from, _)| board.pseudo_legal_moves(from).len())
        .sum();
    assert_eq!(total, 20);
}

#[test]
fn test_rook_stops_before_friend_and_on_enemy() {
    let board = diagram(
        "
        ........
        ........
        ........
        ...p....
        ........
        ........
        ...R..P.
        ........
        ",
    );
    let moves = board.pseudo_legal_moves(sq(2, 4));
    assert_eq!(
        targets(&moves),
        vec![
            sq(1, 4),
            sq(2, 1),
            sq(2, 2),
            sq(2, 3),
            sq(2, 5),
            sq(2, 6),
            sq(3, 4),
            sq(4, 4),
            sq(5, 4),
        ]
    );
}

#[test]
fn test_bishop_rays() {
    let board = diagram(
        "
        ........
        ........
        ........
        ........
        ...B....
        ........
        .P...n..
        ........
        ",
    );
    let moves = board.pseudo_legal_moves(sq(4, 4));
    // up-left 3, up-right 4, down-right capture on f2, down-left blocked by own b2
    assert_eq!(moves.len(), 3 + 4 + 2 + 1);
    assert!(moves.contains(&Move::new(sq(4, 4), sq(2, 6))));
    assert!(!moves.reaches(sq(1, 7)));
    assert!(!moves.reaches(sq(2, 2)));
}

#[test]
fn test_queen_is_rook_plus_bishop() {
    let board = BoardBuilder::new()
        .piece(sq(4, 4), Color::White, PieceKind::Queen)
        .build();
    assert_eq!(board.pseudo_legal_moves(sq(4, 4)).len(), 27);
}

#[test]
fn test_knight_skips_friends() {
    let board = diagram(
        "
        ........
        ........
        ........
        ........
        ........
        .....p..
        ...P....
        .N......
        ",
    );
    let moves = board.pseudo_legal_moves(sq(1, 2));
    assert_eq!(targets(&moves), vec![sq(3, 1), sq(3, 3)]);

    let board = Board::new();
    let moves = board.pseudo_legal_moves(sq(1, 7));
    assert_eq!(targets(&moves), vec![sq(3, 6), sq(3, 8)]);
}

#[test]
fn test_king_steps_only() {
    let board = diagram(
        "
        ........
        ........
        ........
        ........
        ........
        ........
        ...Pp...
        R...K..R
        ",
    );
    let moves = board.pseudo_legal_moves(sq(1, 5));
    // no castling from the generator
    assert_eq!(
        targets(&moves),
        vec![sq(1, 4), sq(1, 6), sq(2, 5), sq(2, 6)]
    );
}

#[test]
fn test_pawn_single_and_double_step() {
    let board = Board::new();
    let moves = board.pseudo_legal_moves(sq(2, 5));
    assert_eq!(targets(&moves), vec![sq(3, 5), sq(4, 5)]);

    let moves = board.pseudo_legal_moves(sq(7, 4));
    assert_eq!(targets(&moves), vec![sq(5, 4), sq(6, 4)]);
}

#[test]
fn test_pawn_double_step_needs_both_squares_empty() {
    let board = diagram(
        "
        ........
        ........
        ........
        ........
        ....n...
        ...n....
        ...PP...
        ........
        ",
    );
    // d2 is blocked outright, e2 may step once or capture but not jump
    assert!(board.pseudo_legal_moves(sq(2, 4)).is_empty());
    assert_eq!(targets(&board.pseudo_legal_moves(sq(2, 5))), vec![sq(3, 4), sq(3, 5)]);
}

#[test]
fn test_pawn_double_step_only_from_start_rank() {
    let board = BoardBuilder::new()
        .piece(sq(3, 1), Color::White, PieceKind::Pawn)
        .build();
    assert_eq!(targets(&board.pseudo_legal_moves(sq(3, 1))), vec![sq(4, 1)]);
}

#[test]
fn test_pawn_promotion_expands_forward_and_capture() {
    let board = diagram(
        "
        .r......
        P.......
        ........
        ........
        ........
        ........
        ........
        ........
        ",
    );
    let moves = board.pseudo_legal_moves(sq(7, 1));
    assert_eq!(moves.len(), 8);
    for kind in PROMOTION_KINDS {
        assert!(moves.contains(&Move::promoting(sq(7, 1), sq(8, 1), kind)));
        assert!(moves.contains(&Move::promoting(sq(7, 1), sq(8, 2), kind)));
    }
    assert!(!moves.contains(&Move::new(sq(7, 1), sq(8, 1))));
}

#[test]
fn test_black_pawn_promotes_on_first_rank() {
    let board = BoardBuilder::new()
        .piece(sq(2, 8), Color::Black, PieceKind::Pawn)
        .build();
    let moves = board.pseudo_legal_moves(sq(2, 8));
    assert_eq!(moves.len(), 4);
    assert!(moves.iter().all(|m| m.to == sq(1, 8) && m.promotion.is_some()));
}

#[test]
fn test_pawn_never_captures_forward() {
    let board = diagram(
        "
        ........
        ........
        ........
        ........
        ....p...
        ....P...
        ........
        ........
        ",
    );
    assert!(board.pseudo_legal_moves(sq(3, 5)).is_empty());
}
