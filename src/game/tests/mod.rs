//! Game module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - king-safety filtering, turn order and move bookkeeping
//! - `special_moves.rs` - castling, en passant and promotion
//! - `status.rs` - check, checkmate and stalemate
//! - `perft.rs` - node counts for well-known positions
//! - `proptest.rs` - property-based tests over random playouts


use crate::board::tests::diagram;
use crate::board::{Color, Move, Square};
use crate::game::Game;

pub(crate) use crate::board::tests::{sq, targets};

pub(crate) fn game_from(rows: &str, turn: Color) -> Game {
    Game::from_parts(diagram(rows), turn, None)
}

pub(crate) fn mv(from: Square, to: Square) -> Move {
    Move::new(from, to)
}

/// Play a sequence of moves, panicking on the first rejection.
pub(crate) fn play(game: &mut Game, moves: &[((u8, u8), (u8, u8))]) {
    for &((fr, fc), (tr, tc)) in moves {
        let m = mv(sq(fr, fc), sq(tr, tc));
        if let Err(err) = game.make_move(m) {
            panic!("{m} rejected: {err}");
        }
    }
}
