use crate::board::{Board, Move, Occupant, Square};

use super::apply::MovePlan;

/// A move applied to a board for inspection only.
///
/// Every square the move writes to is saved before it is applied, and restored
/// when the guard is dropped, on every exit path.
pub(crate) struct Trial<'a> {
    board: &'a mut Board,
    saved: [(Square, Option<Occupant>); 4],
    len: usize,
}

impl<'a> Trial<'a> {
    pub(crate) fn begin(board: &'a mut Board, mv: Move) -> Self {
        let plan = MovePlan::classify(board, mv);
        let (squares, len) = plan.touched(mv);
        let saved = squares.map(|sq| (sq, board.occupant(sq)));
        plan.execute(board, mv);
        Trial { board, saved, len }
    }

    pub(crate) fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        for &(sq, occupant) in self.saved[..self.len].iter().rev() {
            self.board.place(sq, occupant);
        }
    }
}
