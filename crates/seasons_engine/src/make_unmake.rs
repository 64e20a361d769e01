//! Move making and unmaking for check-safety tests
//!
//! A candidate move is tried on the real board and then taken back. The
//! [`SimulatedMove`] guard holds the only mutable borrow of the board for the
//! whole trial, so nothing else can observe the intermediate position, and its
//! `Drop` puts both cells back on every exit path, unwinding included.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::Position;

/// Information needed to undo a move
#[derive(Debug, Clone, Copy)]
pub(crate) struct UndoInfo {
    pub from: Position,
    pub to: Position,
    pub from_contents: Option<Piece>,
    pub to_contents: Option<Piece>,
}

/// Make a move on the board (returns undo information)
pub(crate) fn make_move(board: &mut Board, from: Position, to: Position) -> UndoInfo {
    let undo = UndoInfo {
        from,
        to,
        from_contents: board.piece(from).copied(),
        to_contents: board.piece(to).copied(),
    };

    if let Some(piece) = board.remove_piece(from) {
        board.set_piece(to, piece);
    }

    undo
}

/// Unmake a move on the board
pub(crate) fn unmake_move(board: &mut Board, undo: UndoInfo) {
    board.replace(undo.from, undo.from_contents);
    board.replace(undo.to, undo.to_contents);
}

/// Scoped trial move; restores the board when dropped
pub(crate) struct SimulatedMove<'a> {
    board: &'a mut Board,
    undo: UndoInfo,
}

impl<'a> SimulatedMove<'a> {
    pub fn new(board: &'a mut Board, from: Position, to: Position) -> Self {
        let undo = make_move(board, from, to);
        SimulatedMove { board, undo }
    }

    /// The board with the trial move applied
    pub fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        unmake_move(&mut *self.board, self.undo);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PieceType, Player};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.set_piece(Position::new(3, 3), Piece::new(PieceType::Rook, Player::Fall));
        board.set_piece(Position::new(3, 6), Piece::new(PieceType::Pawn, Player::Summer));
        board
    }

    #[test]
    fn test_simulated_capture_is_visible_then_reverted() {
        let mut board = sample_board();
        let before = board.clone();
        let (from, to) = (Position::new(3, 3), Position::new(3, 6));

        {
            let sim = SimulatedMove::new(&mut board, from, to);
            assert!(sim.board().is_empty(from));
            assert_eq!(
                sim.board().piece(to).map(|p| p.kind()),
                Some(PieceType::Rook),
                "Moving piece sits on the target during the trial"
            );
        }

        assert_eq!(board, before);
    }

    #[test]
    fn test_revert_survives_panic() {
        //! Restoration runs during unwinding as well
        let mut board = sample_board();
        let before = board.clone();

        let result = catch_unwind(AssertUnwindSafe(|| {
            let _sim = SimulatedMove::new(&mut board, Position::new(3, 3), Position::new(0, 3));
            panic!("evaluation failed mid-simulation");
        }));

        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_make_unmake_round_trip() {
        let mut board = sample_board();
        let before = board.clone();
        let undo = make_move(&mut board, Position::new(3, 6), Position::new(4, 6));
        assert_ne!(board, before);
        unmake_move(&mut board, undo);
        assert_eq!(board, before);
    }
}
