//! Board and cell model
//!
//! Provides the fixed 8×8 grid used throughout the engine:
//! - Cells are created once and never replaced; only their contents change
//! - Every accessor is bounds-checked and returns `None` (or does nothing)
//!   off the board instead of panicking
//! - Friend/foe queries use the piece's effective controller

use serde::Serialize;

use crate::constants::{BOARD_SIZE, SETUP};
use crate::piece::Piece;
use crate::types::{PieceType, Player, Position};

const SIZE: usize = BOARD_SIZE as usize;

/// One addressable square holding zero or one piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    position: Position,
    piece: Option<Piece>,
}

impl Cell {
    fn new(position: Position) -> Self {
        Cell {
            position,
            piece: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Occupied by a piece `player` does not control
    pub fn has_enemy_piece(&self, player: Player) -> bool {
        self.piece
            .is_some_and(|piece| !piece.is_controlled_by(player))
    }

    /// Occupied by a piece `player` controls
    pub fn has_friendly_piece(&self, player: Player) -> bool {
        self.piece.is_some_and(|piece| piece.is_controlled_by(player))
    }
}

/// Fixed 8×8 array of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| Cell::new(Position::new(row as i8, col as i8)))
        });
        Board { cells }
    }

    /// Create a board with all four players in their starting layout
    pub fn with_initial_setup() -> Self {
        let mut board = Board::new();
        board.setup_initial_pieces();
        board
    }

    /// Place the 32 starting pieces
    pub fn setup_initial_pieces(&mut self) {
        for &(owner, kind, at) in SETUP.iter() {
            self.set_piece(at.into(), Piece::new(kind, owner));
        }
    }

    pub fn is_valid_position(&self, row: i8, col: i8) -> bool {
        Position::new(row, col).is_valid()
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        position
            .is_valid()
            .then(|| &self.cells[position.row as usize][position.col as usize])
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        if position.is_valid() {
            Some(&mut self.cells[position.row as usize][position.col as usize])
        } else {
            None
        }
    }

    pub fn piece(&self, position: Position) -> Option<&Piece> {
        self.cell(position).and_then(Cell::piece)
    }

    /// Check if the cell is empty (off-board positions are not empty cells)
    pub fn is_empty(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_empty)
    }

    /// Put `piece` at `position`, replacing any occupant. No-op off the board.
    pub fn set_piece(&mut self, position: Position, piece: Piece) {
        if let Some(cell) = self.cell_mut(position) {
            cell.piece = Some(piece);
        }
    }

    /// Empty the cell, returning what was there
    pub fn remove_piece(&mut self, position: Position) -> Option<Piece> {
        self.cell_mut(position).and_then(|cell| cell.piece.take())
    }

    /// Overwrite a cell's contents wholesale (used to restore simulated moves)
    pub(crate) fn replace(&mut self, position: Position, contents: Option<Piece>) {
        if let Some(cell) = self.cell_mut(position) {
            cell.piece = contents;
        }
    }

    /// Mutable access to every piece on the board
    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.cells
            .iter_mut()
            .flatten()
            .filter_map(|cell| cell.piece.as_mut())
    }

    /// Remove every piece; cells themselves are kept
    pub fn clear(&mut self) {
        self.cells
            .iter_mut()
            .flatten()
            .for_each(|cell| cell.piece = None);
    }

    /// All 64 cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Occupied cells in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> {
        self.cells()
            .filter_map(|cell| cell.piece().map(|piece| (cell.position(), piece)))
    }

    /// Pieces currently controlled by `player`
    pub fn pieces_controlled_by(&self, player: Player) -> impl Iterator<Item = (Position, &Piece)> {
        self.pieces()
            .filter(move |(_, piece)| piece.is_controlled_by(player))
    }

    /// Locate the king whose effective controller is `player`
    pub fn find_king(&self, player: Player) -> Option<Position> {
        self.pieces_controlled_by(player)
            .find(|(_, piece)| piece.kind() == PieceType::King)
            .map(|(position, _)| position)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PIECES_PER_PLAYER;

    #[test]
    fn test_out_of_bounds_access_is_none() {
        let mut board = Board::with_initial_setup();
        let outside = [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(8, 0),
            Position::new(0, 8),
            Position::new(100, -100),
        ];
        for position in outside {
            assert!(board.cell(position).is_none(), "{position} should have no cell");
            assert!(board.piece(position).is_none());
            assert!(board.remove_piece(position).is_none());
            assert!(!board.is_empty(position));
        }

        let before = board.clone();
        board.set_piece(Position::new(8, 8), Piece::new(PieceType::Rook, Player::Fall));
        assert_eq!(board, before, "Setting off the board must be a no-op");
    }

    #[test]
    fn test_cells_are_positional() {
        let board = Board::new();
        assert_eq!(board.cells().count(), 64);
        for (i, cell) in board.cells().enumerate() {
            assert_eq!(cell.position().index(), Some(i));
            assert!(cell.is_empty());
        }
    }

    #[test]
    fn test_set_get_remove() {
        let mut board = Board::new();
        let at = Position::new(4, 4);
        board.set_piece(at, Piece::new(PieceType::Knight, Player::Summer));

        assert_eq!(board.piece(at).map(Piece::kind), Some(PieceType::Knight));
        assert!(!board.is_empty(at));

        let removed = board.remove_piece(at);
        assert_eq!(removed.map(|p| p.original_owner()), Some(Player::Summer));
        assert!(board.is_empty(at));
    }

    #[test]
    fn test_friend_and_enemy_use_controller() {
        //! Friend/foe follows the effective controller after inheritance
        let mut board = Board::new();
        let at = Position::new(3, 3);
        let mut piece = Piece::new(PieceType::Pawn, Player::Summer);
        piece.transfer_control_to(Player::Winter);
        board.set_piece(at, piece);

        let cell = board.cell(at).unwrap();
        assert!(cell.has_friendly_piece(Player::Winter));
        assert!(!cell.has_enemy_piece(Player::Winter));
        assert!(cell.has_enemy_piece(Player::Summer));
        assert!(!cell.has_friendly_piece(Player::Summer));
    }

    #[test]
    fn test_initial_setup() {
        let board = Board::with_initial_setup();
        assert_eq!(board.pieces().count(), 32);

        for player in Player::ALL {
            assert_eq!(board.pieces_controlled_by(player).count(), PIECES_PER_PLAYER);
            assert_eq!(
                board.find_king(player),
                Some(player.corner()),
                "{player} king starts on its corner"
            );
            let pawns = board
                .pieces_controlled_by(player)
                .filter(|(_, p)| p.kind() == PieceType::Pawn)
                .count();
            assert_eq!(pawns, 4);
        }
    }

    #[test]
    fn test_clear_keeps_cells() {
        let mut board = Board::with_initial_setup();
        board.clear();
        assert_eq!(board.pieces().count(), 0);
        assert_eq!(board.cells().count(), 64);
        assert_eq!(board, Board::new());
    }
}
