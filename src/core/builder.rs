//! Piecewise construction of board layouts

use std::collections::HashMap;

use anyhow::Result;

use super::{
    board::Board,
    cell::Cell,
    pieces::{Piece, PieceKind},
    position::{Position, Vector},
    side::{Side, SideArray},
};

/// Builds a board from a size, terrain overrides and piece placements.
///
/// Every cell not given a terrain starts classic; cells under pieces are
/// marked occupied. The final [`Board::new`] call checks the layout.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    size: i32,
    cells: HashMap<Position, Cell>,
    pieces: Vec<Piece>,
}

impl BoardBuilder {
    pub fn new(size: i32) -> Self {
        Self {
            size,
            cells: HashMap::new(),
            pieces: Vec::new(),
        }
    }

    pub fn throne(mut self, pos: impl Into<Position>) -> Self {
        self.cells.insert(pos.into(), Cell::throne());
        self
    }

    pub fn exit(mut self, pos: impl Into<Position>) -> Self {
        self.cells.insert(pos.into(), Cell::exit());
        self
    }

    pub fn slider(mut self, pos: impl Into<Position>, orientation: Vector) -> Self {
        self.cells.insert(pos.into(), Cell::slider(orientation));
        self
    }

    pub fn piece(mut self, side: Side, kind: PieceKind, pos: impl Into<Position>) -> Self {
        self.pieces.push(Piece::new(kind, side, pos.into()));
        self
    }

    pub fn attacker(self, kind: PieceKind, pos: impl Into<Position>) -> Self {
        self.piece(Side::Attacker, kind, pos)
    }

    pub fn defender(self, kind: PieceKind, pos: impl Into<Position>) -> Self {
        self.piece(Side::Defender, kind, pos)
    }

    pub fn king(self, pos: impl Into<Position>) -> Self {
        self.piece(Side::Defender, PieceKind::King, pos)
    }

    pub fn build(self) -> Result<Board> {
        let mut cells = self.cells;
        for row in 0..self.size {
            for col in 0..self.size {
                cells
                    .entry(Position::new(row, col))
                    .or_insert_with(Cell::classic);
            }
        }

        let mut pieces = SideArray::new(HashMap::new(), HashMap::new());
        for piece in self.pieces {
            if let Some(cell) = cells.get_mut(&piece.pos) {
                cell.free = false;
            }
            pieces[piece.side].insert(piece.pos, piece);
        }

        Board::new(cells, pieces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CellKind;

    #[test]
    fn test_unmarked_cells_default_to_classic() {
        let board = BoardBuilder::new(3).build().unwrap();
        assert_eq!(board.cells().len(), 9);
        assert!(board
            .cells()
            .values()
            .all(|cell| cell.kind == CellKind::Classic && cell.free));
    }

    #[test]
    fn test_terrain_and_pieces_are_applied() {
        let board = BoardBuilder::new(5)
            .throne((2, 2))
            .exit((0, 0))
            .slider((4, 4), Vector::LEFT)
            .attacker(PieceKind::Basic, (1, 1))
            .king((2, 2))
            .build()
            .unwrap();

        assert_eq!(board.cell((2, 2).into()).unwrap().kind, CellKind::Throne);
        assert_eq!(board.cell((0, 0).into()).unwrap().kind, CellKind::Exit);
        assert!(board.cell((4, 4).into()).unwrap().is_slider());

        assert!(!board.cell((1, 1).into()).unwrap().free);
        assert!(!board.cell((2, 2).into()).unwrap().free);
        assert_eq!(board.piece_at((1, 1).into()).unwrap().side, Side::Attacker);
        assert!(board.king().is_some());
    }

    #[test]
    fn test_terrain_outside_the_grid_is_rejected() {
        assert!(BoardBuilder::new(3).throne((7, 7)).build().is_err());
    }
}
