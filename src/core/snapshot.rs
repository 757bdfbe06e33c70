//! Saved game state for rewinding moves

use std::collections::HashMap;

use hashbag::HashBag;

use super::{
    cell::Cell,
    pieces::{Piece, PieceKind},
    position::Position,
    side::{Side, SideArray},
};

/// Everything a board needs to return to an earlier state
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub(crate) cells: HashMap<Position, Cell>,
    pub(crate) pieces: SideArray<HashMap<Position, Piece>>,
    pub(crate) current_pos: Option<Position>,
    pub(crate) captured: SideArray<HashBag<PieceKind>>,
}

/// A board snapshot plus the turn bookkeeping around it
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSnapshot {
    pub(crate) board: BoardSnapshot,
    pub(crate) active_side: Side,
    pub(crate) turn_number: u32,
}

impl MatchSnapshot {
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }
}
