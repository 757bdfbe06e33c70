//! Match state: turn alternation, move execution and the end-of-game verdict

use super::{
    board::Board,
    pieces::Piece,
    position::Position,
    side::{Side, SideArray},
    snapshot::MatchSnapshot,
};

/// Outcome of a finished match, from one side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Victory,
    Defeat,
    Draw,
}

/// A running game: the board plus whose turn it is.
///
/// The attacker always opens. A turn is one selected piece making one move;
/// captures and terrain reactions resolve inside the move.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    board: Board,
    active_side: Side,
    turn_number: u32,
}

impl Match {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            active_side: Side::Attacker,
            turn_number: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_side(&self) -> Side {
        self.active_side
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Pick the piece to move this turn; it must belong to the active side.
    pub fn select_source(&mut self, pos: Position) -> bool {
        self.board.is_starting_point_valid(pos, self.active_side)
    }

    pub fn select_destination(&self, start: Position, dest: Position) -> bool {
        self.board.is_destination_valid(start, dest, self.active_side)
    }

    /// Execute a validated move and resolve its consequences, returning the
    /// pieces captured by it.
    pub fn make_move(&mut self, start: Position, dest: Position) -> Vec<Piece> {
        self.board.update_piece_pos(start, dest, self.active_side);
        self.board.resolve_captures()
    }

    /// Hand play to the other side and let the terrain advance its cycles.
    pub fn end_turn(&mut self) {
        self.active_side = !self.active_side;
        self.board.notify_turn_ended(self.turn_number);
        self.turn_number += 1;
    }

    /// The verdict for both sides once the match is over, if it is.
    ///
    /// A decided winner trumps the draw tests; the draw tests are read from
    /// the side about to play.
    pub fn end_status(&self) -> Option<SideArray<MatchResult>> {
        if let Some(winner) = self.board.winner() {
            let mut verdict = SideArray::new(MatchResult::Defeat, MatchResult::Defeat);
            verdict[winner] = MatchResult::Victory;
            return Some(verdict);
        }
        if self.board.is_draw(self.active_side) {
            return Some(SideArray::new(MatchResult::Draw, MatchResult::Draw));
        }
        None
    }

    pub fn save(&self) -> MatchSnapshot {
        MatchSnapshot {
            board: self.board.save(),
            active_side: self.active_side,
            turn_number: self.turn_number,
        }
    }

    pub fn restore(&mut self, snapshot: &MatchSnapshot) {
        self.board.restore(&snapshot.board);
        self.active_side = snapshot.active_side;
        self.turn_number = snapshot.turn_number;
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::new(Board::default())
    }
}
