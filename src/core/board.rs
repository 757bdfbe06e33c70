//! Board state: terrain, occupancy, movement and the win and draw tests

use std::collections::{HashMap, HashSet};

use anyhow::{ensure, Result};
use hashbag::HashBag;

use super::{
    capture,
    cell::{Cell, CellKind},
    pieces::{Piece, PieceKind},
    position::{Position, Vector},
    preset::Preset,
    side::{Side, SideArray},
    snapshot::BoardSnapshot,
};

/// The playing field: a square grid of cells plus the pieces standing on it.
///
/// The piece that moved (or is about to move) this turn is tracked so that
/// terrain reactions and capture resolution know where to look.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    size: i32,
    cells: HashMap<Position, Cell>,
    pieces: SideArray<HashMap<Position, Piece>>,
    current_pos: Option<Position>,
    sliders: HashSet<Position>,
    captured: SideArray<HashBag<PieceKind>>,
}

impl Board {
    /// Build a board from explicit cell and piece maps, checking that they
    /// describe a consistent square layout.
    pub fn new(
        cells: HashMap<Position, Cell>,
        pieces: SideArray<HashMap<Position, Piece>>,
    ) -> Result<Self> {
        let size = (cells.len() as f64).sqrt() as i32;
        ensure!(
            size > 0 && (size * size) as usize == cells.len(),
            "Cell map of {} entries is not a square grid",
            cells.len()
        );
        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                ensure!(cells.contains_key(&pos), "Layout is missing cell {}", pos);
            }
        }

        for side in Side::all() {
            for (&pos, piece) in pieces[side].iter() {
                ensure!(
                    piece.pos == pos,
                    "Piece keyed at {} records position {}",
                    pos,
                    piece.pos
                );
                ensure!(piece.side == side, "Piece at {} is keyed under the wrong side", pos);
                ensure!(cells.contains_key(&pos), "Piece at {} is off the board", pos);
            }
        }
        ensure!(
            !pieces[Side::Attacker].values().any(|p| p.kind.is_king()),
            "Attacker side cannot field a king"
        );
        ensure!(
            pieces[Side::Defender]
                .values()
                .filter(|p| p.kind.is_king())
                .count()
                <= 1,
            "Defender side cannot field more than one king"
        );

        for (&pos, cell) in cells.iter() {
            let occupants = Side::all()
                .into_iter()
                .filter(|&side| pieces[side].contains_key(&pos))
                .count();
            ensure!(occupants <= 1, "Cell {} is occupied by both sides", pos);
            ensure!(
                cell.free == (occupants == 0),
                "Cell {} has a free flag out of step with its occupancy",
                pos
            );
        }

        let sliders = Self::slider_positions(&cells);
        Ok(Self {
            size,
            cells,
            pieces,
            current_pos: None,
            sliders,
            captured: SideArray::new(HashBag::new(), HashBag::new()),
        })
    }

    fn slider_positions(cells: &HashMap<Position, Cell>) -> HashSet<Position> {
        cells
            .iter()
            .filter(|(_, cell)| cell.is_slider())
            .map(|(&pos, _)| pos)
            .collect()
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn cells(&self) -> &HashMap<Position, Cell> {
        &self.cells
    }

    pub fn pieces(&self, side: Side) -> &HashMap<Position, Piece> {
        &self.pieces[side]
    }

    /// Pieces this side has taken from the opponent
    pub fn captured(&self, side: Side) -> &HashBag<PieceKind> {
        &self.captured[side]
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        Side::all()
            .into_iter()
            .find_map(|side| self.pieces[side].get(&pos))
    }

    /// The piece selected or moved this turn, if any
    pub fn current_piece(&self) -> Option<&Piece> {
        self.current_pos.and_then(|pos| self.piece_at(pos))
    }

    pub fn king(&self) -> Option<&Piece> {
        self.pieces[Side::Defender]
            .values()
            .find(|piece| piece.kind.is_king())
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn is_free(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(cell) if cell.free)
    }

    pub fn is_edge(&self, pos: Position) -> bool {
        pos.row == 0 || pos.col == 0 || pos.row == self.size - 1 || pos.col == self.size - 1
    }

    /// Select the piece to move this turn. On success it becomes the board's
    /// current piece.
    pub fn is_starting_point_valid(&mut self, pos: Position, side: Side) -> bool {
        if self.pieces[side].contains_key(&pos) {
            self.current_pos = Some(pos);
            true
        } else {
            false
        }
    }

    /// Whether the piece at `start` may finish its move on `dest`.
    ///
    /// A free destination must accept the piece; an occupied one is only
    /// reachable by a swapper trading places with an enemy other than the
    /// king. Either way the destination must lie on a clear movement line.
    pub fn is_destination_valid(&self, start: Position, dest: Position, side: Side) -> bool {
        let Some(piece) = self.pieces[side].get(&start) else {
            return false;
        };
        let Some(dest_cell) = self.cell(dest) else {
            return false;
        };

        if dest_cell.free {
            if !dest_cell.can_accept(piece) {
                return false;
            }
            return self.reaches_in_line(piece, start, dest);
        }

        if !piece.kind.can_swap() {
            return false;
        }
        if matches!(dest_cell.kind, CellKind::Throne | CellKind::Exit) {
            return false;
        }
        // A swapper standing on a slider is held by it until shoved off.
        if matches!(self.cell(start), Some(cell) if cell.is_slider()) {
            return false;
        }
        match self.piece_at(dest) {
            Some(occupant) if occupant.side != side && !occupant.kind.is_king() => {}
            _ => return false,
        }
        self.reaches_in_line(piece, start, dest)
    }

    fn reaches_in_line(&self, piece: &Piece, start: Position, dest: Position) -> bool {
        for &direction in piece.kind.movement_vectors() {
            for scalar in 1..self.size {
                if start + direction * scalar == dest {
                    return self.is_path_clear(piece, start, dest);
                }
            }
        }
        false
    }

    /// Every cell strictly between `start` and `dest` must accept the piece.
    fn is_path_clear(&self, piece: &Piece, start: Position, dest: Position) -> bool {
        let step = (dest - start).signum();
        let mut probe = start + step;
        while probe != dest {
            match self.cell(probe) {
                Some(cell) if cell.can_accept(piece) => {}
                _ => return false,
            }
            probe = probe + step;
        }
        true
    }

    /// Carry out a validated move, then let the terrain react to the arrival.
    pub fn update_piece_pos(&mut self, start: Position, dest: Position, side: Side) {
        self.shift_piece(start, dest, side);
        self.signal_move();
    }

    /// Relocate a piece without signalling the terrain. Swaps leave both
    /// cells occupied, so the free flags stay untouched on that branch.
    fn shift_piece(&mut self, start: Position, dest: Position, side: Side) {
        if self.is_free(dest) {
            if let Some(mut piece) = self.pieces[side].remove(&start) {
                piece.pos = dest;
                self.pieces[side].insert(dest, piece);
                self.set_free(start, true);
                self.set_free(dest, false);
                self.current_pos = Some(dest);
            }
            return;
        }

        if !matches!(self.pieces[side].get(&start), Some(piece) if piece.kind.can_swap()) {
            return;
        }
        let Some(mut displaced) = self.pieces[!side].remove(&dest) else {
            return;
        };
        // The mover was just checked under this key; removal cannot miss.
        let mut mover = self.pieces[side].remove(&start).unwrap();
        mover.pos = dest;
        displaced.pos = start;
        self.pieces[side].insert(dest, mover);
        self.pieces[!side].insert(start, displaced);
        self.current_pos = Some(dest);
    }

    /// Broadcast the completed move to the arrival cell and every cell the
    /// mover now threatens. At most the arrival cell itself reacts.
    fn signal_move(&mut self) {
        let Some(arrival) = self.current_pos else {
            return;
        };
        let Some(mover) = self.current_piece().copied() else {
            return;
        };
        let mut notified = capture::hitbox(&mover, self);
        notified.insert(arrival);
        for cell_pos in notified {
            self.react_cell(cell_pos, arrival);
        }
    }

    /// An active, untriggered slider shoves the piece that just landed on it
    /// to the furthest reachable cell along its orientation. The shove is a
    /// machine move and does not signal the terrain again.
    fn react_cell(&mut self, cell_pos: Position, arrival: Position) {
        let state = match self.cell(cell_pos) {
            Some(Cell {
                kind: CellKind::Slider(state),
                ..
            }) => *state,
            _ => return,
        };
        if cell_pos != arrival || state.triggered || !state.active {
            return;
        }

        if let Some(Cell {
            kind: CellKind::Slider(state),
            ..
        }) = self.cells.get_mut(&cell_pos)
        {
            state.triggered = true;
        }

        let Some(side) = self.piece_at(arrival).map(|piece| piece.side) else {
            return;
        };
        let target = self.furthest_reachable_pos(arrival, state.orientation);
        if target != arrival {
            self.shift_piece(arrival, target, side);
        }
    }

    /// Furthest cell the piece at `start` can be pushed to along `direction`.
    ///
    /// A swapper launched off a slider may finish by trading places with an
    /// enemy blocking its lane, the one case where a shove ends on an
    /// occupied cell.
    pub fn furthest_reachable_pos(&self, start: Position, direction: Vector) -> Position {
        let Some(mover) = self.piece_at(start).copied() else {
            return start;
        };
        let launched_from_slider = matches!(self.cell(start), Some(cell) if cell.is_slider());

        let mut furthest = start;
        for scalar in 1..self.size {
            let probe = start + direction * scalar;
            let Some(cell) = self.cell(probe) else {
                break;
            };
            if cell.can_accept(&mover) {
                furthest = probe;
                continue;
            }
            if mover.kind.can_swap()
                && launched_from_slider
                && !matches!(cell.kind, CellKind::Throne | CellKind::Exit)
                && matches!(self.piece_at(probe), Some(other) if other.side != mover.side && !other.kind.is_king())
            {
                furthest = probe;
            }
            break;
        }
        furthest
    }

    /// Remove every enemy pinned by the move that was just played
    pub fn resolve_captures(&mut self) -> Vec<Piece> {
        capture::resolve(self)
    }

    /// Take the piece at `pos` off the board and add it to the captor's tally.
    pub fn capture_piece(&mut self, pos: Position, by: Side) -> Option<Piece> {
        let piece = self.pieces[!by].remove(&pos)?;
        self.set_free(pos, true);
        self.captured[by].insert(piece.kind);
        Some(piece)
    }

    fn set_free(&mut self, pos: Position, free: bool) {
        if let Some(cell) = self.cells.get_mut(&pos) {
            cell.free = free;
        }
    }

    /// Draw tests: the king boxed in on the board edge by exactly three
    /// attackers, or the side to move having no piece with an adjacent cell
    /// it could step onto.
    pub fn is_draw(&self, active_side: Side) -> bool {
        if let Some(king) = self.king() {
            if self.is_edge(king.pos) {
                let besiegers = king
                    .pos
                    .neighbors()
                    .into_iter()
                    .filter(|&pos| {
                        matches!(self.piece_at(pos), Some(piece) if piece.side == Side::Attacker)
                    })
                    .count();
                if besiegers == capture::KING_EDGE_PINS {
                    return true;
                }
            }
        }

        self.pieces[active_side].values().all(|piece| {
            piece
                .pos
                .neighbors()
                .into_iter()
                .all(|pos| !matches!(self.cell(pos), Some(cell) if cell.can_accept(piece)))
        })
    }

    /// Side that has already won, if any: the attacker once the king is gone,
    /// the defender once the king stands on an exit.
    pub fn winner(&self) -> Option<Side> {
        let Some(king) = self.king() else {
            return Some(Side::Attacker);
        };
        if matches!(self.cell(king.pos), Some(cell) if matches!(cell.kind, CellKind::Exit)) {
            Some(Side::Defender)
        } else {
            None
        }
    }

    /// Advance terrain state after a turn has been played
    pub fn notify_turn_ended(&mut self, turn: u32) {
        for pos in &self.sliders {
            if let Some(Cell {
                kind: CellKind::Slider(state),
                ..
            }) = self.cells.get_mut(pos)
            {
                state.end_turn(turn);
            }
        }
    }

    pub fn save(&self) -> BoardSnapshot {
        BoardSnapshot {
            cells: self.cells.clone(),
            pieces: self.pieces.clone(),
            current_pos: self.current_pos,
            captured: self.captured.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        self.cells = snapshot.cells.clone();
        self.pieces = snapshot.pieces.clone();
        self.current_pos = snapshot.current_pos;
        self.captured = snapshot.captured.clone();
        self.sliders = Self::slider_positions(&self.cells);
    }
}

impl Default for Board {
    fn default() -> Self {
        Preset::Classic.board()
    }
}
