use super::{pieces::Piece, position::Vector};

/// Turns between two activity windows of a slider
pub const SLIDER_REACTIVATION_TURNS: u32 = 2;

/// Mutable part of a slider cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderState {
    /// Direction the slider pushes its passenger
    pub orientation: Vector,
    /// Set once the slider has fired during the current activity window
    pub triggered: bool,
    /// Whether the slider reacts to arrivals this turn
    pub active: bool,
    /// Turn at which the slider last opened an activity window
    pub last_activity_turn: u32,
}

impl SliderState {
    pub fn new(orientation: Vector) -> Self {
        Self {
            orientation,
            triggered: false,
            active: false,
            last_activity_turn: 0,
        }
    }

    /// Advance the activity cycle after a turn has been played.
    ///
    /// A slider starts dormant and opens a one-turn activity window every
    /// `SLIDER_REACTIVATION_TURNS` turns after that.
    pub fn end_turn(&mut self, turn: u32) {
        self.triggered = false;
        if turn - self.last_activity_turn == SLIDER_REACTIVATION_TURNS {
            self.active = true;
            self.last_activity_turn = turn;
        } else {
            self.active = false;
        }
    }
}

/// Terrain of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Classic,
    /// Restricted center cell, reserved for the king
    Throne,
    /// Escape cell; the defender wins when the king stands here
    Exit,
    /// Cell that shoves arriving pieces along its orientation
    Slider(SliderState),
}

/// A board cell: terrain plus occupancy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub kind: CellKind,
    pub free: bool,
}

impl Cell {
    pub fn classic() -> Self {
        Self {
            kind: CellKind::Classic,
            free: true,
        }
    }

    pub fn throne() -> Self {
        Self {
            kind: CellKind::Throne,
            free: true,
        }
    }

    pub fn exit() -> Self {
        Self {
            kind: CellKind::Exit,
            free: true,
        }
    }

    pub fn slider(orientation: Vector) -> Self {
        Self {
            kind: CellKind::Slider(SliderState::new(orientation)),
            free: true,
        }
    }

    /// Whether the given piece may come to rest here
    pub fn can_accept(&self, piece: &Piece) -> bool {
        match self.kind {
            CellKind::Classic | CellKind::Slider(_) => self.free,
            CellKind::Throne | CellKind::Exit => self.free && piece.kind.is_king(),
        }
    }

    pub fn is_slider(&self) -> bool {
        matches!(self.kind, CellKind::Slider(_))
    }
}
