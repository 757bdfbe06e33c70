//! Core game representations and rules

pub mod board;
pub mod builder;
pub mod capture;
pub mod cell;
pub mod display;
pub mod game;
pub mod pieces;
pub mod position;
pub mod preset;
pub mod side;
pub mod snapshot;

pub use board::Board;
pub use builder::BoardBuilder;
pub use cell::{Cell, CellKind, SliderState, SLIDER_REACTIVATION_TURNS};
pub use game::{Match, MatchResult};
pub use pieces::{Piece, PieceKind, Reach, ARCHER_RANGE};
pub use position::{Position, Vector, CARDINALS};
pub use preset::{Preset, HNEFATAFL_SIZE};
pub use side::{FromIndex, Side, SideArray, ToIndex};
pub use snapshot::{BoardSnapshot, MatchSnapshot};
