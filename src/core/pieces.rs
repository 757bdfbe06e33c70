use super::{
    position::{Position, Vector, CARDINALS},
    side::Side,
};

/// Capture range of an archer
pub const ARCHER_RANGE: i32 = 3;

/// How far a piece's capture threat extends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// Threatens nothing
    Inert,
    /// Threatens along each cardinal line up to the given distance
    Line(i32),
}

/// The unit kinds of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Basic,
    King,
    Archer,
    Swapper,
}

impl PieceKind {
    /// Directions this kind may slide in; distance is bounded by the board only
    pub fn movement_vectors(self) -> &'static [Vector] {
        &CARDINALS
    }

    pub fn reach(self) -> Reach {
        match self {
            PieceKind::King => Reach::Inert,
            PieceKind::Archer => Reach::Line(ARCHER_RANGE),
            PieceKind::Basic | PieceKind::Swapper => Reach::Line(1),
        }
    }

    /// Whether this kind may trade places with an enemy instead of sliding onto a free square
    pub fn can_swap(self) -> bool {
        matches!(self, PieceKind::Swapper)
    }

    pub fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    /// Board letter; rendering uppercases it for the defender side
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Basic => 's',
            PieceKind::King => 'k',
            PieceKind::Archer => 'a',
            PieceKind::Swapper => 'w',
        }
    }
}

/// A piece on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub pos: Position,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, pos: Position) -> Self {
        Self { kind, side, pos }
    }
}
