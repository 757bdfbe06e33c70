use std::{
    fmt::Display, ops::{Add, Mul, Sub}, str::FromStr
};
use anyhow::Context;

/// A square on the board, addressed as (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The four orthogonally adjacent squares, board bounds not applied
    pub fn neighbors(&self) -> [Position; 4] {
        CARDINALS.map(|v| *self + v)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',')
            .context("Invalid position")?;

        Ok(Position {
            row: row.parse()?,
            col: col.parse()?,
        })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// A direction with magnitude on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub dr: i32,
    pub dc: i32,
}

impl Vector {
    pub const UP: Vector = Vector { dr: -1, dc: 0 };
    pub const DOWN: Vector = Vector { dr: 1, dc: 0 };
    pub const LEFT: Vector = Vector { dr: 0, dc: -1 };
    pub const RIGHT: Vector = Vector { dr: 0, dc: 1 };

    pub fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }

    /// Unit vector pointing the same way, for vectors along one axis
    pub fn signum(&self) -> Vector {
        Vector {
            dr: self.dr.signum(),
            dc: self.dc.signum(),
        }
    }
}

/// The four cardinal unit vectors, the movement directions of every piece
pub const CARDINALS: [Vector; 4] = [
    Vector::UP,
    Vector::RIGHT,
    Vector::DOWN,
    Vector::LEFT,
];

impl Add<Vector> for Position {
    type Output = Position;

    fn add(self, v: Vector) -> Self::Output {
        Position {
            row: self.row + v.dr,
            col: self.col + v.dc,
        }
    }
}

impl Sub<Position> for Position {
    type Output = Vector;

    fn sub(self, other: Position) -> Self::Output {
        Vector {
            dr: self.row - other.row,
            dc: self.col - other.col,
        }
    }
}

impl Mul<i32> for Vector {
    type Output = Vector;

    fn mul(self, scalar: i32) -> Self::Output {
        Vector {
            dr: self.dr * scalar,
            dc: self.dc * scalar,
        }
    }
}
