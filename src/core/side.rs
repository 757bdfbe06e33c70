use anyhow::{anyhow, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::ops::{Index, IndexMut, Not};

/// Trait for converting from a dense index
pub trait FromIndex: Sized {
    fn from_index(idx: usize) -> Result<Self>;
}

/// Trait for converting to a dense index
pub trait ToIndex {
    fn to_index(&self) -> Result<usize>;
}

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Side {
    Attacker,
    Defender,
}

impl Side {
    pub fn all() -> [Side; 2] {
        [Side::Attacker, Side::Defender]
    }
}

impl FromIndex for Side {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid side index: {}", idx))
    }
}

impl ToIndex for Side {
    fn to_index(&self) -> Result<usize> {
        ToPrimitive::to_usize(self)
            .ok_or_else(|| anyhow!("Invalid side value"))
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Side::Attacker => Side::Defender,
            Side::Defender => Side::Attacker,
        }
    }
}

/// Array indexed by game side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideArray<T> {
    values: [T; 2],
}

impl<T> SideArray<T> {
    pub fn new(attacker: T, defender: T) -> Self {
        Self {
            values: [attacker, defender],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.values.iter_mut()
    }
}

impl<T> Index<Side> for SideArray<T> {
    type Output = T;

    fn index(&self, index: Side) -> &Self::Output {
        &self.values[index.to_index().unwrap()]
    }
}

impl<T> IndexMut<Side> for SideArray<T> {
    fn index_mut(&mut self, index: Side) -> &mut Self::Output {
        &mut self.values[index.to_index().unwrap()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_from_index() {
        assert_eq!(Side::from_index(0).unwrap(), Side::Attacker);
        assert_eq!(Side::from_index(1).unwrap(), Side::Defender);
        assert!(Side::from_index(2).is_err());
    }

    #[test]
    fn test_side_to_index() {
        assert_eq!(Side::Attacker.to_index().unwrap(), 0);
        assert_eq!(Side::Defender.to_index().unwrap(), 1);
    }

    #[test]
    fn test_side_negation() {
        assert_eq!(!Side::Attacker, Side::Defender);
        assert_eq!(!Side::Defender, Side::Attacker);
        assert_eq!(!!Side::Attacker, Side::Attacker);
    }

    #[test]
    fn test_side_array() {
        let mut array = SideArray::new(5, 10);

        assert_eq!(array[Side::Attacker], 5);
        assert_eq!(array[Side::Defender], 10);

        array[Side::Attacker] = 15;
        assert_eq!(array[Side::Attacker], 15);

        let values: Vec<_> = array.iter().copied().collect();
        assert_eq!(values, vec![15, 10]);

        for v in array.iter_mut() {
            *v *= 2;
        }
        assert_eq!(array[Side::Attacker], 30);
        assert_eq!(array[Side::Defender], 20);
    }
}
