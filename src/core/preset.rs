//! Canned starting layouts

use std::str::FromStr;

use anyhow::bail;

use super::{board::Board, builder::BoardBuilder, pieces::PieceKind, position::Vector};

/// Side length of the hnefatafl board
pub const HNEFATAFL_SIZE: i32 = 11;

const THRONE: (i32, i32) = (5, 5);

const EXIT_CORNERS: [(i32, i32); 4] = [(0, 0), (0, 10), (10, 0), (10, 10)];

const ATTACKER_POSTS: [(i32, i32); 24] = [
    (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (1, 5),
    (3, 0), (4, 0), (5, 0), (6, 0), (7, 0), (5, 1),
    (10, 3), (10, 4), (10, 5), (10, 6), (10, 7), (9, 5),
    (3, 10), (4, 10), (5, 10), (6, 10), (7, 10), (5, 9),
];

const DEFENDER_POSTS: [(i32, i32); 12] = [
    (3, 5),
    (4, 4), (4, 5), (4, 6),
    (5, 3), (5, 4), (5, 6), (5, 7),
    (6, 4), (6, 5), (6, 6),
    (7, 5),
];

/// Mid-edge attackers become swappers in the variant layout
const SWAPPER_POSTS: [(i32, i32); 4] = [(0, 5), (5, 0), (5, 10), (10, 5)];

/// The attackers one step inside the mid-edges become archers
const ARCHER_POSTS: [(i32, i32); 4] = [(1, 5), (5, 1), (5, 9), (9, 5)];

/// Sliders arranged as a pinwheel around the defenders' camp
const SLIDER_POSTS: [((i32, i32), Vector); 4] = [
    ((2, 2), Vector::RIGHT),
    ((2, 8), Vector::DOWN),
    ((8, 8), Vector::LEFT),
    ((8, 2), Vector::UP),
];

/// A named starting layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Plain hnefatafl: basic pieces and the king on an 11x11 board
    Classic,
    /// The classic layout with swappers, archers and sliders mixed in
    Variant,
}

impl Preset {
    pub fn board(self) -> Board {
        match self {
            Preset::Classic => classic(),
            Preset::Variant => variant(),
        }
    }
}

impl FromStr for Preset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classic" => Ok(Preset::Classic),
            "variant" => Ok(Preset::Variant),
            _ => bail!("Unknown preset: {}", s),
        }
    }
}

/// Terrain, defenders and king shared by every layout
fn skeleton() -> BoardBuilder {
    let mut builder = BoardBuilder::new(HNEFATAFL_SIZE).throne(THRONE).king(THRONE);
    for corner in EXIT_CORNERS {
        builder = builder.exit(corner);
    }
    for post in DEFENDER_POSTS {
        builder = builder.defender(PieceKind::Basic, post);
    }
    builder
}

fn classic() -> Board {
    let mut builder = skeleton();
    for post in ATTACKER_POSTS {
        builder = builder.attacker(PieceKind::Basic, post);
    }
    builder.build().unwrap()
}

fn variant() -> Board {
    let mut builder = skeleton();
    for post in ATTACKER_POSTS {
        let kind = if SWAPPER_POSTS.contains(&post) {
            PieceKind::Swapper
        } else if ARCHER_POSTS.contains(&post) {
            PieceKind::Archer
        } else {
            PieceKind::Basic
        };
        builder = builder.attacker(kind, post);
    }
    for (post, orientation) in SLIDER_POSTS {
        builder = builder.slider(post, orientation);
    }
    builder.build().unwrap()
}
