use std::fmt;

use colored::Colorize;
use hashbag::HashBag;

use super::{
    board::Board,
    cell::{Cell, CellKind},
    game::MatchResult,
    pieces::{Piece, PieceKind},
    position::{Position, Vector},
    preset::Preset,
    side::Side,
};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size() {
            write!(f, "{:2} ", col)?;
        }
        writeln!(f)?;

        for row in 0..self.size() {
            write!(f, "{:2} ", row)?;
            for col in 0..self.size() {
                let pos = Position::new(row, col);
                if let Some(piece) = self.piece_at(pos) {
                    write!(f, " {} ", piece)?;
                } else if let Some(cell) = self.cell(pos) {
                    write!(f, " {} ", terrain_glyph(cell).to_string().dimmed())?;
                }
            }
            writeln!(f)?;
        }

        for side in Side::all() {
            writeln!(f, "Captured by {}: {}", side, captured_tally(self.captured(side)))?;
        }
        Ok(())
    }
}

fn terrain_glyph(cell: &Cell) -> char {
    match cell.kind {
        CellKind::Classic => '·',
        CellKind::Throne => '+',
        CellKind::Exit => 'x',
        CellKind::Slider(state) => match state.orientation {
            Vector { dr: -1, dc: 0 } => '^',
            Vector { dr: 1, dc: 0 } => 'v',
            Vector { dr: 0, dc: -1 } => '<',
            _ => '>',
        },
    }
}

fn captured_tally(bag: &HashBag<PieceKind>) -> String {
    let mut counts: Vec<(PieceKind, usize)> = bag
        .set_iter()
        .map(|(kind, count)| (*kind, count))
        .collect();
    if counts.is_empty() {
        return "none".to_string();
    }
    counts.sort_by_key(|(kind, _)| kind.glyph());
    counts
        .iter()
        .map(|(kind, count)| format!("{}x {}", count, kind))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = match self.side {
            Side::Attacker => self.kind.glyph(),
            Side::Defender => self.kind.glyph().to_ascii_uppercase(),
        };

        let symbol = glyph.to_string();
        let colored_symbol = match self.side {
            Side::Attacker => symbol.bright_red(),
            Side::Defender => symbol.bright_blue(),
        };

        write!(f, "{}", colored_symbol)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Attacker => write!(f, "{}", "Attacker".bright_red()),
            Side::Defender => write!(f, "{}", "Defender".bright_blue()),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Basic => "basic",
            PieceKind::King => "king",
            PieceKind::Archer => "archer",
            PieceKind::Swapper => "swapper",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MatchResult::Victory => "victory",
            MatchResult::Defeat => "defeat",
            MatchResult::Draw => "draw",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Classic => "classic",
            Preset::Variant => "variant",
        };
        write!(f, "{}", name)
    }
}
