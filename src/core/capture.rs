//! Flanking-capture resolution
//!
//! After a move, the mover's threat zone is composed with the threat zones of
//! its allies to decide which enemy pieces are pinned hard enough to remove.

use std::collections::{HashMap, HashSet};

use super::{
    board::Board,
    pieces::{Piece, Reach},
    position::Position,
};

/// Pins needed to capture a king away from the board edge
pub const KING_CENTER_PINS: usize = 4;
/// Pins needed to capture a king standing on the board edge
pub const KING_EDGE_PINS: usize = 3;

/// Cells a piece threatens: each cardinal line out to its reach, trimmed at
/// the board edge and at the first occupant (an enemy occupant is included,
/// an ally is not).
pub fn hitbox(piece: &Piece, board: &Board) -> HashSet<Position> {
    let mut zone = HashSet::new();
    let Reach::Line(range) = piece.kind.reach() else {
        return zone;
    };

    for &direction in piece.kind.movement_vectors() {
        for scalar in 1..=range {
            let probe = piece.pos + direction * scalar;
            if !board.contains(probe) {
                break;
            }
            match board.piece_at(probe) {
                None => {
                    zone.insert(probe);
                }
                Some(other) if other.side != piece.side => {
                    zone.insert(probe);
                    break;
                }
                Some(_) => break,
            }
        }
    }

    zone
}

/// Enemy-occupied positions inside a threat zone, in row-major order
pub fn threatened_enemies(zone: &HashSet<Position>, board: &Board, mover: &Piece) -> Vec<Position> {
    let mut enemies: Vec<Position> = zone
        .iter()
        .copied()
        .filter(|&pos| matches!(board.piece_at(pos), Some(other) if other.side != mover.side))
        .collect();
    enemies.sort();
    enemies
}

/// For each candidate, the positions of the mover's allies (the mover
/// included) whose threat zone covers it
pub fn pinning_allies(
    candidates: &[Position],
    board: &Board,
    mover: &Piece,
) -> HashMap<Position, HashSet<Position>> {
    let mut pins: HashMap<Position, HashSet<Position>> = candidates
        .iter()
        .map(|&pos| (pos, HashSet::new()))
        .collect();

    for ally in board.pieces(mover.side).values() {
        let zone = hitbox(ally, board);
        for (enemy_pos, pinners) in pins.iter_mut() {
            if zone.contains(enemy_pos) {
                pinners.insert(ally.pos);
            }
        }
    }

    pins
}

/// Pins required to remove the given piece from its current position
pub fn required_pins(board: &Board, target: &Piece) -> usize {
    if !target.kind.is_king() {
        return 1;
    }
    if board.is_edge(target.pos) {
        KING_EDGE_PINS
    } else {
        KING_CENTER_PINS
    }
}

/// Resolve captures around the piece that just moved.
///
/// Pin counts are read from the board as it stands after the move; removals
/// within one resolution do not weaken each other.
pub fn resolve(board: &mut Board) -> Vec<Piece> {
    let Some(mover) = board.current_piece().copied() else {
        return Vec::new();
    };

    let zone = hitbox(&mover, board);
    let candidates = threatened_enemies(&zone, board, &mover);
    let pins = pinning_allies(&candidates, board, &mover);

    let mut captured = Vec::new();
    for enemy_pos in candidates {
        let Some(target) = board.piece_at(enemy_pos).copied() else {
            continue;
        };
        if pins[&enemy_pos].len() >= required_pins(board, &target) {
            if let Some(piece) = board.capture_piece(enemy_pos, mover.side) {
                captured.push(piece);
            }
        }
    }
    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, BoardBuilder, PieceKind, Side};

    fn select(board: &mut Board, pos: (i32, i32)) {
        let pos = Position::from(pos);
        let side = board.piece_at(pos).map(|p| p.side).unwrap();
        assert!(board.is_starting_point_valid(pos, side));
    }

    #[test]
    fn test_hitbox_trimmed_at_board_edge() {
        let board = BoardBuilder::new(5)
            .attacker(PieceKind::Basic, (0, 0))
            .build()
            .unwrap();
        let piece = *board.piece_at((0, 0).into()).unwrap();

        let zone = hitbox(&piece, &board);
        assert_eq!(zone, HashSet::from([(0, 1).into(), (1, 0).into()]));
    }

    #[test]
    fn test_hitbox_stops_at_ally() {
        let board = BoardBuilder::new(5)
            .attacker(PieceKind::Basic, (2, 2))
            .attacker(PieceKind::Basic, (2, 3))
            .build()
            .unwrap();
        let piece = *board.piece_at((2, 2).into()).unwrap();

        let zone = hitbox(&piece, &board);
        assert!(!zone.contains(&(2, 3).into()));
        assert_eq!(zone.len(), 3);
    }

    #[test]
    fn test_archer_hitbox_stops_at_first_occupant() {
        let board = BoardBuilder::new(7)
            .attacker(PieceKind::Archer, (3, 3))
            .attacker(PieceKind::Basic, (1, 3))
            .defender(PieceKind::Basic, (3, 5))
            .defender(PieceKind::Basic, (3, 6))
            .build()
            .unwrap();
        let archer = *board.piece_at((3, 3).into()).unwrap();

        let zone = hitbox(&archer, &board);
        // right: free cell, then the first defender, nothing past it
        assert!(zone.contains(&(3, 4).into()));
        assert!(zone.contains(&(3, 5).into()));
        assert!(!zone.contains(&(3, 6).into()));
        // up: trimmed before the ally
        assert!(zone.contains(&(2, 3).into()));
        assert!(!zone.contains(&(1, 3).into()));
        assert_eq!(zone.len(), 9);
    }

    #[test]
    fn test_king_hitbox_is_empty() {
        let board = BoardBuilder::new(5).king((2, 2)).build().unwrap();
        let king = *board.piece_at((2, 2).into()).unwrap();

        assert!(hitbox(&king, &board).is_empty());
    }

    #[test]
    fn test_flank_captures_adjacent_enemies() {
        let mut board = BoardBuilder::new(5)
            .attacker(PieceKind::Basic, (1, 1))
            .defender(PieceKind::Basic, (1, 0))
            .defender(PieceKind::Basic, (1, 2))
            .king((0, 1))
            .build()
            .unwrap();
        select(&mut board, (1, 1));

        let captured = resolve(&mut board);

        assert_eq!(captured.len(), 2);
        assert!(board.piece_at((1, 0).into()).is_none());
        assert!(board.piece_at((1, 2).into()).is_none());
        assert!(board.cell((1, 0).into()).unwrap().free);
        // a lone pin is not enough for the king, even on the edge
        assert!(board.piece_at((0, 1).into()).is_some());
        assert_eq!(board.captured(Side::Attacker).contains(&PieceKind::Basic), 2);
    }

    #[test]
    fn test_king_center_capture_needs_four_pins() {
        let mut board = BoardBuilder::new(7)
            .king((3, 3))
            .attacker(PieceKind::Basic, (2, 3))
            .attacker(PieceKind::Basic, (4, 3))
            .attacker(PieceKind::Basic, (3, 2))
            .attacker(PieceKind::Basic, (3, 4))
            .build()
            .unwrap();
        select(&mut board, (3, 4));

        let captured = resolve(&mut board);

        assert_eq!(captured.len(), 1);
        assert!(captured[0].kind.is_king());
        assert!(board.king().is_none());
    }

    #[test]
    fn test_king_survives_three_pins_in_center() {
        let mut board = BoardBuilder::new(7)
            .king((3, 3))
            .attacker(PieceKind::Basic, (2, 3))
            .attacker(PieceKind::Basic, (4, 3))
            .attacker(PieceKind::Basic, (3, 4))
            .build()
            .unwrap();
        select(&mut board, (3, 4));

        assert!(resolve(&mut board).is_empty());
        assert!(board.king().is_some());
    }

    #[test]
    fn test_king_on_edge_falls_to_three_pins() {
        let mut board = BoardBuilder::new(7)
            .king((0, 3))
            .attacker(PieceKind::Basic, (0, 2))
            .attacker(PieceKind::Basic, (0, 4))
            .attacker(PieceKind::Basic, (1, 3))
            .build()
            .unwrap();
        select(&mut board, (1, 3));

        let captured = resolve(&mut board);

        assert_eq!(captured.len(), 1);
        assert!(captured[0].kind.is_king());
    }

    #[test]
    fn test_archer_captures_at_range() {
        let mut board = BoardBuilder::new(7)
            .attacker(PieceKind::Archer, (3, 3))
            .defender(PieceKind::Basic, (3, 5))
            .build()
            .unwrap();
        select(&mut board, (3, 3));

        let captured = resolve(&mut board);

        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].pos, (3, 5).into());
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut board = BoardBuilder::new(5)
            .attacker(PieceKind::Basic, (1, 1))
            .defender(PieceKind::Basic, (1, 0))
            .build()
            .unwrap();
        select(&mut board, (1, 1));

        assert_eq!(resolve(&mut board).len(), 1);
        assert!(resolve(&mut board).is_empty());
    }

    #[test]
    fn test_no_mover_means_no_captures() {
        let mut board = BoardBuilder::new(5)
            .attacker(PieceKind::Basic, (1, 1))
            .defender(PieceKind::Basic, (1, 2))
            .build()
            .unwrap();

        assert!(resolve(&mut board).is_empty());
        assert!(board.piece_at((1, 2).into()).is_some());
    }
}
