//! Board geometry: ray directions, ray masks and the slow reference walkers
//! used to fill tables at startup.
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]

use crate::bitboard::{self, BitBoard, EMPTY, NOT_A_FILE, NOT_H_FILE, NOT_RANK_1, NOT_RANK_8};

/// One of the eight ray directions a sliding piece can travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Southeast,
    Southwest,
    Northwest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Northeast,
        Direction::Southeast,
        Direction::Southwest,
        Direction::Northwest,
    ];

    pub const BISHOP: [Direction; 4] = [
        Direction::Northeast,
        Direction::Southeast,
        Direction::Southwest,
        Direction::Northwest,
    ];

    pub const ROOK: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Bit offset of a single step in this direction.
    #[must_use]
    pub const fn shift(self) -> i32 {
        match self {
            Direction::North => 8,
            Direction::South => -8,
            Direction::East => 1,
            Direction::West => -1,
            Direction::Northeast => 9,
            Direction::Southeast => -7,
            Direction::Southwest => -9,
            Direction::Northwest => 7,
        }
    }

    /// Squares a step in this direction may legally land on: clears the file
    /// that bit arithmetic would wrap onto.
    #[must_use]
    pub const fn edge_mask(self) -> BitBoard {
        match self {
            Direction::North | Direction::South => bitboard::UNIVERSAL,
            Direction::East | Direction::Northeast | Direction::Southeast => NOT_A_FILE,
            Direction::West | Direction::Southwest | Direction::Northwest => NOT_H_FILE,
        }
    }

    /// Board minus the last rank/file in the direction of travel.
    const fn inner_mask(self) -> BitBoard {
        match self {
            Direction::North => NOT_RANK_8,
            Direction::South => NOT_RANK_1,
            Direction::East => NOT_H_FILE,
            Direction::West => NOT_A_FILE,
            Direction::Northeast => NOT_RANK_8 & NOT_H_FILE,
            Direction::Southeast => NOT_RANK_1 & NOT_H_FILE,
            Direction::Southwest => NOT_RANK_1 & NOT_A_FILE,
            Direction::Northwest => NOT_RANK_8 & NOT_A_FILE,
        }
    }
}

/// The four full lines through a square, each the union of two opposite rays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    Diagonal,
    Antidiagonal,
    File,
    Rank,
}

impl LineType {
    pub const ALL: [LineType; 4] = [
        LineType::Diagonal,
        LineType::Antidiagonal,
        LineType::File,
        LineType::Rank,
    ];

    /// The two rays composing the line: (toward higher bits, toward lower bits).
    #[must_use]
    pub const fn directions(self) -> (Direction, Direction) {
        match self {
            LineType::Diagonal => (Direction::Northeast, Direction::Southwest),
            LineType::Antidiagonal => (Direction::Northwest, Direction::Southeast),
            LineType::File => (Direction::North, Direction::South),
            LineType::Rank => (Direction::East, Direction::West),
        }
    }
}

/// Left shift for positive amounts, right shift by the absolute value for
/// negative ones.
#[must_use]
pub const fn shifted(x: BitBoard, amount: i32) -> BitBoard {
    if amount >= 0 {
        x << amount
    } else {
        x >> -amount
    }
}

/// Whether a single step from `square` stays on the board: neither runs off
/// rank 1/8 nor wraps around the A/H files.
#[must_use]
pub const fn on_board(square: u8, dir: Direction) -> bool {
    let dest = square as i32 + dir.shift();
    if dest < 0 || dest > 63 {
        return false;
    }
    // A step that wraps lands on the file the direction's mask excludes.
    bitboard::is_set(dir.edge_mask(), dest as u8)
}

/// Every square strictly along the ray from `square` in `dir`. With
/// `exclude_outer`, the ray's terminal edge square is dropped (its occupancy
/// can never change an attack set).
#[must_use]
pub fn ray_mask(square: u8, dir: Direction, exclude_outer: bool) -> BitBoard {
    let mut mask = EMPTY;
    let mut current = square;
    while on_board(current, dir) {
        current = (i32::from(current) + dir.shift()) as u8;
        mask |= 1 << current;
    }
    if exclude_outer {
        mask &= dir.inner_mask();
    }
    mask
}

/// Occupancy bits that can influence a bishop's attack set from `square`.
#[must_use]
pub fn bishop_relevant_mask(square: u8) -> BitBoard {
    Direction::BISHOP
        .iter()
        .fold(EMPTY, |mask, &dir| mask | ray_mask(square, dir, true))
}

/// Occupancy bits that can influence a rook's attack set from `square`.
#[must_use]
pub fn rook_relevant_mask(square: u8) -> BitBoard {
    Direction::ROOK
        .iter()
        .fold(EMPTY, |mask, &dir| mask | ray_mask(square, dir, true))
}

/// Next subset of `mask` in the carry-ripple enumeration. Starting from 0 and
/// iterating until 0 comes back visits every subset exactly once.
#[must_use]
pub const fn next_subset(subset: BitBoard, mask: BitBoard) -> BitBoard {
    subset.wrapping_sub(mask) & mask
}

fn walk(occupancy: BitBoard, square: u8, dirs: &[Direction; 4]) -> BitBoard {
    let mut attacks = EMPTY;
    for &dir in dirs {
        let mut current = square;
        while on_board(current, dir) {
            current = (i32::from(current) + dir.shift()) as u8;
            attacks |= 1 << current;
            if bitboard::is_set(occupancy, current) {
                break;
            }
        }
    }
    attacks
}

/// Reference bishop attack set by stepping each diagonal one square at a
/// time. Slow; table initialisation and test use only.
#[must_use]
pub fn walk_bishop_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    walk(occupancy, square, &Direction::BISHOP)
}

/// Reference rook attack set by stepping each rank/file ray one square at a
/// time. Slow; table initialisation and test use only.
#[must_use]
pub fn walk_rook_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    walk(occupancy, square, &Direction::ROOK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::from_str;

    #[test]
    fn test_on_board() {
        // a1 corner
        assert!(on_board(0, Direction::North));
        assert!(on_board(0, Direction::East));
        assert!(!on_board(0, Direction::South));
        assert!(!on_board(0, Direction::West));
        assert!(!on_board(0, Direction::Southwest));
        // h4 cannot continue east
        assert!(!on_board(31, Direction::East));
        assert!(!on_board(31, Direction::Northeast));
        assert!(on_board(31, Direction::West));
        // h8 corner
        assert!(!on_board(63, Direction::North));
        assert!(!on_board(63, Direction::Northeast));
        assert!(on_board(63, Direction::Southwest));
    }

    #[test]
    fn test_ray_mask() {
        // North from c3, full and with the edge dropped.
        assert_eq!(
            ray_mask(18, Direction::North, false),
            from_str(
                r". . 1 . . . . .
                . . 1 . . . . .
                . . 1 . . . . .
                . . 1 . . . . .
                . . 1 . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . ."
            )
        );
        assert_eq!(
            ray_mask(18, Direction::North, true),
            from_str(
                r". . . . . . . .
                . . 1 . . . . .
                . . 1 . . . . .
                . . 1 . . . . .
                . . 1 . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . ."
            )
        );
        // Northeast from e4 stops at the H file.
        assert_eq!(
            ray_mask(28, Direction::Northeast, false),
            from_str(
                r". . . . . . . .
                . . . . . . . 1
                . . . . . . 1 .
                . . . . . 1 . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . .
                . . . . . . . ."
            )
        );
        // A ray never contains its own square.
        for sq in 0..64 {
            for dir in Direction::ALL {
                assert!(!crate::bitboard::is_set(ray_mask(sq, dir, false), sq));
            }
        }
    }

    #[test]
    fn test_relevant_masks() {
        assert_eq!(rook_relevant_mask(0), 0x0001_0101_0101_017E);
        assert_eq!(bishop_relevant_mask(0), 0x0040_2010_0804_0200);
        assert_eq!(rook_relevant_mask(28), 0x0010_1010_6E10_1000);
        assert_eq!(bishop_relevant_mask(27), 0x0040_2214_0014_2200);
    }

    #[test]
    fn test_next_subset_enumerates_all() {
        let mask = 0b1011_0100_u64;
        let mut seen = std::collections::HashSet::new();
        let mut subset = 0;
        loop {
            assert_eq!(subset & !mask, 0);
            assert!(seen.insert(subset));
            subset = next_subset(subset, mask);
            if subset == 0 {
                break;
            }
        }
        assert_eq!(seen.len(), 1 << mask.count_ones());
    }

    #[test]
    fn test_walkers() {
        // Rook on d4, blocker on e4: east stops there, the other rays run to
        // the edges.
        assert_eq!(
            walk_rook_attacks(1 << 28, 27),
            from_str(
                r". . . 1 . . . .
                . . . 1 . . . .
                . . . 1 . . . .
                . . . 1 . . . .
                1 1 1 . 1 . . .
                . . . 1 . . . .
                . . . 1 . . . .
                . . . 1 . . . ."
            )
        );
        // Bishop on c5 with scattered blockers, same position the attack
        // back-ends are tested with.
        assert_eq!(
            walk_bishop_attacks(
                from_str(
                    r". . . . . 1 . .
                    . . . . 1 . . .
                    . 1 . . . . . .
                    . . 1 . . . . .
                    . . . . . . . .
                    . . . . 1 . 1 .
                    1 1 1 1 1 . 1 1
                    . . . . . . 1 ."
                ),
                34
            ),
            from_str(
                r". . . . . . . .
                . . . . 1 . . .
                . 1 . 1 . . . .
                . . . . . . . .
                . 1 . 1 . . . .
                1 . . . 1 . . .
                . . . . . . . .
                . . . . . . . ."
            )
        );
    }
}
