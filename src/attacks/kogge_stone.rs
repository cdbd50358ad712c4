//! Kogge-Stone: parallel-prefix flood fill with shift distances d, 2d, 4d.
//! Three doubling rounds cover the longest ray. No tables.
//! <https://www.chessprogramming.org/Kogge-Stone_Algorithm>

use crate::bitboard::BitBoard;
use crate::geometry::{shifted, Direction};

#[inline]
fn flood(mut empty: BitBoard, mut fill: BitBoard, dir: Direction) -> BitBoard {
    let shift = dir.shift();
    let mask = dir.edge_mask();
    empty &= mask;
    fill |= empty & shifted(fill, shift);
    empty &= shifted(empty, shift);
    fill |= empty & shifted(fill, shift * 2);
    empty &= shifted(empty, shift * 2);
    fill |= empty & shifted(fill, shift * 4);
    mask & shifted(fill, shift)
}

pub fn init() {
    // No tables.
}

#[must_use]
pub fn bishop_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    let empty = !occupancy;
    let bishop = 1u64 << square;
    flood(empty, bishop, Direction::Northeast)
        | flood(empty, bishop, Direction::Northwest)
        | flood(empty, bishop, Direction::Southeast)
        | flood(empty, bishop, Direction::Southwest)
}

#[must_use]
pub fn rook_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    let empty = !occupancy;
    let rook = 1u64 << square;
    flood(empty, rook, Direction::North)
        | flood(empty, rook, Direction::South)
        | flood(empty, rook, Direction::East)
        | flood(empty, rook, Direction::West)
}
