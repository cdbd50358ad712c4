//! `Dumb7Fill`: per-direction flood fill, seven shift-and-accumulate rounds.
//! No tables; every query recomputes from scratch.
//! <https://www.chessprogramming.org/Dumb7Fill>

use crate::bitboard::BitBoard;
use crate::geometry::{shifted, Direction};

// Seven rounds propagate a fill across the longest possible ray; the final
// shift turns filled squares into attacked ones.
#[inline]
fn flood(empty: BitBoard, mut fill: BitBoard, dir: Direction) -> BitBoard {
    let shift = dir.shift();
    let mask = dir.edge_mask();
    let empty = empty & mask;
    let mut flood = fill;
    for _ in 0..6 {
        fill = shifted(fill, shift) & empty;
        flood |= fill;
    }
    flood |= shifted(fill, shift) & empty;
    shifted(flood, shift) & mask
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
