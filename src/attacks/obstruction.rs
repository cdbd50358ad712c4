//! Obstruction difference: per line, the span between the highest blocker
//! below the square and the lowest blocker above it, in a handful of bit ops.
//! <https://www.chessprogramming.org/Obstruction_Difference>

use std::sync::OnceLock;

use itertools::Itertools;
use log::debug;

use crate::bitboard::{msb, BitBoard};
use crate::geometry::{ray_mask, LineType};

struct LinePair {
    upper: BitBoard,
    lower: BitBoard,
}

fn masks(sq: u8) -> &'static [LinePair; 4] {
    static MASKS: OnceLock<[[LinePair; 4]; 64]> = OnceLock::new();
    &MASKS.get_or_init(|| {
        let table = (0..64)
            .map(|sq| {
                LineType::ALL.map(|line| {
                    let (up, down) = line.directions();
                    LinePair {
                        upper: ray_mask(sq, up, false),
                        lower: ray_mask(sq, down, false),
                    }
                })
            })
            .collect_array()
            .unwrap();
        debug!("obstruction difference masks initialised");
        table
    })[sq as usize]
}

// The `| 1` sentinel stands in for a blocker when the lower ray is empty.
#[inline]
fn line_attacks(occupancy: BitBoard, square: u8, line: LineType) -> BitBoard {
    let m = &masks(square)[line as usize];
    let upper = m.upper & occupancy;
    let lower = m.lower & occupancy;

    let highest_low = u64::MAX << msb(lower | 1);
    let lowest_high = upper & upper.wrapping_neg();
    let diff = (lowest_high << 1).wrapping_add(highest_low);

    (m.upper | m.lower) & diff
}

pub fn init() {
    masks(0);
}

#[must_use]
pub fn bishop_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    line_attacks(occupancy, square, LineType::Diagonal)
        | line_attacks(occupancy, square, LineType::Antidiagonal)
}

#[must_use]
pub fn rook_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    line_attacks(occupancy, square, LineType::Rank)
        | line_attacks(occupancy, square, LineType::File)
}
