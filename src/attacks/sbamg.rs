//! SBAMG (shifted blocker arithmetic mask generation): per line, sentinel
//! bits at both ends of the line guarantee a blocker, and one subtraction
//! spans the attacked run.
//! <https://www.chessprogramming.org/SBAMG>

use std::sync::OnceLock;

use itertools::Itertools;
use log::debug;

use crate::bitboard::{msb, BitBoard};
use crate::geometry::{ray_mask, Direction, LineType};

struct LineMasks {
    lower: BitBoard,
    line: BitBoard,
    outer: BitBoard,
}

// The terminal edge square of a ray, if any.
fn outer_bit(sq: u8, dir: Direction) -> BitBoard {
    ray_mask(sq, dir, false) & !ray_mask(sq, dir, true)
}

fn masks(sq: u8) -> &'static [LineMasks; 4] {
    static MASKS: OnceLock<[[LineMasks; 4]; 64]> = OnceLock::new();
    &MASKS.get_or_init(|| {
        let table = (0..64)
            .map(|sq: u8| {
                LineType::ALL.map(|line| {
                    let (up, down) = line.directions();
                    LineMasks {
                        // Bit 0 doubles as the below-square sentinel for a1.
                        lower: if sq == 0 { 1 } else { (1 << sq) - 1 },
                        line: ray_mask(sq, up, false) | ray_mask(sq, down, false),
                        outer: outer_bit(sq, up) | outer_bit(sq, down) | 1,
                    }
                })
            })
            .collect_array()
            .unwrap();
        debug!("sbamg line masks initialised");
        table
    })[sq as usize]
}

#[inline]
fn line_attacks(occupancy: BitBoard, square: u8, line_type: LineType) -> BitBoard {
    let m = &masks(square)[line_type as usize];
    let line = (occupancy & m.line) | m.outer;

    let blocker = 3 << msb(line & m.lower);

    (line ^ line.wrapping_sub(blocker)) & m.line
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
