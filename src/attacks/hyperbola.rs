//! Hyperbola Quintessence: the o^(o-2r) subtraction trick along a line mask,
//! mirrored with a byte-swap for the reverse direction.
//! <https://www.chessprogramming.org/Hyperbola_Quintessence>
//!
//! Ranks do not survive a byte-swap, so rook rank attacks use a 512-byte
//! first-rank lookup by default, or a true bit-reverse under the
//! `hyperbola-rank` feature.
#![allow(clippy::cast_possible_truncation)]

use std::sync::OnceLock;

use itertools::Itertools;
use log::debug;

use crate::bitboard::BitBoard;
use crate::geometry::{ray_mask, LineType};

// Line masks for one square, excluding the square itself.
struct MaskSet {
    bit: BitBoard,
    diagonal: BitBoard,
    antidiagonal: BitBoard,
    file: BitBoard,
    rank: BitBoard,
}

impl MaskSet {
    fn new(sq: u8) -> Self {
        let line = |line_type: LineType| {
            let (up, down) = line_type.directions();
            ray_mask(sq, up, false) | ray_mask(sq, down, false)
        };
        Self {
            bit: 1 << sq,
            diagonal: line(LineType::Diagonal),
            antidiagonal: line(LineType::Antidiagonal),
            file: line(LineType::File),
            rank: line(LineType::Rank),
        }
    }
}

fn masks(sq: u8) -> &'static MaskSet {
    static MASKS: OnceLock<[MaskSet; 64]> = OnceLock::new();
    &MASKS.get_or_init(|| {
        let table = (0..64).map(MaskSet::new).collect_array().unwrap();
        debug!("hyperbola line masks initialised");
        table
    })[sq as usize]
}

// The subtraction borrows through empty squares up to the first blocker;
// doing the same on the byte-swapped board and swapping back covers the
// downward half of the line.
#[inline]
fn line_attacks(occupancy: BitBoard, bit: BitBoard, mask: BitBoard) -> BitBoard {
    let mut forward = occupancy & mask;
    let mut reverse = forward.swap_bytes();
    forward = forward.wrapping_sub(bit);
    reverse = reverse.wrapping_sub(bit.swap_bytes());
    forward ^= reverse.swap_bytes();
    forward & mask
}

// Attack byte for a single rank: empty squares plus the first occupied one,
// on both sides of `file`.
fn first_rank_attacks(occupancy: u8, file: u8) -> u8 {
    let mut attacks = 0;
    for x in (0..file).rev() {
        let bit = 1 << x;
        attacks |= bit;
        if occupancy & bit != 0 {
            break;
        }
    }
    for x in (file + 1)..8 {
        let bit = 1 << x;
        attacks |= bit;
        if occupancy & bit != 0 {
            break;
        }
    }
    attacks
}

// 64 six-bit occupancy patterns x 8 files. The end squares of a rank never
// matter, which is why six bits suffice.
fn rank_table() -> &'static [u8; 512] {
    static TABLE: OnceLock<[u8; 512]> = OnceLock::new();
    TABLE.get_or_init(|| {
        let table = (0..64u8)
            .flat_map(|occ| (0..8).map(move |file| first_rank_attacks(occ << 1, file)))
            .collect_array()
            .unwrap();
        debug!("hyperbola rank attack table initialised");
        table
    })
}

fn rank_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    let file = u64::from(square & 7);
    let offset = square & 56; // rank * 8
    let occupancy_x2 = (occupancy >> offset) & (2 * 63); // inner six bits, doubled
    let attacks = rank_table()[(4 * occupancy_x2 + file) as usize];
    BitBoard::from(attacks) << offset
}

// Rank mirror via a full bit-reverse; the mirrored square of `sq` is
// `sq ^ 63` rather than the byte-swap's `sq ^ 56`.
fn rank_attacks_by_reverse(occupancy: BitBoard, square: u8) -> BitBoard {
    let mask = masks(square).rank;
    let o = occupancy & mask;
    let forward = o.wrapping_sub(1 << square);
    let reverse = o
        .reverse_bits()
        .wrapping_sub(1 << (square ^ 63))
        .reverse_bits();
    (forward ^ reverse) & mask
}

pub fn init() {
    masks(0);
    if !cfg!(feature = "hyperbola-rank") {
        rank_table();
    }
}

#[must_use]
pub fn bishop_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    let m = masks(square);
    line_attacks(occupancy, m.bit, m.diagonal) | line_attacks(occupancy, m.bit, m.antidiagonal)
}

#[must_use]
pub fn rook_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    let m = masks(square);
    let rank = if cfg!(feature = "hyperbola-rank") {
        rank_attacks_by_reverse(occupancy, square)
    } else {
        rank_attacks(occupancy, square)
    };
    line_attacks(occupancy, m.bit, m.file) | rank
}
