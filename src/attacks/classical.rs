//! Classical ray lookup: a 64x8 table of ray masks, with the first blocker
//! found by a count-leading/trailing-zeros scan.
//! <https://www.chessprogramming.org/Classical_Approach>

use std::sync::OnceLock;

use itertools::Itertools;
use log::debug;

use crate::bitboard::{msb, BitBoard};
use crate::geometry::{ray_mask, Direction};

// Full ray masks for all squares and directions, statically initialized.
fn rays() -> &'static [[BitBoard; 8]; 64] {
    static RAYS: OnceLock<[[BitBoard; 8]; 64]> = OnceLock::new();
    RAYS.get_or_init(|| {
        let table = (0..64)
            .map(|sq| Direction::ALL.map(|dir| ray_mask(sq, dir, false)))
            .collect_array()
            .unwrap();
        debug!("classical ray table initialised");
        table
    })
}

// The sentinel bit ORed into the blocker set gives a defined blocker square
// even on an empty ray; subtracting that square's own ray then leaves the
// full ray.
#[inline]
fn ray_attacks(occupancy: BitBoard, square: u8, dir: Direction) -> BitBoard {
    let rays = rays();
    let attacks = rays[square as usize][dir as usize];
    let blocker = attacks & occupancy;

    let stop = if dir.shift() > 0 {
        (blocker | (1 << 63)).trailing_zeros()
    } else {
        msb(blocker | 1)
    };
    attacks & !rays[stop as usize][dir as usize]
}

pub fn init() {
    rays();
}

#[must_use]
pub fn bishop_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    ray_attacks(occupancy, square, Direction::Northeast)
        | ray_attacks(occupancy, square, Direction::Southeast)
        | ray_attacks(occupancy, square, Direction::Southwest)
        | ray_attacks(occupancy, square, Direction::Northwest)
}

#[must_use]
pub fn rook_attacks(occupancy: BitBoard, square: u8) -> BitBoard {
    ray_attacks(occupancy, square, Direction::North)
        | ray_attacks(occupancy, square, Direction::East)
        | ray_attacks(occupancy, square, Direction::South)
        | ray_attacks(occupancy, square, Direction::West)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attacks::testing;
    use crate::bitboard::UNIVERSAL;

    #[test]
    fn test_matches_reference() {
        testing::check_matches_reference(bishop_attacks, rook_attacks);
    }

    #[test]
    fn test_ray_table() {
        let rays = rays();
        // North of a1 is the rest of the A file.
        assert_eq!(
            rays[0][Direction::North as usize],
            0x0101_0101_0101_0100
        );
        // West of h4.
        assert_eq!(rays[31][Direction::West as usize], 0x7F00_0000);
        // Nothing northeast of h8.
        assert_eq!(rays[63][Direction::Northeast as usize], 0);
    }

    #[test]
    fn test_unobstructed_and_saturated_rays() {
        // Empty board: the full diagonals.
        assert_eq!(bishop_attacks(0, 27), 0x8041_2214_0014_2241);
        // Saturated board: only the immediate neighbours.
        assert_eq!(rook_attacks(UNIVERSAL, 27), 0x0008_1408_0000);
    }
}
