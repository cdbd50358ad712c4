//! C ABI entry points, for building the crate as a `cdylib` and calling it
//! from non-Rust hosts.
#![allow(non_snake_case)]
#![allow(clippy::cast_possible_truncation)]

use crate::bitboard::BitBoard;

#[no_mangle]
pub extern "C" fn InitTables() {
    crate::init_tables();
}

#[must_use]
#[no_mangle]
pub extern "C" fn BishopAttacks(occupancy: BitBoard, square: u32) -> BitBoard {
    debug_assert!(square < 64);
    crate::bishop_attacks(occupancy, square as u8)
}

#[must_use]
#[no_mangle]
pub extern "C" fn RookAttacks(occupancy: BitBoard, square: u32) -> BitBoard {
    debug_assert!(square < 64);
    crate::rook_attacks(occupancy, square as u8)
}
