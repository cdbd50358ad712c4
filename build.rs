//! Generates the exhaustive-match attack module when the `switch` feature is
//! enabled. The ray walkers are repeated here in miniature because a build
//! script cannot link against the crate it is building; the `genswitch`
//! binary emits the same source through the library's geometry module.

use std::env;
use std::fs::File;
use std::io::{BufWriter, Result, Write};
use std::path::PathBuf;

// (rank step, file step)
const BISHOP_DIRS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_DIRS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=build.rs");
    if env::var_os("CARGO_FEATURE_SWITCH").is_none() {
        return Ok(());
    }

    let path = PathBuf::from(env::var_os("OUT_DIR").unwrap()).join("switch_attacks.rs");
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "// Machine-generated; do not edit.")?;
    writeln!(out, "pub fn init() {{")?;
    writeln!(out, "    // No tables.")?;
    writeln!(out, "}}")?;
    emit_piece(&mut out, "bishop", &BISHOP_DIRS)?;
    emit_piece(&mut out, "rook", &ROOK_DIRS)
}

fn emit_piece(out: &mut impl Write, name: &str, dirs: &[(i32, i32); 4]) -> Result<()> {
    for square in 0..64 {
        let mask = relevant_mask(square, dirs);
        writeln!(out, "fn {name}_{square}(occupancy: u64) -> u64 {{")?;
        writeln!(out, "    match occupancy & {mask}u64 {{")?;
        let mut blockers: u64 = 0;
        loop {
            writeln!(out, "        {blockers}u64 => {}u64,", attacks(square, blockers, dirs))?;
            blockers = blockers.wrapping_sub(mask) & mask;
            if blockers == 0 {
                break;
            }
        }
        writeln!(out, "        // Every subset of the mask has an arm above.")?;
        writeln!(out, "        _ => unsafe {{ core::hint::unreachable_unchecked() }},")?;
        writeln!(out, "    }}")?;
        writeln!(out, "}}")?;
    }

    writeln!(out, "#[must_use]")?;
    writeln!(out, "pub fn {name}_attacks(occupancy: u64, square: u8) -> u64 {{")?;
    writeln!(out, "    match square {{")?;
    for square in 0..64 {
        writeln!(out, "        {square} => {name}_{square}(occupancy),")?;
    }
    writeln!(out, "        _ => unreachable!(),")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

// Occupancy bits that can change the attack set: the rays without their
// terminal edge squares.
fn relevant_mask(square: i32, dirs: &[(i32, i32); 4]) -> u64 {
    let mut mask = 0;
    for &(dr, df) in dirs {
        let mut rank = square / 8 + dr;
        let mut file = square % 8 + df;
        while (0..8).contains(&(rank + dr)) && (0..8).contains(&(file + df)) {
            mask |= 1u64 << (rank * 8 + file);
            rank += dr;
            file += df;
        }
    }
    mask
}

// Each ray truncated at, and including, its first blocker.
fn attacks(square: i32, occupancy: u64, dirs: &[(i32, i32); 4]) -> u64 {
    let mut result = 0;
    for &(dr, df) in dirs {
        let mut rank = square / 8 + dr;
        let mut file = square % 8 + df;
        while (0..8).contains(&rank) && (0..8).contains(&file) {
            let bit = 1u64 << (rank * 8 + file);
            result |= bit;
            if occupancy & bit != 0 {
                break;
            }
            rank += dr;
            file += df;
        }
    }
    result
}
