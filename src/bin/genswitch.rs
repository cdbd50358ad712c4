//! Emits, on standard output, a Rust module implementing the attack queries
//! as one exhaustive `match` per square: every blocker subset of the
//! square's relevant occupancy mask gets an arm with its precomputed attack
//! set. The output is what the `switch` build feature compiles in.

use std::io::{self, BufWriter, Write};

use clap::Parser;
use flexi_logger::Logger;
use log::info;

use slidegen::bitboard::BitBoard;
use slidegen::geometry::{
    bishop_relevant_mask, next_subset, rook_relevant_mask, walk_bishop_attacks, walk_rook_attacks,
};

/// Writes the generated attack module to standard output.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Arguments {}

fn main() -> io::Result<()> {
    Arguments::parse();

    // Diagnostics go to stderr; stdout carries only the generated source.
    Logger::try_with_str("info").unwrap().start().unwrap();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    writeln!(out, "// Machine-generated; do not edit.")?;
    writeln!(out, "pub fn init() {{")?;
    writeln!(out, "    // No tables.")?;
    writeln!(out, "}}")?;
    emit_piece(&mut out, "bishop", bishop_relevant_mask, walk_bishop_attacks)?;
    emit_piece(&mut out, "rook", rook_relevant_mask, walk_rook_attacks)?;
    out.flush()?;

    info!("switch attack module written to stdout");
    Ok(())
}

fn emit_piece(
    out: &mut impl Write,
    name: &str,
    relevant_mask: fn(u8) -> BitBoard,
    attacks: fn(BitBoard, u8) -> BitBoard,
) -> io::Result<()> {
    for square in 0..64 {
        let mask = relevant_mask(square);
        writeln!(out, "fn {name}_{square}(occupancy: u64) -> u64 {{")?;
        writeln!(out, "    match occupancy & {mask}u64 {{")?;
        let mut blockers = 0;
        loop {
            writeln!(out, "        {blockers}u64 => {}u64,", attacks(blockers, square))?;
            blockers = next_subset(blockers, mask);
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
