//! Exhaustive per-square case analysis: each square gets a function that
//! matches on the masked occupancy and returns a precomputed attack set.
//! No run-time tables; everything is resolved by the compiler.
//!
//! The module body is machine-generated into `$OUT_DIR/switch_attacks.rs` by
//! the build script. The `genswitch` binary emits the same source for
//! standalone use.
#![allow(clippy::unreadable_literal)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::too_many_lines)]

include!(concat!(env!("OUT_DIR"), "/switch_attacks.rs"));
