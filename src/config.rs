//! Command-line configuration for the `trace` binary.

use clap::Parser;

/// Load an iNES ROM and print a per-instruction execution trace.
#[derive(Debug, Parser)]
#[command(name = "trace", version, about)]
pub struct Cli {
    /// Path to an .nes (iNES) ROM file.
    pub rom: String,

    /// Override the starting program counter (hex, without a leading 0x).
    /// Defaults to the reset vector stored in the ROM.
    #[arg(long, value_parser = parse_hex_u16)]
    pub start_pc: Option<u16>,

    /// Shorthand for the documented nestest entry point: PC=C000, I=1, S=FD.
    #[arg(long, conflicts_with = "start_pc")]
    pub nestest: bool,

    /// Stop after this many instructions instead of running forever.
    #[arg(long)]
    pub limit: Option<u64>,
}

fn parse_hex_u16(s: &str) -> Result<u16, String> {
    u16::from_str_radix(s.trim_start_matches("0x"), 16).map_err(|e| e.to_string())
}

impl Cli {
    pub const NESTEST_ENTRY_PC: u16 = 0xC000;
}
