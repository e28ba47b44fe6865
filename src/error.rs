//! The fatal-condition taxonomy for the core.
//!
//! Everything else (carry, overflow, page crossing, stack/zero-page wrap) is
//! a normal arithmetic outcome, not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("write to cartridge space at address {address:#06X} is not supported")]
    CartridgeWriteAttempted { address: u16 },

    #[error("not an iNES file: missing 'NES\\x1A' magic in the header")]
    InvalidRomMagic,

    #[error("no instruction table entry for opcode {opcode:#04X} at {pc:#06X}")]
    UnknownOpcode { opcode: u8, pc: u16 },

    #[error("I/O error while loading ROM: {0}")]
    Io(#[from] std::io::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;
