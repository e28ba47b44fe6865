//! NROM (mapper 0) cartridge backend and iNES header parsing.
//!
//! Header layout and bit meanings follow the NESDev iNES 1.0 description;
//! only the PRG-mapping rule is exercised by the rest of the crate, but the
//! remaining header fields are retained since a real mapper stack (out of
//! scope here) would need them.

use crate::constants::{CHR_BANK_SIZE, INES_HEADER_SIZE, INES_MAGIC, PRG_BANK_SIZE, TRAINER_SIZE};
use crate::error::{CoreError, CoreResult};
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// The 16-byte iNES header, parsed field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub prg_rom_banks: u8,
    pub chr_rom_banks: u8,
    pub mirroring: Mirroring,
    pub has_persistent_memory: bool,
    pub has_trainer: bool,
    pub mapper_number: u8,
    pub vs_unisystem: bool,
    pub playchoice_10: bool,
}

struct Byte {
    value: u8,
}

impl Byte {
    fn bit(&self, n: u8) -> bool {
        (self.value >> n) & 1 == 1
    }
}

impl Header {
    fn parse(bytes: &[u8; INES_HEADER_SIZE]) -> CoreResult<Header> {
        if bytes[0..4] != INES_MAGIC {
            return Err(CoreError::InvalidRomMagic);
        }
        let flags6 = Byte { value: bytes[6] };
        let flags7 = Byte { value: bytes[7] };

        let mirroring = if flags6.bit(3) {
            Mirroring::FourScreen
        } else if flags6.bit(0) {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };

        let mapper_number = (flags6.value >> 4) | (flags7.value & 0xF0);

        Ok(Header {
            prg_rom_banks: bytes[4],
            chr_rom_banks: bytes[5],
            mirroring,
            has_persistent_memory: flags6.bit(1),
            has_trainer: flags6.bit(2),
            mapper_number,
            vs_unisystem: flags7.bit(0),
            playchoice_10: flags7.bit(1),
        })
    }
}

/// An NROM (mapper 0) PRG-ROM image. CHR data is retained but unused by the
/// CPU core; it exists only for completeness of the parsed file.
#[derive(Debug, Clone)]
pub struct Cartridge {
    pub header: Option<Header>,
    prg_rom: Vec<u8>,
    chr_rom: Vec<u8>,
}

impl Cartridge {
    /// Build a cartridge directly from a flat PRG image (1 or 2 banks), with
    /// no iNES wrapper. Used by tests and by callers assembling a program
    /// in memory rather than loading a file.
    pub fn from_prg_bytes(prg_rom: Vec<u8>) -> Cartridge {
        Cartridge { header: None, prg_rom, chr_rom: Vec::new() }
    }

    /// Parse a full iNES file body (header onward) into a cartridge.
    pub fn load_ines(bytes: &[u8]) -> CoreResult<Cartridge> {
        if bytes.len() < INES_HEADER_SIZE {
            return Err(CoreError::InvalidRomMagic);
        }
        let mut header_bytes = [0u8; INES_HEADER_SIZE];
        header_bytes.copy_from_slice(&bytes[0..INES_HEADER_SIZE]);
        let header = Header::parse(&header_bytes)?;

        if header.mapper_number != 0 {
            warn!(
                "mapper {} is not NROM; PRG banks will still be mapped as NROM",
                header.mapper_number
            );
        }

        let mut offset = INES_HEADER_SIZE;
        if header.has_trainer {
            warn!("ROM has a 512-byte trainer block; skipping it, it is not emulated");
            offset += TRAINER_SIZE;
        }

        let prg_len = header.prg_rom_banks as usize * PRG_BANK_SIZE;
        let prg_rom = bytes
            .get(offset..offset + prg_len)
            .ok_or(CoreError::InvalidRomMagic)?
            .to_vec();
        offset += prg_len;

        let chr_len = header.chr_rom_banks as usize * CHR_BANK_SIZE;
        let chr_rom = bytes.get(offset..offset + chr_len).unwrap_or(&[]).to_vec();

        Ok(Cartridge { header: Some(header), prg_rom, chr_rom })
    }

    /// Read relative to the start of cartridge space (i.e. `addr - 0x4020`).
    pub fn read(&self, cartridge_relative_addr: u16) -> u8 {
        let addr = cartridge_relative_addr as usize + 0x4020;
        if addr < 0x8000 {
            return 0;
        }
        let window = addr - 0x8000;
        if self.prg_rom.is_empty() {
            return 0;
        }
        // A single 16 KiB bank mirrors across the whole 32 KiB window; two
        // banks map directly with no mirroring.
        let index = if self.prg_rom.len() <= PRG_BANK_SIZE {
            window % PRG_BANK_SIZE
        } else {
            window % self.prg_rom.len()
        };
        self.prg_rom[index]
    }

    pub fn chr_rom(&self) -> &[u8] {
        &self.chr_rom
    }
}
