//! A cycle-accurate MOS 6502 / Ricoh 2A03 CPU core: fetch-decode-execute
//! over the full documented and undocumented opcode set, an address-space
//! bus, and an NROM cartridge backend, with a stepper that can emit a
//! per-instruction execution trace.

pub mod bus;
pub mod cartridge;
pub mod config;
pub mod constants;
pub mod cpu;
pub mod error;
pub mod opcodes;
pub mod trace;

pub use bus::{Bus, SharedBus};
pub use cartridge::Cartridge;
pub use cpu::Cpu;
pub use error::{CoreError, CoreResult};
pub use trace::TraceRecord;
