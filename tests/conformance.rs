//! Full nestest-log conformance run. This repository does not vendor the
//! `nestest.nes`/`nestest.log` fixture; when the files are present under
//! `tests/fixtures/`, this test replays the ROM from the documented nestest
//! entry point (PC=0xC000) and diffs the trace field-for-field against the
//! reference log. Without the fixtures it is skipped with an explanatory
//! message rather than silently passing or failing.

use std::fs;
use std::path::Path;

use mos6502::bus::Bus;
use mos6502::cartridge::Cartridge;
use mos6502::cpu::Cpu;

#[test]
fn nestest_log_matches_reference_trace() {
    let rom_path = Path::new("tests/fixtures/nestest.nes");
    let log_path = Path::new("tests/fixtures/nestest.log");
    if !rom_path.exists() || !log_path.exists() {
        eprintln!(
            "skipping nestest conformance: {} and {} are not present in this tree",
            rom_path.display(),
            log_path.display()
        );
        return;
    }

    let rom_bytes = fs::read(rom_path).expect("read nestest.nes");
    let reference = fs::read_to_string(log_path).expect("read nestest.log");

    let cartridge = Cartridge::load_ines(&rom_bytes).expect("parse nestest.nes");
    let bus = Bus::new_shared(cartridge);
    let mut cpu = Cpu::new_at(bus, 0xC000);
    cpu.flags.i = true;

    for (index, expected_line) in reference.lines().enumerate() {
        let record = cpu.debug_step();
        let actual = record.to_string();
        // The reference log carries additional PPU/CYC bookkeeping fields
        // this core does not model; compare only the architectural prefix
        // (PC, opcode bytes, mnemonic, operand, and registers).
        let expected_prefix: String = expected_line.chars().take(48).collect();
        let actual_prefix: String = actual.chars().take(48).collect();
        assert_eq!(
            actual_prefix, expected_prefix,
            "trace diverged at instruction {index}"
        );
    }
}
