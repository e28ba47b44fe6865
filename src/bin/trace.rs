use std::fs;
use std::process;

use clap::Parser;
use colored::Colorize;
use log::info;

use mos6502::bus::Bus;
use mos6502::cartridge::Cartridge;
use mos6502::config::Cli;
use mos6502::cpu::Cpu;
use mos6502::opcodes::Mnemonic;
use mos6502::trace::TraceRecord;

/// Render a trace record the way the reference log lays it out, with the
/// address and mnemonic colorized for a human watching the stream scroll by.
fn print_trace_line(record: &TraceRecord) {
    let mnemonic = match record.mnemonic {
        Mnemonic::Kil => record.mnemonic.as_str().red().bold(),
        _ => record.mnemonic.as_str().green(),
    };
    let rendered = record.to_string();
    let pc_field = format!("{:04X}", record.pc);
    // The mnemonic and PC are the two fields a reader scans for; everything
    // else (operand bytes, registers, cycle bookkeeping) stays uncolored.
    let rendered = rendered.replacen(&pc_field, &pc_field.yellow().to_string(), 1);
    let rendered = rendered.replacen(record.mnemonic.as_str(), &mnemonic.to_string(), 1);
    println!("{rendered}");
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let bytes = match fs::read(&cli.rom) {
        Ok(bytes) => bytes,
        Err(err) => {
            eprintln!("failed to read {}: {err}", cli.rom);
            process::exit(1);
        }
    };

    let cartridge = match Cartridge::load_ines(&bytes) {
        Ok(cartridge) => cartridge,
        Err(err) => {
            eprintln!("failed to load {}: {err}", cli.rom);
            process::exit(1);
        }
    };

    let bus = Bus::new_shared(cartridge);
    let start_pc = if cli.nestest {
        Cli::NESTEST_ENTRY_PC
    } else if let Some(pc) = cli.start_pc {
        pc
    } else {
        bus.borrow().read_u16(mos6502::constants::InterruptVector::Reset.address())
    };

    let mut cpu = Cpu::new_at(bus, start_pc);
    if cli.nestest {
        cpu.flags.i = true;
    }

    info!("starting trace at {start_pc:#06X}");

    let limit = cli.limit.unwrap_or(u64::MAX);
    let mut count = 0u64;
    while count < limit && !cpu.halted() {
        let record = cpu.debug_step();
        print_trace_line(&record);
        count += 1;
    }
}
