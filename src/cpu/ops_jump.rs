//! Branches, jumps, subroutine linkage, interrupts, and flag-only ops.

use super::flags::Flags;
use super::{Cpu, Operand};
use crate::constants::InterruptVector;
use crate::opcodes::Mnemonic;

/// Evaluate and, if taken, perform a conditional branch. Returns the extra
/// cycles incurred: 0 if not taken, 1 if taken, 2 if taken across a page.
pub fn branch(cpu: &mut Cpu, mnemonic: Mnemonic, operand: Operand) -> u32 {
    use Mnemonic::*;
    let offset = match operand {
        Operand::Relative(offset) => offset,
        other => unreachable!("branch with non-relative operand {other:?}"),
    };

    let taken = match mnemonic {
        Bcc => !cpu.flags.c,
        Bcs => cpu.flags.c,
        Beq => cpu.flags.z,
        Bne => !cpu.flags.z,
        Bmi => cpu.flags.n,
        Bpl => !cpu.flags.n,
        Bvc => !cpu.flags.v,
        Bvs => cpu.flags.v,
        other => unreachable!("{other:?} is not a branch"),
    };

    if !taken {
        return 0;
    }

    let fallthrough_pc = cpu.pc;
    let new_pc = fallthrough_pc.wrapping_add(offset as i16 as u16);
    cpu.pc = new_pc;

    // The page-cross penalty compares the branch opcode's own address (not
    // the fallthrough address) against the target: a relative instruction
    // is always 2 bytes, so an opcode at e.g. 0x01FE still reads as crossing
    // into page 2 even when the fallthrough address already landed there.
    let opcode_addr = fallthrough_pc.wrapping_sub(2);
    if opcode_addr & 0xFF00 != new_pc & 0xFF00 {
        2
    } else {
        1
    }
}

pub fn execute(cpu: &mut Cpu, mnemonic: Mnemonic, operand: Operand) {
    use Mnemonic::*;
    match mnemonic {
        Jmp => {
            cpu.pc = match operand {
                Operand::Address(addr) => addr,
                other => unreachable!("JMP with {other:?}"),
            };
        }
        Jsr => {
            let target = match operand {
                Operand::Address(addr) => addr,
                other => unreachable!("JSR with {other:?}"),
            };
            cpu.push_u16(cpu.pc.wrapping_sub(1));
            cpu.pc = target;
        }
        Rts => {
            cpu.pc = cpu.pop_u16().wrapping_add(1);
        }
        Rti => {
            let status = cpu.pop_u8();
            cpu.flags = Flags::unpack(status);
            cpu.pc = cpu.pop_u16();
        }
        Brk => {
            cpu.push_u16(cpu.pc);
            let status = cpu.flags.pack_with_break();
            cpu.push_u8(status);
            cpu.pc = cpu.read_u16(InterruptVector::IrqOrBrk.address());
        }
        Clc => cpu.flags.c = false,
        Cld => cpu.flags.d = false,
        Cli => cpu.flags.i = false,
        Clv => cpu.flags.v = false,
        Sec => cpu.flags.c = true,
        Sed => cpu.flags.d = true,
        Sei => cpu.flags.i = true,
        Nop => {}
        other => unreachable!("{other:?} is not a jump/flag operation"),
    }
}
