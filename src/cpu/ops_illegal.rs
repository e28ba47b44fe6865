//! Undocumented opcodes. Each composite reuses the two underlying documented
//! semantics on the single already-resolved operand rather than re-running
//! addressing resolution between the two halves.

use super::ops_logical::{add_impl, asl, lsr, rol, ror};
use super::{Cpu, Operand};
use crate::opcodes::Mnemonic;

fn address_high_plus_one(operand: Operand) -> u8 {
    match operand {
        Operand::Address(addr) => ((addr >> 8) as u8).wrapping_add(1),
        _ => 0,
    }
}

pub fn execute(cpu: &mut Cpu, mnemonic: Mnemonic, operand: Operand) {
    use Mnemonic::*;
    match mnemonic {
        Slo => {
            let value = cpu.read_operand(operand);
            let shifted = asl(cpu, value);
            cpu.write_operand(operand, shifted);
            cpu.a |= shifted;
            cpu.flags.set_zn(cpu.a);
        }
        Rla => {
            let value = cpu.read_operand(operand);
            let rotated = rol(cpu, value);
            cpu.write_operand(operand, rotated);
            cpu.a &= rotated;
            cpu.flags.set_zn(cpu.a);
        }
        Sre => {
            let value = cpu.read_operand(operand);
            let shifted = lsr(cpu, value);
            cpu.write_operand(operand, shifted);
            cpu.a ^= shifted;
            cpu.flags.set_zn(cpu.a);
        }
        Rra => {
            let value = cpu.read_operand(operand);
            let rotated = ror(cpu, value);
            cpu.write_operand(operand, rotated);
            add_impl(cpu, rotated);
        }
        Sax => {
            let value = cpu.a & cpu.x;
            cpu.write_operand(operand, value);
        }
        Lax => {
            let value = cpu.read_operand(operand);
            cpu.a = value;
            cpu.x = value;
            cpu.flags.set_zn(value);
        }
        Dcp => {
            let value = cpu.read_operand(operand).wrapping_sub(1);
            cpu.write_operand(operand, value);
            cpu.flags.c = cpu.a >= value;
            cpu.flags.set_zn(cpu.a.wrapping_sub(value));
        }
        Isb => {
            let value = cpu.read_operand(operand).wrapping_add(1);
            cpu.write_operand(operand, value);
            add_impl(cpu, !value);
        }
        Anc => {
            cpu.a &= cpu.read_operand(operand);
            cpu.flags.set_zn(cpu.a);
            cpu.flags.c = cpu.flags.n;
        }
        Alr => {
            cpu.a &= cpu.read_operand(operand);
            let result = lsr(cpu, cpu.a);
            cpu.a = result;
        }
        Arr => {
            cpu.a &= cpu.read_operand(operand);
            let result = ror(cpu, cpu.a);
            cpu.a = result;
            cpu.flags.c = result & 0x40 != 0;
            cpu.flags.v = ((result >> 6) ^ (result >> 5)) & 1 != 0;
        }
        Xaa => {
            cpu.a = cpu.x & cpu.read_operand(operand);
            cpu.flags.set_zn(cpu.a);
        }
        Ahx => {
            let value = cpu.a & cpu.x & address_high_plus_one(operand);
            cpu.write_operand(operand, value);
        }
        Tas => {
            cpu.s = cpu.a & cpu.x;
            let value = cpu.s & address_high_plus_one(operand);
            cpu.write_operand(operand, value);
        }
        Shy => {
            let value = cpu.y & address_high_plus_one(operand);
            cpu.write_operand(operand, value);
        }
        Shx => {
            let value = cpu.x & address_high_plus_one(operand);
            cpu.write_operand(operand, value);
        }
        Las => {
            let value = cpu.read_operand(operand) & cpu.s;
            cpu.a = value;
            cpu.x = value;
            cpu.s = value;
            cpu.flags.set_zn(value);
        }
        Axs => {
            let source = cpu.a & cpu.x;
            let operand_value = cpu.read_operand(operand);
            cpu.flags.c = source >= operand_value;
            cpu.x = source.wrapping_sub(operand_value);
            cpu.flags.set_zn(cpu.x);
        }
        other => unreachable!("{other:?} is not an undocumented opcode"),
    }
}
