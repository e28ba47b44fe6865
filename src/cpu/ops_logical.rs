//! Arithmetic, bitwise logic, shifts/rotates, compares, and increments.

use super::{Cpu, Operand};
use crate::opcodes::Mnemonic;

/// Shared ADC/SBC core. SBC is implemented as `add_impl(cpu, !operand)`, the
/// standard ones'-complement identity, so both share one carry/overflow
/// formula instead of a second hand-written subtraction.
pub fn add_impl(cpu: &mut Cpu, operand: u8) {
    let carry_in = cpu.flags.c as u16;
    let a = cpu.a as u16;
    let m = operand as u16;
    let result = a + m + carry_in;

    cpu.flags.c = result > 0xFF;
    let result_u8 = result as u8;
    cpu.flags.v = (cpu.a ^ result_u8) & (operand ^ result_u8) & 0x80 != 0;
    cpu.a = result_u8;
    cpu.flags.set_zn(cpu.a);
}

pub fn adc(cpu: &mut Cpu, operand: u8) {
    add_impl(cpu, operand);
}

pub fn sbc(cpu: &mut Cpu, operand: u8) {
    add_impl(cpu, !operand);
}

fn compare(cpu: &mut Cpu, register: u8, operand: u8) {
    cpu.flags.c = register >= operand;
    cpu.flags.set_zn(register.wrapping_sub(operand));
}

pub fn asl(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.flags.c = value & 0x80 != 0;
    let result = value << 1;
    cpu.flags.set_zn(result);
    result
}

pub fn lsr(cpu: &mut Cpu, value: u8) -> u8 {
    cpu.flags.c = value & 0x01 != 0;
    let result = value >> 1;
    cpu.flags.set_zn(result);
    result
}

pub fn rol(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.flags.c as u8;
    cpu.flags.c = value & 0x80 != 0;
    let result = (value << 1) | carry_in;
    cpu.flags.set_zn(result);
    result
}

pub fn ror(cpu: &mut Cpu, value: u8) -> u8 {
    let carry_in = cpu.flags.c as u8;
    cpu.flags.c = value & 0x01 != 0;
    let result = (value >> 1) | (carry_in << 7);
    cpu.flags.set_zn(result);
    result
}

pub fn execute(cpu: &mut Cpu, mnemonic: Mnemonic, operand: Operand) {
    use Mnemonic::*;
    match mnemonic {
        Adc => adc(cpu, cpu.read_operand(operand)),
        Sbc => sbc(cpu, cpu.read_operand(operand)),
        And => {
            cpu.a &= cpu.read_operand(operand);
            cpu.flags.set_zn(cpu.a);
        }
        Ora => {
            cpu.a |= cpu.read_operand(operand);
            cpu.flags.set_zn(cpu.a);
        }
        Eor => {
            cpu.a ^= cpu.read_operand(operand);
            cpu.flags.set_zn(cpu.a);
        }
        Asl => {
            let value = cpu.read_operand(operand);
            let result = asl(cpu, value);
            cpu.write_operand(operand, result);
        }
        Lsr => {
            let value = cpu.read_operand(operand);
            let result = lsr(cpu, value);
            cpu.write_operand(operand, result);
        }
        Rol => {
            let value = cpu.read_operand(operand);
            let result = rol(cpu, value);
            cpu.write_operand(operand, result);
        }
        Ror => {
            let value = cpu.read_operand(operand);
            let result = ror(cpu, value);
            cpu.write_operand(operand, result);
        }
        Cmp => compare(cpu, cpu.a, cpu.read_operand(operand)),
        Cpx => compare(cpu, cpu.x, cpu.read_operand(operand)),
        Cpy => compare(cpu, cpu.y, cpu.read_operand(operand)),
        Dec => {
            let result = cpu.read_operand(operand).wrapping_sub(1);
            cpu.write_operand(operand, result);
            cpu.flags.set_zn(result);
        }
        Dex => {
            cpu.x = cpu.x.wrapping_sub(1);
            cpu.flags.set_zn(cpu.x);
        }
        Dey => {
            cpu.y = cpu.y.wrapping_sub(1);
            cpu.flags.set_zn(cpu.y);
        }
        Inc => {
            let result = cpu.read_operand(operand).wrapping_add(1);
            cpu.write_operand(operand, result);
            cpu.flags.set_zn(result);
        }
        Inx => {
            cpu.x = cpu.x.wrapping_add(1);
            cpu.flags.set_zn(cpu.x);
        }
        Iny => {
            cpu.y = cpu.y.wrapping_add(1);
            cpu.flags.set_zn(cpu.y);
        }
        Bit => {
            let value = cpu.read_operand(operand);
            cpu.flags.z = cpu.a & value == 0;
            cpu.flags.v = value & 0x40 != 0;
            cpu.flags.n = value & 0x80 != 0;
        }
        other => unreachable!("{other:?} is not an arithmetic/logic operation"),
    }
}
