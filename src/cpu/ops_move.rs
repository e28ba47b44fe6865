//! Loads, stores, register transfers, and stack push/pull.

use super::{Cpu, Operand};
use crate::opcodes::Mnemonic;

pub fn execute(cpu: &mut Cpu, mnemonic: Mnemonic, operand: Operand) {
    use Mnemonic::*;
    match mnemonic {
        Lda => {
            cpu.a = cpu.read_operand(operand);
            cpu.flags.set_zn(cpu.a);
        }
        Ldx => {
            cpu.x = cpu.read_operand(operand);
            cpu.flags.set_zn(cpu.x);
        }
        Ldy => {
            cpu.y = cpu.read_operand(operand);
            cpu.flags.set_zn(cpu.y);
        }
        Sta => cpu.write_operand(operand, cpu.a),
        Stx => cpu.write_operand(operand, cpu.x),
        Sty => cpu.write_operand(operand, cpu.y),
        Tax => {
            cpu.x = cpu.a;
            cpu.flags.set_zn(cpu.x);
        }
        Tay => {
            cpu.y = cpu.a;
            cpu.flags.set_zn(cpu.y);
        }
        Txa => {
            cpu.a = cpu.x;
            cpu.flags.set_zn(cpu.a);
        }
        Tya => {
            cpu.a = cpu.y;
            cpu.flags.set_zn(cpu.a);
        }
        Tsx => {
            cpu.x = cpu.s;
            cpu.flags.set_zn(cpu.x);
        }
        // Stack pointer is not a flags-affecting register.
        Txs => cpu.s = cpu.x,
        Pha => cpu.push_u8(cpu.a),
        Php => {
            let packed = cpu.flags.pack_with_break();
            cpu.push_u8(packed);
        }
        Pla => {
            cpu.a = cpu.pop_u8();
            cpu.flags.set_zn(cpu.a);
        }
        Plp => {
            let byte = cpu.pop_u8();
            cpu.flags = super::flags::Flags::unpack(byte);
        }
        other => unreachable!("{other:?} is not a move/stack operation"),
    }
}
