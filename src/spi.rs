//! Command encoding for the chip's SPI protocol.
//!
//! Each helper performs exactly one select-scoped transaction. There is no
//! acknowledgement wire, so writes cannot fail; correctness rests on the
//! electrical link.

use crate::context::Bus;

pub const WRITE_STATUS: u8 = 0x01;
pub const WRITE_SRAM: u8 = 0x02;
pub const PICSTART: u8 = 0x28;
pub const PICEND: u8 = 0x29;
pub const LINELEN: u8 = 0x2a;
pub const VDCTRL1: u8 = 0x2b;
pub const INDEXSTART: u8 = 0x2c;
pub const VDCTRL2: u8 = 0x2d;
pub const PROGRAM: u8 = 0x30;
pub const BLOCKMVC1: u8 = 0x34;
pub const BLOCKMVC2: u8 = 0x35;
pub const BLOCKMV_S: u8 = 0x36;
pub const CURLINE: u8 = 0x53;
pub const WRITE_GPIO_CTRL: u8 = 0x82;
pub const WRITE_MULTIIC: u8 = 0xb8;

/// Write a 16-bit register.
pub fn write_register(bus: &mut impl Bus, opcode: u8, data: u16) {
    bus.select();
    bus.transfer24((u32::from(opcode) << 16) | u32::from(data));
    bus.deselect();
}

/// Read a 16-bit register.
pub fn read_register(bus: &mut impl Bus, opcode: u8) -> u16 {
    bus.select();
    bus.transfer(opcode);
    let result = bus.transfer16(0);
    bus.deselect();
    result
}

/// Write an 8-bit register.
pub fn write_byte_register(bus: &mut impl Bus, opcode: u8, data: u8) {
    bus.select();
    bus.transfer16((u16::from(opcode) << 8) | u16::from(data));
    bus.deselect();
}

/// Write the four pattern-generator microcode ops.
pub fn write_program(bus: &mut impl Bus, data1: u16, data2: u16) {
    bus.select();
    bus.transfer(PROGRAM);
    bus.transfer32((u32::from(data1) << 16) | u32::from(data2));
    bus.deselect();
}

/// Write one byte of SRAM.
pub fn write_byte(bus: &mut impl Bus, address: u32, data: u8) {
    bus.select();
    bus.transfer32((u32::from(WRITE_SRAM) << 24) | (address & 0x00ff_ffff));
    bus.transfer(data);
    bus.deselect();
}

/// Write one 16-bit word of SRAM at a word address.
pub fn write_word(bus: &mut impl Bus, word_address: u16, data: u16) {
    let address = u32::from(word_address) << 1;
    bus.select();
    bus.transfer32((u32::from(WRITE_SRAM) << 24) | (address & 0x00ff_ffff));
    bus.transfer16(data);
    bus.deselect();
}

/// Program the block mover's source/destination word addresses and its
/// control LSB (direction, odd-address bits, lowpass filter).
pub fn write_block_move_ctrl(bus: &mut impl Bus, src: u16, dst: u16, lsb: u8) {
    let req = [
        BLOCKMVC1,
        (src >> 8) as u8,
        src as u8,
        (dst >> 8) as u8,
        dst as u8,
        lsb,
    ];
    bus.select();
    for b in req {
        bus.transfer(b);
    }
    bus.deselect();
}

/// Program the block mover's per-row skip, width and row count.
pub fn write_block_move_ctrl2(bus: &mut impl Bus, skip: u16, width: u8, height: u8) {
    let req = [BLOCKMVC2, (skip >> 8) as u8, skip as u8, width, height];
    bus.select();
    for b in req {
        bus.transfer(b);
    }
    bus.deselect();
}

/// Pulse the block-move start command.
pub fn start_block_move(bus: &mut impl Bus) {
    bus.select();
    bus.transfer(BLOCKMV_S);
    bus.deselect();
}
