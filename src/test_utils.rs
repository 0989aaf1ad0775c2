//! A behavioral model of the chip for host-side tests.
//!
//! `TestBus` decodes the same SPI command stream the hardware does: SRAM
//! writes with auto-increment, the register file, the scan-line counter
//! and a cycle-accurate-enough block mover. Tests read the results
//! straight out of `mem` or from the transaction logs.

use crate::{
    addr::MEMORY_BYTES,
    context::{Bus, Timing},
    spi,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEntry {
    /// A completed select-scoped transaction, by opcode.
    Op(u8),
    /// One read of the MVBLK busy line.
    BusyPoll,
}

pub struct TestBus {
    pub mem: Vec<u8>,

    pub status: u8,
    pub multi_ic: u8,
    pub picstart: u16,
    pub picend: u16,
    pub linelen: u16,
    pub vdctrl1: u16,
    pub vdctrl2: u16,
    pub index_start: u16,
    pub gpio: u16,
    pub program: u32,

    bm_src: u32,
    bm_dst: u32,
    bm_reverse: bool,
    bm_skip: u16,
    bm_width: u8,
    bm_height: u8,

    /// Completed transactions, raw bytes.
    pub frames: Vec<Vec<u8>>,
    /// Transaction opcodes interleaved with busy polls, for ordering
    /// assertions.
    pub log: Vec<LogEntry>,
    /// Block moves executed.
    pub moves: u32,

    /// Busy polls answered "busy" after each start pulse.
    pub busy_after_start: u32,
    /// Simulate a hung engine.
    pub busy_forever: bool,
    busy_countdown: u32,

    cur_line: u16,
    cycle: u32,
    cycles_per_line: u32,

    selected: bool,
    frame: Vec<u8>,
}

impl Default for TestBus {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBus {
    pub fn new() -> TestBus {
        TestBus {
            mem: vec![0; MEMORY_BYTES as usize],
            status: 0,
            multi_ic: 0,
            picstart: 0,
            picend: 0,
            linelen: 0,
            vdctrl1: 0,
            vdctrl2: 0,
            index_start: 0,
            gpio: 0,
            program: 0,
            bm_src: 0,
            bm_dst: 0,
            bm_reverse: false,
            bm_skip: 0,
            bm_width: 0,
            bm_height: 0,
            frames: Vec::new(),
            log: Vec::new(),
            moves: 0,
            busy_after_start: 2,
            busy_forever: false,
            busy_countdown: 0,
            cur_line: 0,
            cycle: 0,
            cycles_per_line: 600,
            selected: false,
            frame: Vec::new(),
        }
    }

    pub fn set_current_line(&mut self, line: u16) {
        self.cur_line = line;
    }

    fn total_lines(&self) -> u16 {
        match self.vdctrl2 & 0x03ff {
            0 => 262,
            n => n,
        }
    }

    fn advance_line(&mut self) {
        self.cur_line = (self.cur_line + 1) % self.total_lines();
        self.cycle = self.cycle.wrapping_add(self.cycles_per_line);
    }

    fn run_block_move(&mut self) {
        let rows = usize::from(self.bm_height) + 1;
        let width = usize::from(self.bm_width);
        let step: i64 = if self.bm_reverse { -1 } else { 1 };
        let mut src = i64::from(self.bm_src);
        let mut dst = i64::from(self.bm_dst);
        let wrap = |a: i64| a.rem_euclid(i64::from(MEMORY_BYTES)) as usize;
        for _ in 0..rows {
            for _ in 0..width {
                self.mem[wrap(dst)] = self.mem[wrap(src)];
                src += step;
                dst += step;
            }
            src += i64::from(self.bm_skip) * step;
            dst += i64::from(self.bm_skip) * step;
        }
        self.moves += 1;
        self.busy_countdown = self.busy_after_start;
    }

    fn finish_frame(&mut self) {
        let frame = std::mem::take(&mut self.frame);
        let (&op, rest) = frame.split_first().expect("empty transaction");
        match op {
            spi::WRITE_SRAM => {
                assert!(rest.len() >= 4, "short SRAM write");
                let mut addr = ((usize::from(rest[0]) << 16)
                    | (usize::from(rest[1]) << 8)
                    | usize::from(rest[2]))
                    % MEMORY_BYTES as usize;
                for &b in &rest[3..] {
                    self.mem[addr] = b;
                    addr = (addr + 1) % MEMORY_BYTES as usize;
                }
            }
            spi::PROGRAM => {
                self.program = u32::from_be_bytes([rest[0], rest[1], rest[2], rest[3]]);
            }
            spi::BLOCKMVC1 => {
                assert_eq!(rest.len(), 5, "BLOCKMVC1 wants 5 operand bytes");
                self.bm_src = (u32::from(rest[0]) << 8 | u32::from(rest[1])) << 1;
                self.bm_dst = (u32::from(rest[2]) << 8 | u32::from(rest[3])) << 1;
                let lsb = rest[4];
                self.bm_reverse = lsb & 0x01 != 0;
                self.bm_dst |= u32::from(lsb >> 1) & 1;
                self.bm_src |= u32::from(lsb >> 2) & 1;
            }
            spi::BLOCKMVC2 => {
                assert_eq!(rest.len(), 4, "BLOCKMVC2 wants 4 operand bytes");
                self.bm_skip = u16::from(rest[0]) << 8 | u16::from(rest[1]);
                self.bm_width = rest[2];
                self.bm_height = rest[3];
            }
            spi::BLOCKMV_S => self.run_block_move(),
            spi::WRITE_STATUS => self.status = rest[0],
            spi::WRITE_MULTIIC => self.multi_ic = rest[0],
            spi::CURLINE => {} // replied inline
            _ => {
                assert_eq!(rest.len(), 2, "register write wants 2 data bytes");
                let data = u16::from(rest[0]) << 8 | u16::from(rest[1]);
                match op {
                    spi::PICSTART => self.picstart = data,
                    spi::PICEND => self.picend = data,
                    spi::LINELEN => self.linelen = data,
                    spi::VDCTRL1 => self.vdctrl1 = data,
                    spi::INDEXSTART => self.index_start = data,
                    spi::VDCTRL2 => self.vdctrl2 = data,
                    spi::WRITE_GPIO_CTRL => self.gpio = data,
                    _ => panic!("unexpected opcode {op:#04x}"),
                }
            }
        }
        self.log.push(LogEntry::Op(op));
        self.frames.push(frame);
    }
}

impl Bus for TestBus {
    fn select(&mut self) {
        assert!(!self.selected, "nested chip select");
        self.selected = true;
    }

    fn deselect(&mut self) {
        assert!(self.selected, "deselect without select");
        self.selected = false;
        self.finish_frame();
    }

    fn transfer(&mut self, data: u8) -> u8 {
        assert!(self.selected, "transfer outside chip select");
        self.frame.push(data);
        if self.frame[0] == spi::CURLINE {
            match self.frame.len() {
                2 => return (self.cur_line >> 8) as u8,
                3 => {
                    let lo = self.cur_line as u8;
                    self.advance_line();
                    return lo;
                }
                _ => {}
            }
        }
        0
    }

    fn blit_busy(&mut self) -> bool {
        self.log.push(LogEntry::BusyPoll);
        if self.busy_forever {
            return true;
        }
        if self.busy_countdown > 0 {
            self.busy_countdown -= 1;
            true
        } else {
            false
        }
    }
}

impl Timing for TestBus {
    fn cycles(&mut self) -> u32 {
        self.cycle = self.cycle.wrapping_add(3);
        self.cycle
    }

    fn delay_ms(&mut self, _ms: u32) {}
}
