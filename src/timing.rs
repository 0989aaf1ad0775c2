//! Waveform timing synthesis.
//!
//! The chip replays "protolines" (template lines of 16-bit waveform words,
//! format `VVVVUUUUYYYYYYYY`) for every non-picture line, and a per-line
//! index table decides which template or picture line each of the frame's
//! output lines uses. This module derives the clock-exact counts from the
//! active standard and writes both structures into SRAM.

use log::trace;
use modular_bitfield::prelude::*;

use crate::{
    addr::Layout,
    context::Bus,
    mode::{Standard, StandardTiming, System},
    spi,
};

/// Sync tip. One LSB of Y is 5.1724 mV.
pub const SYNC_LEVEL: u16 = 0x0000;
/// 285 mV into a 75 ohm load.
pub const BLANK_LEVEL: u16 = 0x0066;
/// In protolines Y=0 sits at sync level, so black is the blanking value;
/// in picture data the hardware adds the blanking offset itself.
pub const BLACK_LEVEL: u16 = 0x0066;
/// Burst amplitude; the colorspace's burst vector goes into the high byte.
pub const BURST_LEVEL: u16 = 0x0066;
pub const WHITE_LEVEL: u16 = 0x00ff;

/// The first 10 PLL clocks of every line are eaten by pipeline setup and
/// are not part of the programmable counters, so offsets measured from the
/// line start come up 10/8 of a color clock short.
const PIPELINE_CORRECTION: f64 = 10.0 / 8.0;

fn clocks(us: f64, crystal_mhz: f64, correction: f64) -> u16 {
    (us * crystal_mhz - correction).round() as u16
}

/// Clock counts for one scan line, derived from the active standard.
/// Recomputed on every mode or standard change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineTiming {
    /// Complete line length in PLL clocks, for the LINELEN register.
    pub pll_clocks_per_line: u16,
    /// Complete line length in color clocks.
    pub color_clocks_per_line: u16,
    pub color_clocks_half_line: u16,
    /// Normal horizontal sync, 4.7 us.
    pub sync: u16,
    /// Equalizing pulse at the line start / at mid-line.
    pub short_sync: u16,
    pub short_sync_mid: u16,
    /// Vertical sync pulse at the line start / at mid-line.
    pub long_sync: u16,
    pub long_sync_mid: u16,
    /// Color-burst start offset and duration.
    pub burst: u16,
    pub burst_dur: u16,
    /// End of blanking, start of the black border area.
    pub blank_end: u16,
    /// Start of the front porch, end of the black border area.
    pub front_porch: u16,
}

impl LineTiming {
    pub fn derive(std: &StandardTiming) -> LineTiming {
        let xtal = std.crystal_mhz;
        let start = |us: f64| clocks(us, xtal, PIPELINE_CORRECTION);
        let mid = |us: f64| clocks(us, xtal, 0.0);
        LineTiming {
            pll_clocks_per_line: (std.line_us * xtal * 8.0).round() as u16 - 10,
            color_clocks_per_line: start(std.line_us),
            color_clocks_half_line: start(std.line_us / 2.0),
            sync: start(std.sync_us),
            short_sync: start(std.short_sync_us),
            short_sync_mid: mid(std.short_sync_us),
            long_sync: start(std.long_sync_us),
            long_sync_mid: mid(std.long_sync_us),
            burst: start(std.burst_us),
            burst_dur: mid(std.burst_dur_us),
            blank_end: start(std.blank_end_us),
            front_porch: start(std.front_porch_us),
        }
    }

    fn start_pulse(&self, p: Pulse) -> u16 {
        match p {
            Pulse::Normal => self.sync,
            Pulse::Short => self.short_sync,
            Pulse::Long => self.long_sync,
        }
    }

    fn mid_pulse(&self, p: Pulse) -> u16 {
        match p {
            Pulse::Normal => self.sync,
            Pulse::Short => self.short_sync_mid,
            Pulse::Long => self.long_sync_mid,
        }
    }
}

/// One entry of the line-index table, three bytes per output line.
///
/// Protoline entries leave everything but the word address zero; picture
/// entries carry the protoline id, the picture byte address's LSB and its
/// word address.
#[bitfield(bits = 24)]
pub struct LineIndex {
    pub proto: B4,
    #[skip]
    __: B3,
    pub odd_byte: bool,
    pub word_addr: B16,
}

fn write_index(bus: &mut impl Bus, layout: &Layout, line: u16, entry: LineIndex) {
    let mut addr = layout.index_start_bytes + u32::from(line) * 3;
    for b in entry.into_bytes() {
        spi::write_byte(bus, addr, b);
        addr += 1;
    }
}

/// Point output line `line` at a protoline template.
pub fn set_line_index(bus: &mut impl Bus, layout: &Layout, line: u16, word_address: u16) {
    write_index(bus, layout, line, LineIndex::new().with_word_addr(word_address));
}

/// Point output line `line` at picture data, replayed around protoline
/// `proto`'s sync and blanking.
pub fn set_pic_index(bus: &mut impl Bus, layout: &Layout, line: u16, byte_address: u32, proto: u8) {
    let entry = LineIndex::new()
        .with_proto(proto)
        .with_odd_byte(byte_address & 1 != 0)
        .with_word_addr((byte_address >> 1) as u16);
    write_index(bus, layout, line, entry);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Pulse {
    /// Normal horizontal sync.
    Normal,
    /// Pre/post-equalizing pulse.
    Short,
    /// Vertical sync pulse.
    Long,
}

/// Declarative shape of one protoline template. Overlays are applied in
/// field order onto a line of blanking level.
struct ProtoShape {
    /// Black border level from blanking end to the front porch.
    black_body: bool,
    start: Option<Pulse>,
    burst: bool,
    mid: Option<Pulse>,
    /// Re-blank everything after the mid-line pulse.
    blank_tail: bool,
}

const fn shape(
    black_body: bool,
    start: Option<Pulse>,
    burst: bool,
    mid: Option<Pulse>,
    blank_tail: bool,
) -> ProtoShape {
    ProtoShape { black_body, start, burst, mid, blank_tail }
}

/// Interlaced template set.
///
/// 0: the normal visible line; 1: like 0 but ending in a short sync (the
/// last full line of the frame); 2: sync and burst only, used between the
/// vsync region and the picture; 3: short+short vsync; 4: long+long vsync;
/// 5: long+short; 6: short+long; 7: lone short sync.
const SHAPES_INTERLACE: [ProtoShape; 8] = [
    shape(true, Some(Pulse::Normal), true, None, false),
    shape(true, Some(Pulse::Normal), true, Some(Pulse::Short), true),
    shape(true, Some(Pulse::Normal), true, None, false),
    shape(false, Some(Pulse::Short), false, Some(Pulse::Short), false),
    shape(false, Some(Pulse::Long), false, Some(Pulse::Long), false),
    shape(false, Some(Pulse::Long), false, Some(Pulse::Short), false),
    shape(false, Some(Pulse::Short), false, Some(Pulse::Long), false),
    shape(false, Some(Pulse::Short), false, None, false),
];

/// Progressive template set: normal line, short+short, long+long,
/// long+short. The burst on template 0 is painted by the colorspace
/// programming, not here.
const SHAPES_PROGRESSIVE: [ProtoShape; 4] = [
    shape(true, Some(Pulse::Normal), false, None, false),
    shape(false, Some(Pulse::Short), false, Some(Pulse::Short), false),
    shape(false, Some(Pulse::Long), false, Some(Pulse::Long), false),
    shape(false, Some(Pulse::Long), false, Some(Pulse::Short), false),
];

/// Fill every protoline template for the active standard.
pub fn write_protolines(bus: &mut impl Bus, standard: &Standard, t: &LineTiming, layout: &Layout) {
    let shapes: &[ProtoShape] = if standard.interlace {
        &SHAPES_INTERLACE
    } else {
        &SHAPES_PROGRESSIVE
    };
    for (n, s) in shapes.iter().enumerate() {
        let base = layout.protoline_word_address(n as u16);
        trace!("protoline {n} at word {base}");
        for i in 0..=t.color_clocks_per_line {
            spi::write_word(bus, base + i, BLANK_LEVEL);
        }
        if s.black_body {
            for i in t.blank_end..t.front_porch {
                spi::write_word(bus, base + i, BLACK_LEVEL);
            }
        }
        if let Some(p) = s.start {
            for i in 0..t.start_pulse(p) {
                spi::write_word(bus, base + i, SYNC_LEVEL);
            }
        }
        if s.burst {
            for i in 0..t.burst_dur {
                spi::write_word(bus, base + t.burst + i, BURST_LEVEL);
            }
        }
        if let Some(p) = s.mid {
            let half = t.color_clocks_half_line;
            for i in 0..t.mid_pulse(p) {
                spi::write_word(bus, base + half + i, SYNC_LEVEL);
            }
            if s.blank_tail {
                for i in half + t.mid_pulse(p)..t.color_clocks_per_line {
                    spi::write_word(bus, base + i, BLANK_LEVEL);
                }
            }
        }
    }
}

/// A run of output lines assigned to one protoline template.
struct Span {
    start: u16,
    end: u16,
    proto: u16,
}

const fn span(start: u16, end: u16, proto: u16) -> Span {
    Span { start, end, proto }
}

/// NTSC interlaced vsync structure: three equalizing, three vertical sync,
/// three equalizing lines open the frame; the second field's serration
/// straddles line 261 with half-line templates; the remaining blank lines
/// up to the front porch carry sync and burst only.
const VSYNC_NTSC_INTERLACE: &[Span] = &[
    span(0, 3, 3),
    span(3, 6, 4),
    span(6, 9, 3),
    span(9, 20, 2),
    span(261, 262, 1),
    span(262, 264, 3),
    span(264, 265, 6),
    span(265, 267, 4),
    span(267, 268, 5),
    span(268, 270, 3),
    span(270, 271, 7),
    span(271, 281, 2),
];

/// PAL interlaced vsync structure, lines 623-625 close the frame.
const VSYNC_PAL_INTERLACE: &[Span] = &[
    span(0, 2, 4),
    span(2, 3, 5),
    span(3, 5, 3),
    span(5, 22, 2),
    span(310, 312, 3),
    span(312, 313, 6),
    span(313, 315, 4),
    span(315, 317, 3),
    span(317, 318, 7),
    span(318, 334, 2),
    span(621, 622, 1),
    span(622, 625, 3),
];

const VSYNC_NTSC_PROGRESSIVE: &[Span] = &[span(0, 3, 1), span(3, 6, 2), span(6, 9, 1)];

const VSYNC_PAL_PROGRESSIVE: &[Span] =
    &[span(0, 2, 2), span(2, 3, 3), span(3, 5, 1), span(310, 313, 1)];

fn vsync_spans(standard: &Standard) -> &'static [Span] {
    match (standard.system, standard.interlace) {
        (System::Ntsc, true) => VSYNC_NTSC_INTERLACE,
        (System::Ntsc, false) => VSYNC_NTSC_PROGRESSIVE,
        (System::Pal, true) => VSYNC_PAL_INTERLACE,
        (System::Pal, false) => VSYNC_PAL_PROGRESSIVE,
    }
}

/// Assign the vsync-region lines of the index table. Every line not named
/// here keeps the protoline-0 assignment written beforehand.
pub fn write_vsync_lines(bus: &mut impl Bus, standard: &Standard, layout: &Layout) {
    for s in vsync_spans(standard) {
        for line in s.start..s.end {
            set_line_index(bus, layout, line, layout.protoline_word_address(s.proto));
        }
    }
}

/// Point the picture-region lines at their pixel storage. Interlaced
/// frames show the same picture box in both fields.
pub fn write_picture_lines(bus: &mut impl Bus, standard: &Standard, layout: &Layout) {
    for i in 0..layout.height {
        let addr = layout.picline_byte_address(i);
        set_pic_index(bus, layout, layout.start_line + i, addr, 0);
        if standard.interlace {
            let second = layout.start_line + standard.timing().field1_start + i;
            set_pic_index(bus, layout, second, addr, 0);
        }
    }
}

/// Pattern-generator source channel.
#[derive(BitfieldSpecifier, Clone, Copy)]
#[bits = 2]
pub enum OpSource {
    PickA = 0,
    PickB = 1,
    PickY = 2,
    PickNothing = 3,
}

/// One pattern-generator microcode op: which channel to feed, how many
/// pixel bits to take and how far to shift them.
#[bitfield(bits = 8)]
pub struct PatternOp {
    pub shift: B3,
    pub bits: B3,
    pub source: OpSource,
}

fn op(source: OpSource, bits: u8, shift: u8) -> u8 {
    PatternOp::new()
        .with_source(source)
        .with_bits(bits - 1)
        .with_shift(shift)
        .into_bytes()[0]
}

/// Colorspace of the picture data, named for the luma width of the pixel
/// byte. [`ColorSpace::Y44`] (2-2-4 UVY) is what the palette encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// N-0C-B62-A63-Y33-N10 and its PAL equivalent.
    Y33,
    /// N-0D-B22-A22-Y44-N10 and its PAL equivalent.
    #[default]
    Y44,
}

pub struct ColorProgram {
    pub ops: [u8; 4],
    /// Burst phase vector, written into the high byte of the protoline-0
    /// burst words.
    pub burst_vector: u8,
}

pub fn color_program(system: System, cs: ColorSpace) -> ColorProgram {
    use OpSource::*;
    let nop = op(PickNothing, 1, 0);
    match (system, cs) {
        (System::Ntsc, ColorSpace::Y33) => ColorProgram {
            ops: [op(PickB, 6, 2), op(PickA, 6, 3), op(PickY, 3, 3), nop],
            burst_vector: 0x0c,
        },
        (System::Ntsc, ColorSpace::Y44) => ColorProgram {
            ops: [op(PickB, 2, 2), op(PickA, 2, 2), op(PickY, 4, 4), nop],
            burst_vector: 0x0d,
        },
        (System::Pal, ColorSpace::Y33) => ColorProgram {
            ops: [op(PickA, 6, 2), op(PickB, 6, 3), op(PickY, 3, 3), nop],
            burst_vector: 0xdd,
        },
        (System::Pal, ColorSpace::Y44) => ColorProgram {
            ops: [op(PickA, 2, 2), op(PickB, 2, 2), op(PickY, 4, 4), nop],
            burst_vector: 0xee,
        },
    }
}
