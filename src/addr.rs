//! Memory layout arithmetic.
//!
//! The chip's 128 KiB SRAM holds, in order: the protoline templates
//! (protoline 0 always at address 0), the per-line index table, and the
//! picture lines. Everything here is pure arithmetic over the active mode
//! and standard; [`Layout::derive`] runs once per mode change and the
//! result is cached until the next one.

use crate::{
    mode::{PixelDepth, Standard, VideoMode},
    timing::LineTiming,
};

/// Total SRAM on the chip in bytes (1 Mbit).
pub const MEMORY_BYTES: u32 = 131_072;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Length of one protoline template in 16-bit words.
    pub protoline_words: u16,
    /// Index-table start, in 32-bit units as the INDEXSTART register wants.
    pub index_start_longwords: u16,
    /// Index-table start as a byte address.
    pub index_start_bytes: u32,
    /// First byte of picture-line storage.
    pub picline_start: u32,
    /// Picture-line payload bytes, excluding the anti-artifact margin.
    pub picline_bytes: u16,
    /// Distance between consecutive picture lines in bytes.
    pub pitch: u32,
    /// Byte address of picture line 0.
    pub first_line_addr: u32,
    /// First and one-past-last color clock of the picture area.
    pub start_pix: u16,
    pub end_pix: u16,
    /// First and one-past-last output line of the picture area.
    pub start_line: u16,
    pub end_line: u16,
    /// Pixels per line the color-clock window actually covers; can fall a
    /// couple short of the mode's nominal width when clocks-per-pixel does
    /// not divide it evenly.
    pub pic_width: u16,
    pub extra_bytes: u16,
    pub width: u16,
    pub height: u16,
    pub total_lines: u16,
    /// Highest picture line that fits in memory.
    pub max_line: u16,
}

impl Layout {
    pub fn derive(
        mode: &VideoMode,
        standard: &Standard,
        timing: &LineTiming,
        depth: PixelDepth,
    ) -> Layout {
        let std = standard.timing();
        let total_lines = standard.total_lines();

        let protoline_words = (std.line_us * std.crystal_mhz).round() as u16;
        let proto_area_words = protoline_words * standard.protolines();
        let index_start_longwords = (proto_area_words + 1) / 2;
        let index_start_bytes = u32::from(index_start_longwords) * 4;
        let picline_start = index_start_bytes + u32::from(total_lines) * 3 + 1;

        let cpp = u16::from(mode.clocks_per_pixel);
        let start_pix = timing.blank_end + mode.left;
        let end_pix = start_pix + cpp * mode.width / 8;
        let pic_width = (end_pix - start_pix) * 8 / cpp;
        let picline_bytes = match depth {
            // One byte per pixel plus a terminator byte.
            PixelDepth::Byte => pic_width + 1,
            PixelDepth::Word => pic_width * 2,
        };
        let pitch = u32::from(picline_bytes) + u32::from(mode.extra_bytes);

        let start_line = std.front_porch_lines + mode.top;
        let end_line = start_line + mode.height;

        let layout = Layout {
            protoline_words,
            index_start_longwords,
            index_start_bytes,
            picline_start,
            picline_bytes,
            pitch,
            first_line_addr: picline_start,
            start_pix,
            end_pix,
            start_line,
            end_line,
            pic_width,
            extra_bytes: u16::from(mode.extra_bytes),
            width: mode.width,
            height: mode.height,
            total_lines,
            max_line: ((MEMORY_BYTES - picline_start) / pitch) as u16,
        };
        debug_assert!(layout.pitch >= u32::from(layout.width));
        debug_assert!(layout.picline_start > layout.index_end_bytes());
        layout
    }

    /// One past the last byte of the index table.
    pub fn index_end_bytes(&self) -> u32 {
        self.index_start_bytes + u32::from(self.total_lines) * 3
    }

    /// Word address of protoline `n`. Protoline 0 is at address 0.
    pub fn protoline_word_address(&self, n: u16) -> u16 {
        self.protoline_words * n
    }

    /// Byte address of picture line `line`.
    pub fn picline_byte_address(&self, line: u16) -> u32 {
        self.first_line_addr + self.pitch * u32::from(line)
    }

    /// Byte address of pixel (x, y).
    pub fn pixel_address(&self, x: u16, y: u16) -> u32 {
        self.first_line_addr + self.pitch * u32::from(y) + u32::from(x)
    }

    /// Word address of pixel (x, y) for the 16-bit pixel configuration.
    /// Note the chip's word layout halves the line length and the margin
    /// separately.
    pub fn pixel_word_address(&self, x: u16, y: u16) -> u16 {
        let word_pitch = u32::from(self.picline_bytes / 2 + self.extra_bytes / 2);
        (self.picline_start / 2 + word_pitch * u32::from(y) + u32::from(x)) as u16
    }
}
