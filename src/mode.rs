//! Video modes and broadcast-standard parameters.
//!
//! Every derived clock count and memory address in the driver is a pure
//! function of one [`VideoMode`] plus one [`Standard`]; both live here as
//! fixed tables so a mode change is just an index into them.

/// One entry of the mode tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoMode {
    /// Visible pixels per line.
    pub width: u16,
    /// Visible lines per field.
    pub height: u16,
    /// Blank lines above the picture area.
    pub top: u16,
    /// Color clocks between blanking end and the first pixel.
    pub left: u16,
    /// PLL clocks per pixel.
    pub clocks_per_pixel: u8,
    /// Extra bytes appended to each picture line to keep the last pixels
    /// from bleeding into the protoline area.
    pub extra_bytes: u8,
    /// Approximate pixel clock, informational only.
    pub pixel_clock_hz: u32,
}

pub const MODES_NTSC: [VideoMode; 10] = [
    // Maximum usable width without overscan; wider than strictly needed so
    // the geometry matches the PAL table entry.
    VideoMode { width: 460, height: 224, top: 9, left: 10, clocks_per_pixel: 3, extra_bytes: 9, pixel_clock_hz: 11_000_000 },
    // A bit smaller, fits better on some TVs.
    VideoMode { width: 436, height: 216, top: 13, left: 14, clocks_per_pixel: 3, extra_bytes: 9, pixel_clock_hz: 11_000_000 },
    VideoMode { width: 320, height: 216, top: 11, left: 15, clocks_per_pixel: 4, extra_bytes: 9, pixel_clock_hz: 11_000_000 },
    // (M)CGA, Commodore et al.
    VideoMode { width: 320, height: 200, top: 20, left: 15, clocks_per_pixel: 4, extra_bytes: 9, pixel_clock_hz: 14_000_000 },
    // SNES
    VideoMode { width: 256, height: 224, top: 9, left: 15, clocks_per_pixel: 5, extra_bytes: 9, pixel_clock_hz: 15_000_000 },
    // MSX, Spectrum, NDS
    VideoMode { width: 256, height: 192, top: 24, left: 15, clocks_per_pixel: 5, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    // Commodore/PCjr/CPC multi-color
    VideoMode { width: 160, height: 200, top: 20, left: 15, clocks_per_pixel: 8, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    // PCE overscan
    VideoMode { width: 352, height: 240, top: 0, left: 8, clocks_per_pixel: 4, extra_bytes: 9, pixel_clock_hz: 11_000_000 },
    VideoMode { width: 282, height: 240, top: 0, left: 8, clocks_per_pixel: 5, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    // Overscan, for compatibility with the maximum PAL mode.
    VideoMode { width: 508, height: 240, top: 0, left: 0, clocks_per_pixel: 3, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
];

pub const MODES_PAL: [VideoMode; 10] = [
    // Much smaller than the PAL screen, but compatible with NTSC.
    VideoMode { width: 460, height: 224, top: 32, left: 29, clocks_per_pixel: 3, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    VideoMode { width: 436, height: 216, top: 33, left: 29, clocks_per_pixel: 3, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    VideoMode { width: 320, height: 216, top: 33, left: 15, clocks_per_pixel: 5, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    VideoMode { width: 320, height: 200, top: 41, left: 15, clocks_per_pixel: 5, extra_bytes: 8, pixel_clock_hz: 14_000_000 },
    VideoMode { width: 256, height: 224, top: 32, left: 20, clocks_per_pixel: 6, extra_bytes: 8, pixel_clock_hz: 15_000_000 },
    VideoMode { width: 256, height: 192, top: 42, left: 20, clocks_per_pixel: 6, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    VideoMode { width: 160, height: 200, top: 41, left: 15, clocks_per_pixel: 10, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    // "Overscan" modes are underscan on PAL.
    VideoMode { width: 352, height: 240, top: 24, left: 8, clocks_per_pixel: 5, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    VideoMode { width: 282, height: 240, top: 24, left: 8, clocks_per_pixel: 6, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
    // Maximum PAL; the timing would allow more but memory runs out. The
    // width avoids subcarrier artifacts rather than lining up with fonts.
    VideoMode { width: 508, height: 240, top: 24, left: 20, clocks_per_pixel: 3, extra_bytes: 8, pixel_clock_hz: 11_000_000 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum System {
    #[default]
    Ntsc,
    Pal,
}

impl System {
    pub fn is_pal(self) -> bool {
        matches!(self, System::Pal)
    }
}

/// Broadcast constants for one color system. All durations in microseconds,
/// crystal in MHz; observe the full published precision, a one-clock error
/// in anything derived from these visibly desyncs the signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardTiming {
    pub crystal_mhz: f64,
    pub line_us: f64,
    pub sync_us: f64,
    pub short_sync_us: f64,
    pub long_sync_us: f64,
    pub burst_us: f64,
    pub burst_dur_us: f64,
    pub blank_end_us: f64,
    pub front_porch_us: f64,
    pub total_lines_progressive: u16,
    pub total_lines_interlace: u16,
    /// First line of the second field's vsync region.
    pub field1_start: u16,
    /// Blank lines between the vsync region and the picture area.
    pub front_porch_lines: u16,
    /// Line count programmed into VDCTRL2 for a progressive frame. This is
    /// the one value that holds a stable picture on real displays; the
    /// nominal count does not.
    pub register_line_count: u16,
}

pub const NTSC: StandardTiming = StandardTiming {
    crystal_mhz: 3.579545,
    line_us: 63.5555,
    sync_us: 4.7,
    short_sync_us: 2.542,
    long_sync_us: 27.33275,
    burst_us: 5.3,
    burst_dur_us: 2.67,
    blank_end_us: 9.155,
    front_porch_us: 61.8105,
    total_lines_progressive: 262,
    total_lines_interlace: 525,
    field1_start: 261,
    front_porch_lines: 20,
    register_line_count: 263,
};

pub const PAL: StandardTiming = StandardTiming {
    crystal_mhz: 4.43361875,
    line_us: 64.0,
    sync_us: 4.7,
    short_sync_us: 2.35,
    long_sync_us: 27.3,
    burst_us: 5.6,
    burst_dur_us: 2.25,
    blank_end_us: 10.5,
    front_porch_us: 62.5,
    total_lines_progressive: 313,
    total_lines_interlace: 625,
    field1_start: 310,
    front_porch_lines: 22,
    register_line_count: 314,
};

/// The active (system, scan) pair; selects one of four constant sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Standard {
    pub system: System,
    pub interlace: bool,
}

impl Standard {
    pub fn timing(&self) -> &'static StandardTiming {
        match self.system {
            System::Ntsc => &NTSC,
            System::Pal => &PAL,
        }
    }

    pub fn modes(&self) -> &'static [VideoMode; 10] {
        match self.system {
            System::Ntsc => &MODES_NTSC,
            System::Pal => &MODES_PAL,
        }
    }

    pub fn total_lines(&self) -> u16 {
        let t = self.timing();
        if self.interlace {
            t.total_lines_interlace
        } else {
            t.total_lines_progressive
        }
    }

    /// Number of protoline templates reserved in SRAM.
    pub fn protolines(&self) -> u16 {
        if self.interlace {
            8
        } else {
            4
        }
    }
}

/// Bits stored per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelDepth {
    /// 2-2-4 UVY packed in one byte.
    #[default]
    Byte,
    /// 4-4-8 UVY in one 16-bit word.
    Word,
}
