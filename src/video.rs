//! The driver handle.
//!
//! One [`Video`] mirrors the state of one chip: the active mode and
//! standard, the derived memory layout, the blitter direction and the
//! vsync calibration. All hardware access borrows the caller's
//! [`Context`](crate::context::Context) per call, so several chips on one
//! bus are just several `Video` values.

use log::debug;
use modular_bitfield::prelude::*;

use crate::{
    addr::Layout,
    blit::{Blitter, MoveDir},
    color,
    context::Context,
    mode::{PixelDepth, Standard, VideoMode},
    spi,
    timing::{self, ColorSpace, LineTiming, BLACK_LEVEL, BURST_LEVEL},
    Error,
};

/// VDCTRL1: clocking configuration.
#[bitfield(bits = 16)]
#[derive(Default)]
struct VideoCtrl1 {
    uv_skip: bool,
    #[skip]
    __: B2,
    dac_div: bool,
    #[skip]
    __: B8,
    pll_enable: bool,
    select_pll_clock: bool,
    use_uv_table: bool,
    direct_dac: bool,
}

/// VDCTRL2: frame geometry and the video-enable gate.
#[bitfield(bits = 16)]
#[derive(Default)]
struct VideoCtrl2 {
    line_count: B10,
    pixel_width: B4,
    pal: bool,
    enable_video: bool,
}

fn reg16(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

/// Scan line sampled by the calibration loop.
const CALIBRATION_LINE: u16 = 100;
/// Two consecutive frame measurements closer than this count as agreeing;
/// absorbs chip clock jitter right after power-up.
const CALIBRATION_TOLERANCE: u32 = 80_000;
/// Lines past the visible area where the frame-pacing notification goes.
const SYNC_LINE_MARGIN: u16 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Calibration {
    #[default]
    Uncalibrated,
    Calibrating,
    Calibrated,
}

/// Construction-time options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub standard: Standard,
    pub depth: PixelDepth,
    /// PAL luma lowpass filter, carried into every block-move control
    /// word.
    pub lowpass: bool,
}

pub struct Video {
    standard: Standard,
    depth: PixelDepth,
    mode: VideoMode,
    timing: LineTiming,
    layout: Layout,
    blitter: Blitter,
    sync_line: u16,
    vsync_enabled: bool,
    line_adjust: i16,
    cycles_per_frame: u32,
    calibration: Calibration,
}

impl Video {
    pub fn new(config: Config) -> Video {
        let mode = config.standard.modes()[0];
        let timing = LineTiming::derive(config.standard.timing());
        let layout = Layout::derive(&mode, &config.standard, &timing, config.depth);
        Video {
            standard: config.standard,
            depth: config.depth,
            mode,
            timing,
            layout,
            blitter: Blitter::new(config.lowpass),
            sync_line: 0,
            vsync_enabled: false,
            line_adjust: 0,
            cycles_per_frame: 0,
            calibration: Calibration::Uncalibrated,
        }
    }

    /// Bring the chip up in mode 0 of the configured standard.
    pub fn begin(&mut self, ctx: &mut impl Context) -> Result<(), Error> {
        self.vsync_enabled = false;
        self.line_adjust = 0;
        spi::write_register(ctx, spi::WRITE_GPIO_CTRL, 0x000f);
        self.set_mode(ctx, 0)
    }

    /// Select a mode by index, rebuild every timing table and recalibrate.
    pub fn set_mode(&mut self, ctx: &mut impl Context, index: u8) -> Result<(), Error> {
        let modes = self.standard.modes();
        let Some(&mode) = modes.get(usize::from(index)) else {
            return Err(Error::InvalidMode { index, len: modes.len() });
        };
        self.set_sync_line(0);
        self.mode = mode;
        self.timing = LineTiming::derive(self.standard.timing());
        self.layout = Layout::derive(&mode, &self.standard, &self.timing, self.depth);
        debug!(
            "mode {index}: {}x{} pitch {} picture lines at {:#x}",
            mode.width, mode.height, self.layout.pitch, self.layout.first_line_addr
        );

        self.init_video(ctx);
        self.calibrate_vsync(ctx);

        // Pace frames from just under the visible area; starting mid-screen
        // flickers when the rendering load swings.
        self.set_sync_line(mode.height + mode.top + SYNC_LINE_MARGIN);

        // Some displays (Sony KX-14CP1 among them) lose their mind if
        // drawing starts before they lock onto the new mode.
        ctx.delay_ms(160);
        Ok(())
    }

    /// Program the whole chip for the current mode. Output is gated off by
    /// the first register write and re-enabled by the last, so the
    /// intermediate states never reach the screen.
    fn init_video(&mut self, ctx: &mut impl Context) {
        let t = self.timing;
        let l = self.layout;

        spi::write_register(ctx, spi::VDCTRL2, 0);

        // Claim the chip on a shared bus and turn on address
        // auto-increment.
        spi::write_byte_register(ctx, spi::WRITE_MULTIIC, 0x0e);
        spi::write_byte_register(ctx, spi::WRITE_STATUS, 0x40);

        spi::write_register(ctx, spi::PICSTART, l.start_pix - 1);
        spi::write_register(ctx, spi::PICEND, l.end_pix - 1);
        spi::write_register(
            ctx,
            spi::VDCTRL1,
            reg16(
                VideoCtrl1::new()
                    .with_pll_enable(true)
                    .with_select_pll_clock(true)
                    .into_bytes(),
            ),
        );

        for w in 0..=u16::MAX {
            spi::write_word(ctx, w, 0x0000);
        }

        spi::write_register(ctx, spi::LINELEN, t.pll_clocks_per_line);
        spi::write_register(ctx, spi::INDEXSTART, l.index_start_longwords);
        self.blitter.init_filter(ctx);

        // Every line starts out as protoline 0; the vsync and picture
        // regions overwrite their own entries below.
        for line in 0..l.total_lines {
            timing::set_line_index(ctx, &l, line, l.protoline_word_address(0));
        }
        timing::write_protolines(ctx, &self.standard, &t, &l);
        self.set_color_space(ctx, ColorSpace::default());
        timing::write_vsync_lines(ctx, &self.standard, &l);
        timing::write_picture_lines(ctx, &self.standard, &l);

        let mut line_count = i32::from(self.standard.timing().register_line_count);
        if self.standard.interlace {
            line_count *= 2;
        }
        line_count += i32::from(self.line_adjust);
        spi::write_register(
            ctx,
            spi::VDCTRL2,
            reg16(
                VideoCtrl2::new()
                    .with_line_count(line_count as u16)
                    .with_pixel_width(self.mode.clocks_per_pixel - 1)
                    .with_pal(self.standard.system.is_pal())
                    .with_enable_video(true)
                    .into_bytes(),
            ),
        );
    }

    /// Select the pattern-generator microcode and repaint protoline 0's
    /// color burst with the colorspace's burst vector.
    pub fn set_color_space(&mut self, ctx: &mut impl Context, cs: ColorSpace) {
        let p = timing::color_program(self.standard.system, cs);
        spi::write_program(
            ctx,
            (u16::from(p.ops[3]) << 8) | u16::from(p.ops[2]),
            (u16::from(p.ops[1]) << 8) | u16::from(p.ops[0]),
        );
        let base = self.layout.protoline_word_address(0) + self.timing.burst;
        for i in 0..self.timing.burst_dur {
            spi::write_word(ctx, base + i, BURST_LEVEL | (u16::from(p.burst_vector) << 8));
        }
    }

    /// Paint the border area of the visible lines: `y` above black, `uv`
    /// as the chroma byte.
    pub fn set_border(&mut self, ctx: &mut impl Context, y: u8, uv: u8) {
        let t = self.timing;
        let base = self.layout.protoline_word_address(0) + t.blank_end;
        for i in 0..t.front_porch - t.blank_end {
            let word = (u16::from(uv) << 8) | (u16::from(y) + BLACK_LEVEL);
            spi::write_word(ctx, base + i, word);
        }
    }

    pub fn width(&self) -> u16 {
        self.mode.width
    }

    pub fn height(&self) -> u16 {
        self.mode.height
    }

    pub fn pitch(&self) -> u32 {
        self.layout.pitch
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn mode(&self) -> &VideoMode {
        &self.mode
    }

    pub fn calibration(&self) -> Calibration {
        self.calibration
    }

    /// Measured chip cycles per frame, valid once calibrated.
    pub fn cycles_per_frame(&self) -> u32 {
        self.cycles_per_frame
    }

    /// Additive correction to the programmed line count, for displays that
    /// misbehave at the nominal value. Takes effect on the next mode set.
    pub fn set_line_adjust(&mut self, lines: i16) {
        self.line_adjust = lines;
    }

    /// Write one pixel as a chip-native color code.
    pub fn set_pixel_yuv(&mut self, ctx: &mut impl Context, x: u16, y: u16, color: u8) {
        match self.depth {
            PixelDepth::Byte => {
                spi::write_byte(ctx, self.layout.pixel_address(x, y), color);
            }
            PixelDepth::Word => {
                spi::write_word(ctx, self.layout.pixel_word_address(x, y), u16::from(color));
            }
        }
    }

    /// Write one pixel as RGB, quantized through the palette.
    pub fn set_pixel_rgb(&mut self, ctx: &mut impl Context, x: u16, y: u16, r: u8, g: u8, b: u8) {
        self.set_pixel_yuv(ctx, x, y, color::yuv_from_rgb(r, g, b));
    }

    /// Copy a rectangle, overlap-safe.
    pub fn blit_rect(
        &mut self,
        ctx: &mut impl Context,
        src: (u16, u16),
        dst: (u16, u16),
        width: u8,
        height: u8,
    ) -> Result<(), Error> {
        self.blitter.blit_rect(ctx, &self.layout, src, dst, width, height)
    }

    /// Raw block move; see [`Blitter::move_block`].
    #[allow(clippy::too_many_arguments)]
    pub fn move_block(
        &mut self,
        ctx: &mut impl Context,
        src: (u16, u16),
        dst: (u16, u16),
        width: u8,
        height: u8,
        dir: MoveDir,
        linear: bool,
    ) -> Result<(), Error> {
        self.blitter.move_block(ctx, &self.layout, src, dst, width, height, dir, linear)
    }

    /// Fill `[x1, x2) x [y1, y2)` with a color code.
    ///
    /// The engine cannot fill, only copy, and a single move is limited to
    /// 255 bytes of width with source and destination at least 4 bytes
    /// apart. So: seed up to two 8-pixel cells on the top row, let a
    /// linear move propagate them across the row, then duplicate the top
    /// row downward in columns of at most 240 pixels.
    pub fn fill_rectangle(
        &mut self,
        ctx: &mut impl Context,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: u8,
    ) -> Result<(), Error> {
        const SEG_WIDTH: u16 = 8;
        debug_assert!(x1 < x2 && y1 < y2);
        let mut x1 = x1;
        let mut width = x2 - x1;
        let height = y2 - y1;
        let width_segs = width / SEG_WIDTH;

        // The seed pixels must not race a move still in flight.
        self.blitter.sync(ctx)?;

        let preset = SEG_WIDTH + if width_segs == 1 { 0 } else { SEG_WIDTH };
        for x in x1..x1 + preset {
            self.set_pixel_yuv(ctx, x, y1, color);
        }

        if width_segs > 2 {
            let adjust = width - width_segs * SEG_WIDTH;
            let length = width_segs - if adjust != 0 { 1 } else { 2 };
            let target = x1 + SEG_WIDTH + if adjust != 0 { adjust } else { SEG_WIDTH };
            self.blitter.move_block(
                ctx,
                &self.layout,
                (x1, y1),
                (target, y1),
                SEG_WIDTH as u8,
                length as u8,
                MoveDir::Forward,
                true,
            )?;
        }

        if height > 1 {
            while width >= 256 {
                // 240 leaves at least 5 columns for the tail move.
                self.blitter.move_block(
                    ctx,
                    &self.layout,
                    (x1, y1),
                    (x1, y1 + 1),
                    240,
                    (height - 1) as u8,
                    MoveDir::Forward,
                    false,
                )?;
                x1 += 240;
                width -= 240;
            }
            self.blitter.move_block(
                ctx,
                &self.layout,
                (x1, y1),
                (x1, y1 + 1),
                width as u8,
                (height - 1) as u8,
                MoveDir::Forward,
                false,
            )?;
        }
        Ok(())
    }

    /// Fill the whole visible area.
    pub fn clear_screen(&mut self, ctx: &mut impl Context, color: u8) -> Result<(), Error> {
        self.fill_rectangle(ctx, 0, 0, self.mode.width, self.mode.height, color)
    }

    /// The chip's current output line, folded to one field when
    /// interlaced.
    pub fn current_line(&self, ctx: &mut impl Context) -> u16 {
        let mut line = spi::read_register(ctx, spi::CURLINE) & 0x0fff;
        if self.standard.interlace && line >= 262 {
            line -= 262;
        }
        line
    }

    /// Arm the frame-pacing notification line; 0 disarms it.
    pub fn set_sync_line(&mut self, line: u16) {
        if line == 0 {
            self.vsync_enabled = false;
        } else {
            self.sync_line = line;
            self.vsync_enabled = true;
        }
    }

    pub fn sync_line(&self) -> Option<u16> {
        self.vsync_enabled.then_some(self.sync_line)
    }

    /// Measure cycles per frame until two consecutive frames agree. The
    /// chip's clock wanders right after startup; the frame-pacing consumer
    /// needs a settled value.
    fn calibrate_vsync(&mut self, ctx: &mut impl Context) {
        self.calibration = Calibration::Calibrating;
        let mut last = 0u32;
        loop {
            let cycles = self.measure_frame(ctx);
            if last.abs_diff(cycles) < CALIBRATION_TOLERANCE {
                self.cycles_per_frame = cycles;
                break;
            }
            last = cycles;
        }
        self.calibration = Calibration::Calibrated;
    }

    fn measure_frame(&self, ctx: &mut impl Context) -> u32 {
        self.wait_frame_edge(ctx);
        let start = ctx.cycles();
        self.wait_frame_edge(ctx);
        ctx.cycles().wrapping_sub(start)
    }

    fn wait_frame_edge(&self, ctx: &mut impl Context) {
        while self.current_line(ctx) == CALIBRATION_LINE {}
        while self.current_line(ctx) != CALIBRATION_LINE {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mode::System,
        test_utils::TestBus,
        timing::LineIndex,
    };

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn video(system: System, interlace: bool) -> (Video, TestBus) {
        init_logging();
        let mut video = Video::new(Config {
            standard: Standard { system, interlace },
            ..Config::default()
        });
        let mut bus = TestBus::new();
        video.begin(&mut bus).unwrap();
        (video, bus)
    }

    /// Read back the visible framebuffer from the simulated SRAM.
    fn snapshot(video: &Video, bus: &TestBus) -> Vec<Vec<u8>> {
        let l = video.layout();
        (0..l.height)
            .map(|y| {
                (0..l.width)
                    .map(|x| bus.mem[l.pixel_address(x, y) as usize])
                    .collect()
            })
            .collect()
    }

    /// Overlap-correct reference copy on the snapshot.
    fn reference_blit(
        fb: &mut [Vec<u8>],
        src: (u16, u16),
        dst: (u16, u16),
        w: u16,
        h: u16,
    ) {
        let mut rect = Vec::new();
        for y in 0..h {
            let row: Vec<u8> = (0..w)
                .map(|x| fb[usize::from(src.1 + y)][usize::from(src.0 + x)])
                .collect();
            rect.push(row);
        }
        for y in 0..h {
            for x in 0..w {
                fb[usize::from(dst.1 + y)][usize::from(dst.0 + x)] =
                    rect[usize::from(y)][usize::from(x)];
            }
        }
    }

    #[test]
    fn invalid_mode_index_is_rejected() {
        let (mut video, mut bus) = video(System::Ntsc, false);
        let err = video.set_mode(&mut bus, 10).unwrap_err();
        assert!(matches!(err, Error::InvalidMode { index: 10, len: 10 }));
    }

    #[test]
    fn begin_programs_geometry_and_enables_video() {
        let (video, bus) = video(System::Ntsc, false);
        let l = video.layout();
        assert_eq!(bus.picstart, l.start_pix - 1);
        assert_eq!(bus.picend, l.end_pix - 1);
        assert_eq!(bus.linelen, 1810);
        assert_eq!(bus.index_start, l.index_start_longwords);
        assert_eq!(bus.vdctrl2 & 0x8000, 0x8000, "video enable");
        assert_eq!(bus.vdctrl2 & 0x03ff, 263, "line count");
        assert_eq!((bus.vdctrl2 >> 10) & 0xf, 2, "clocks per pixel - 1");
        assert_eq!(bus.vdctrl2 & 0x4000, 0, "NTSC bit clear");
        assert_eq!(video.calibration(), Calibration::Calibrated);
        assert!(video.cycles_per_frame() > 0);

        // Default colorspace microcode and its burst vector on
        // protoline 0.
        assert_eq!(bus.program, 0xc09c_0a4a);
        let burst = usize::from(video.timing.burst) * 2;
        assert_eq!(bus.mem[burst], 0x0d);
        assert_eq!(bus.mem[burst + 1], 0x66);
    }

    #[test]
    fn pal_interlace_doubles_the_line_count() {
        let (_, bus) = video(System::Pal, true);
        assert_eq!(bus.vdctrl2 & 0x03ff, 628);
        assert_eq!(bus.vdctrl2 & 0x4000, 0x4000, "PAL bit");
    }

    fn index_entry(bus: &TestBus, l: &Layout, line: u16) -> LineIndex {
        let a = (l.index_start_bytes + u32::from(line) * 3) as usize;
        LineIndex::from_bytes([bus.mem[a], bus.mem[a + 1], bus.mem[a + 2]])
    }

    #[test]
    fn ntsc_interlaced_index_table_matches_the_standard() {
        let (video, bus) = video(System::Ntsc, true);
        let l = video.layout();
        assert_eq!(l.total_lines, 525);
        assert_eq!(l.picline_start, l.index_start_bytes + 525 * 3 + 1);

        // Documented vsync sequence for both fields.
        let expected: &[(u16, u16)] = &[
            (0, 3),
            (3, 4),
            (6, 3),
            (9, 2),
            (19, 2),
            (261, 1),
            (262, 3),
            (264, 6),
            (265, 4),
            (267, 5),
            (268, 3),
            (270, 7),
            (271, 2),
            (280, 2),
        ];
        for &(line, proto) in expected {
            let e = index_entry(&bus, l, line);
            assert_eq!(e.proto(), 0, "vsync lines carry no picture proto");
            assert_eq!(
                e.word_addr(),
                l.protoline_word_address(proto),
                "line {line}"
            );
        }

        // Picture lines of both fields point at their pixel storage.
        for i in [0, 1, l.height - 1] {
            for line in [l.start_line + i, l.start_line + 261 + i] {
                let e = index_entry(&bus, l, line);
                let addr = l.picline_byte_address(i);
                assert_eq!(u32::from(e.word_addr()), addr >> 1, "line {line}");
                assert_eq!(e.odd_byte(), addr & 1 != 0);
            }
        }

        // Everything else stays on protoline 0.
        let e = index_entry(&bus, l, 100);
        assert_eq!(e.word_addr(), 0);
        let e = index_entry(&bus, l, 524);
        assert_eq!(e.word_addr(), 0);
    }

    #[test]
    fn mode_switch_rederives_the_layout() {
        init_logging();
        let mut bus = TestBus::new();

        let mut video = Video::new(Config {
            standard: Standard { system: System::Ntsc, interlace: false },
            ..Config::default()
        });
        video.begin(&mut bus).unwrap();
        assert_eq!(video.pitch(), 468);
        assert_eq!(video.layout().first_line_addr, 2603);

        video.set_mode(&mut bus, 4).unwrap();
        assert_eq!(video.width(), 256);
        assert_eq!(video.pitch(), 266);

        let mut pal = Video::new(Config {
            standard: Standard { system: System::Pal, interlace: false },
            ..Config::default()
        });
        pal.begin(&mut bus).unwrap();
        assert_eq!(pal.pitch(), 467);
        assert_eq!(pal.layout().first_line_addr, 3212);
        assert_eq!(bus.vdctrl2 & 0x03ff, 314);
    }

    #[test]
    fn pixels_land_at_their_addresses() {
        let (mut video, mut bus) = video(System::Ntsc, false);
        video.set_pixel_yuv(&mut bus, 0, 0, 0x12);
        video.set_pixel_yuv(&mut bus, 459, 223, 0x34);
        let l = *video.layout();
        assert_eq!(bus.mem[l.pixel_address(0, 0) as usize], 0x12);
        assert_eq!(bus.mem[l.pixel_address(459, 223) as usize], 0x34);

        video.set_pixel_rgb(&mut bus, 5, 5, 0x33, 0x33, 0x33);
        assert_eq!(bus.mem[l.pixel_address(5, 5) as usize], 0x03);
    }

    #[test]
    fn blit_rect_matches_reference_semantics() {
        let cases: &[((u16, u16), (u16, u16), u8, u8)] = &[
            // Horizontally overlapping, destination to the right.
            ((0, 0), (5, 0), 10, 4),
            // Vertically separated, no overlap.
            ((0, 0), (0, 5), 10, 4),
            // Overlapping downward: reverse path.
            ((20, 10), (20, 12), 30, 8),
            // Overlapping upward: forward path.
            ((20, 12), (20, 10), 30, 8),
            // Same row, destination to the left.
            ((40, 30), (31, 30), 16, 3),
        ];
        for &(src, dst, w, h) in cases {
            let (mut video, mut bus) = video(System::Ntsc, false);
            // Deterministic test pattern.
            for y in 0..40u16 {
                for x in 0..80u16 {
                    video.set_pixel_yuv(&mut bus, x, y, (x as u8) ^ (y as u8).wrapping_mul(7));
                }
            }
            let mut expected = snapshot(&video, &bus);
            reference_blit(&mut expected, src, dst, u16::from(w), u16::from(h));

            video.blit_rect(&mut bus, src, dst, w, h).unwrap();
            video.blitter.sync(&mut bus).unwrap();
            assert_eq!(
                snapshot(&video, &bus),
                expected,
                "src {src:?} dst {dst:?} {w}x{h}"
            );
        }
    }

    #[test]
    fn wide_fill_covers_every_pixel_exactly() {
        let (mut video, mut bus) = video(System::Ntsc, false);
        // Width over 240 forces the chunked vertical duplication.
        video.fill_rectangle(&mut bus, 0, 0, 300, 10, 0x5a).unwrap();
        video.blitter.sync(&mut bus).unwrap();
        let fb = snapshot(&video, &bus);
        for y in 0..10 {
            for x in 0..300 {
                assert_eq!(fb[y][x], 0x5a, "inside ({x},{y})");
            }
        }
        for y in 0..12 {
            assert_eq!(fb[y][300], 0, "right boundary row {y}");
        }
        for x in 0..302 {
            assert_eq!(fb[10][x], 0, "bottom boundary col {x}");
        }
    }

    #[test]
    fn offset_fill_respects_its_rectangle() {
        let (mut video, mut bus) = video(System::Ntsc, false);
        video.fill_rectangle(&mut bus, 17, 3, 97, 9, 0xc3).unwrap();
        video.blitter.sync(&mut bus).unwrap();
        let fb = snapshot(&video, &bus);
        for y in 3..9 {
            for x in 17..97 {
                assert_eq!(fb[y][x], 0xc3, "inside ({x},{y})");
            }
        }
        assert_eq!(fb[3][16], 0);
        assert_eq!(fb[3][97], 0);
        assert_eq!(fb[2][17], 0);
        assert_eq!(fb[9][17], 0);
    }

    #[test]
    fn clear_screen_paints_the_whole_visible_area() {
        let (mut video, mut bus) = video(System::Ntsc, false);
        video.clear_screen(&mut bus, 0x0f).unwrap();
        video.blitter.sync(&mut bus).unwrap();
        let fb = snapshot(&video, &bus);
        for y in 0..video.height() as usize {
            for x in 0..video.width() as usize {
                assert_eq!(fb[y][x], 0x0f, "({x},{y})");
            }
        }
    }

    #[test]
    fn current_line_folds_interlaced_fields() {
        let (video, mut bus) = video(System::Ntsc, true);
        bus.set_current_line(300);
        assert_eq!(video.current_line(&mut bus), 300 - 262);
    }

    #[test]
    fn sync_line_arms_and_disarms() {
        let (mut video, _) = video(System::Ntsc, false);
        // Armed at mode set: visible end plus margin.
        assert_eq!(video.sync_line(), Some(224 + 9 + 16));
        video.set_sync_line(0);
        assert_eq!(video.sync_line(), None);
        video.set_sync_line(42);
        assert_eq!(video.sync_line(), Some(42));
    }
}
