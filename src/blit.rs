//! The chip's rectangular block mover.
//!
//! The engine copies `width` bytes per row for `height` rows, either
//! forward (ascending addresses) or in reverse, skipping a programmable
//! byte count between rows. The address registers are double-buffered for
//! forward moves only, which forces an ordering rule on back-to-back
//! moves; see [`Blitter::move_block`].

use modular_bitfield::prelude::*;

use crate::{addr::Layout, context::Context, spi, Error};

/// Widest single move the engine supports, in bytes.
pub const MAX_MOVE_WIDTH: u16 = 255;

/// Busy-flag polls before a stuck engine is reported as an error.
const BUSY_POLL_LIMIT: u32 = 1_000_000;

/// Outcome of a bounded busy-flag poll.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    Ready,
    TimedOut,
}

/// Poll the MVBLK line until the engine goes idle or the poll limit runs
/// out.
pub fn wait_move_done(ctx: &mut impl Context) -> Poll {
    for _ in 0..BUSY_POLL_LIMIT {
        if !ctx.blit_busy() {
            return Poll::Ready;
        }
    }
    Poll::TimedOut
}

/// Low byte of the BLOCKMVC1 register.
#[bitfield(bits = 8)]
struct BlockMoveLsb {
    reverse: bool,
    dst_odd: bool,
    src_odd: bool,
    #[skip]
    __: B1,
    lowpass: bool,
    #[skip]
    __: B3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDir {
    #[default]
    Forward,
    /// Descending addresses; used for overlapping copies where the
    /// destination follows the source.
    Reverse,
}

/// Block-move state machine. The direction of the previous move is the
/// only state carried between calls; it decides the hazard check on the
/// next one.
#[derive(Default)]
pub struct Blitter {
    last_dir: MoveDir,
    lowpass: bool,
}

impl Blitter {
    pub fn new(lowpass: bool) -> Blitter {
        Blitter { last_dir: MoveDir::Forward, lowpass }
    }

    /// Write the initial BLOCKMVC1 word; carries the PAL luma lowpass
    /// filter bit before any move has run.
    pub(crate) fn init_filter(&self, ctx: &mut impl Context) {
        let lsb = BlockMoveLsb::new().with_lowpass(self.lowpass).into_bytes()[0];
        spi::write_block_move_ctrl(ctx, 0, 0, lsb);
    }

    /// Wait for a move in flight to finish.
    pub fn sync(&self, ctx: &mut impl Context) -> Result<(), Error> {
        match wait_move_done(ctx) {
            Poll::Ready => Ok(()),
            Poll::TimedOut => Err(Error::BlitterTimeout),
        }
    }

    /// Start a `width` x `height` byte move between two pixel rectangles.
    ///
    /// A reverse move holds its address registers live until it completes,
    /// so if the previous move ran in reverse the engine must drain before
    /// BLOCKMVC1 may change. After a forward move the addresses are
    /// double-buffered and can be written immediately; only the second
    /// control word has to wait.
    ///
    /// `linear` disables the inter-row skip: the source and destination
    /// streams advance contiguously, which lets a short seed propagate
    /// itself along a row.
    #[allow(clippy::too_many_arguments)]
    pub fn move_block(
        &mut self,
        ctx: &mut impl Context,
        layout: &Layout,
        src: (u16, u16),
        dst: (u16, u16),
        width: u8,
        height: u8,
        dir: MoveDir,
        linear: bool,
    ) -> Result<(), Error> {
        debug_assert!(width > 0 && height > 0);
        let src_addr = layout.pixel_address(src.0, src.1);
        let dst_addr = layout.pixel_address(dst.0, dst.1);

        if self.last_dir == MoveDir::Reverse {
            self.sync(ctx)?;
        }
        let lsb = BlockMoveLsb::new()
            .with_reverse(dir == MoveDir::Reverse)
            .with_dst_odd(dst_addr & 1 != 0)
            .with_src_odd(src_addr & 1 != 0)
            .with_lowpass(self.lowpass)
            .into_bytes()[0];
        spi::write_block_move_ctrl(ctx, (src_addr >> 1) as u16, (dst_addr >> 1) as u16, lsb);
        if self.last_dir == MoveDir::Forward {
            self.sync(ctx)?;
        }
        let skip = if linear {
            0
        } else {
            (layout.pitch as u16) - u16::from(width)
        };
        spi::write_block_move_ctrl2(ctx, skip, width, height - 1);
        spi::start_block_move(ctx);
        self.last_dir = dir;
        Ok(())
    }

    /// Copy a rectangle with correct results for overlapping source and
    /// destination, like a two-dimensional `memmove`: when the destination
    /// start falls inside the source span the move runs in reverse,
    /// anchored at the bottom-right corner.
    pub fn blit_rect(
        &mut self,
        ctx: &mut impl Context,
        layout: &Layout,
        src: (u16, u16),
        dst: (u16, u16),
        width: u8,
        height: u8,
    ) -> Result<(), Error> {
        let (w, h) = (u16::from(width), u16::from(height));
        let overlaps_below = dst.1 > src.1 && dst.1 < src.1 + h;
        let overlaps_right = src.1 == dst.1 && dst.0 > src.0 && dst.0 < src.0 + w;
        if overlaps_below || overlaps_right {
            self.move_block(
                ctx,
                layout,
                (src.0 + w - 1, src.1 + h - 1),
                (dst.0 + w - 1, dst.1 + h - 1),
                width,
                height,
                MoveDir::Reverse,
                false,
            )
        } else {
            self.move_block(ctx, layout, src, dst, width, height, MoveDir::Forward, false)
        }
    }
}
