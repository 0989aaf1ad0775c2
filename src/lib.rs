//! Driver for the VS23S0x0 family of SPI video signal generator chips:
//! 1 Mbit serial SRAMs with an integrated composite-video DAC and a
//! rectangular block-move engine.
//!
//! The driver synthesizes broadcast-legal NTSC and PAL timing (interlaced
//! or progressive) from a small mode table, exposes a pixel-addressable
//! framebuffer in the chip's SRAM, and drives the block mover for
//! hardware-accelerated fills and copies. All chip access goes through the
//! caller-supplied [`Bus`]/[`Timing`] traits, so the whole driver also
//! runs against a simulated chip on the host.
//!
//! ```no_run
//! # struct MyPlatform;
//! # impl vs23s0x0::Bus for MyPlatform {
//! #     fn select(&mut self) {}
//! #     fn deselect(&mut self) {}
//! #     fn transfer(&mut self, _: u8) -> u8 { 0 }
//! #     fn blit_busy(&mut self) -> bool { false }
//! # }
//! # impl vs23s0x0::Timing for MyPlatform {
//! #     fn cycles(&mut self) -> u32 { 0 }
//! #     fn delay_ms(&mut self, _: u32) {}
//! # }
//! use vs23s0x0::{Config, Standard, System, Video};
//!
//! # fn main() -> Result<(), vs23s0x0::Error> {
//! let mut platform = MyPlatform;
//! let mut video = Video::new(Config {
//!     standard: Standard { system: System::Ntsc, interlace: false },
//!     ..Config::default()
//! });
//! video.begin(&mut platform)?;
//! video.clear_screen(&mut platform, 0x00)?;
//! video.set_pixel_rgb(&mut platform, 10, 10, 0xff, 0x40, 0x00);
//! # Ok(())
//! # }
//! ```

pub mod addr;
pub mod blit;
pub mod color;
pub mod context;
pub mod mode;
mod palette;
pub mod spi;
pub mod timing;
pub mod video;

#[cfg(test)]
pub(crate) mod test_utils;

pub use blit::{Blitter, MoveDir, Poll};
pub use context::{Bus, Context, Timing};
pub use mode::{PixelDepth, Standard, System, VideoMode};
pub use timing::ColorSpace;
pub use video::{Calibration, Config, Video};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("video mode index {index} out of range ({len} modes)")]
    InvalidMode { index: u8, len: usize },
    #[error("block move engine stuck busy")]
    BlitterTimeout,
}
