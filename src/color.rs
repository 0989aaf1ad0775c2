//! RGB to chip-native color codes.
//!
//! A pixel byte in the 2-2-4 colorspace is `UUVVYYYY`: a four-bit chroma
//! row and a four-bit luma bucket. Conversion first looks the exact RGB
//! value up in the sorted palette; anything not in the palette falls back
//! to a hue-sector estimate that picks the row from the ordering of the
//! three channels.

use crate::palette::PALETTE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub rgb: u32,
    pub yuv: u8,
}

// Chroma rows of the 2-2-4 colorspace, by dominant/secondary channel.
const ROW_BW: u8 = 0;
const ROW_GB: u8 = 1;
const ROW_RB: u8 = 2;
const ROW_B: u8 = 4;
const ROW_BR: u8 = 4;
const ROW_BG: u8 = 5;
const ROW_GR: u8 = 8;
const ROW_RG: u8 = 10;
const ROW_G: u8 = 13;
const ROW_R: u8 = 14;

/// BT.601 luma, rounded.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((76 * u32::from(r) + 150 * u32::from(g) + 29 * u32::from(b) + 128) >> 8) as u8
}

fn hue_sector(r: u8, g: u8, b: u8) -> u8 {
    let bucket = (luma(r, g, b) >> 4) & 0x0f;

    let row = if r >= b && b > g {
        ROW_RB
    } else if r >= g && g > b {
        ROW_RG
    } else if b >= r && r > g {
        ROW_BR
    } else if b >= g && g > r {
        ROW_BG
    } else if g >= b && b > r {
        ROW_GB
    } else if g >= r && r > b {
        ROW_GR
    } else if r > b && r > g {
        ROW_R
    } else if b > r && b > g {
        ROW_B
    } else if g > r && g > b {
        ROW_G
    } else {
        // r == g == b
        ROW_BW
    };
    row * 16 + bucket
}

/// Convert an RGB triple to the chip's 8-bit color code. Total over all
/// inputs and deterministic.
pub fn yuv_from_rgb(r: u8, g: u8, b: u8) -> u8 {
    let rgb = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
    match PALETTE.binary_search_by_key(&rgb, |e| e.rgb) {
        Ok(i) => PALETTE[i].yuv,
        Err(_) => hue_sector(r, g, b),
    }
}
