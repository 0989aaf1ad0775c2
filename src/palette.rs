//! Palette for the 2-2-4 UVY colorspace.
//!
//! One entry per chip color code, sorted ascending by RGB value for binary
//! search. Generated from the inverse of the colorspace's DAC mapping;
//! regenerate rather than hand-edit.

use crate::color::PaletteEntry;

pub const PALETTE: [PaletteEntry; 256] = [
    PaletteEntry { rgb: 0x000000, yuv: 0x00 },
    PaletteEntry { rgb: 0x000063, yuv: 0x40 },
    PaletteEntry { rgb: 0x001300, yuv: 0xC0 },
    PaletteEntry { rgb: 0x002563, yuv: 0x70 },
    PaletteEntry { rgb: 0x002700, yuv: 0x80 },
    PaletteEntry { rgb: 0x003674, yuv: 0x71 },
    PaletteEntry { rgb: 0x003800, yuv: 0x30 },
    PaletteEntry { rgb: 0x004785, yuv: 0x72 },
    PaletteEntry { rgb: 0x004911, yuv: 0x31 },
    PaletteEntry { rgb: 0x004B00, yuv: 0xF0 },
    PaletteEntry { rgb: 0x005896, yuv: 0x73 },
    PaletteEntry { rgb: 0x005A22, yuv: 0x32 },
    PaletteEntry { rgb: 0x005C00, yuv: 0xF1 },
    PaletteEntry { rgb: 0x005D63, yuv: 0x60 },
    PaletteEntry { rgb: 0x005F00, yuv: 0xB0 },
    PaletteEntry { rgb: 0x0069A7, yuv: 0x74 },
    PaletteEntry { rgb: 0x006B33, yuv: 0x33 },
    PaletteEntry { rgb: 0x006D00, yuv: 0xF2 },
    PaletteEntry { rgb: 0x006E74, yuv: 0x61 },
    PaletteEntry { rgb: 0x007000, yuv: 0x20 },
    PaletteEntry { rgb: 0x007001, yuv: 0xB1 },
    PaletteEntry { rgb: 0x007AB8, yuv: 0x75 },
    PaletteEntry { rgb: 0x007C44, yuv: 0x34 },
    PaletteEntry { rgb: 0x007E00, yuv: 0xF3 },
    PaletteEntry { rgb: 0x007F85, yuv: 0x62 },
    PaletteEntry { rgb: 0x008100, yuv: 0xB2 },
    PaletteEntry { rgb: 0x008111, yuv: 0x21 },
    PaletteEntry { rgb: 0x008300, yuv: 0xE0 },
    PaletteEntry { rgb: 0x008BC9, yuv: 0x76 },
    PaletteEntry { rgb: 0x008D55, yuv: 0x35 },
    PaletteEntry { rgb: 0x008F00, yuv: 0xF4 },
    PaletteEntry { rgb: 0x009096, yuv: 0x63 },
    PaletteEntry { rgb: 0x009200, yuv: 0xB3 },
    PaletteEntry { rgb: 0x009222, yuv: 0x22 },
    PaletteEntry { rgb: 0x009400, yuv: 0xE1 },
    PaletteEntry { rgb: 0x009700, yuv: 0xA0 },
    PaletteEntry { rgb: 0x009E66, yuv: 0x36 },
    PaletteEntry { rgb: 0x00A000, yuv: 0xF5 },
    PaletteEntry { rgb: 0x00A1A7, yuv: 0x64 },
    PaletteEntry { rgb: 0x00A300, yuv: 0xB4 },
    PaletteEntry { rgb: 0x00A333, yuv: 0x23 },
    PaletteEntry { rgb: 0x00A500, yuv: 0xE2 },
    PaletteEntry { rgb: 0x00A800, yuv: 0xA1 },
    PaletteEntry { rgb: 0x00B103, yuv: 0xF6 },
    PaletteEntry { rgb: 0x00B2B8, yuv: 0x65 },
    PaletteEntry { rgb: 0x00B400, yuv: 0xB5 },
    PaletteEntry { rgb: 0x00B444, yuv: 0x24 },
    PaletteEntry { rgb: 0x00B600, yuv: 0xE3 },
    PaletteEntry { rgb: 0x00B900, yuv: 0xA2 },
    PaletteEntry { rgb: 0x00C3C9, yuv: 0x66 },
    PaletteEntry { rgb: 0x00C500, yuv: 0xB6 },
    PaletteEntry { rgb: 0x00C555, yuv: 0x25 },
    PaletteEntry { rgb: 0x00C700, yuv: 0xE4 },
    PaletteEntry { rgb: 0x00CA00, yuv: 0xA3 },
    PaletteEntry { rgb: 0x00D4DA, yuv: 0x67 },
    PaletteEntry { rgb: 0x00D666, yuv: 0x26 },
    PaletteEntry { rgb: 0x00D800, yuv: 0xE5 },
    PaletteEntry { rgb: 0x00DB00, yuv: 0xA4 },
    PaletteEntry { rgb: 0x00E5EB, yuv: 0x68 },
    PaletteEntry { rgb: 0x00E777, yuv: 0x27 },
    PaletteEntry { rgb: 0x00E903, yuv: 0xE6 },
    PaletteEntry { rgb: 0x00EC00, yuv: 0xA5 },
    PaletteEntry { rgb: 0x00F6FC, yuv: 0x69 },
    PaletteEntry { rgb: 0x00F888, yuv: 0x28 },
    PaletteEntry { rgb: 0x00FA14, yuv: 0xE7 },
    PaletteEntry { rgb: 0x00FD00, yuv: 0xA6 },
    PaletteEntry { rgb: 0x00FF00, yuv: 0xA7 },
    PaletteEntry { rgb: 0x00FF01, yuv: 0xA8 },
    PaletteEntry { rgb: 0x00FF02, yuv: 0xA9 },
    PaletteEntry { rgb: 0x00FF03, yuv: 0xAA },
    PaletteEntry { rgb: 0x00FF04, yuv: 0xAB },
    PaletteEntry { rgb: 0x00FF06, yuv: 0xAC },
    PaletteEntry { rgb: 0x00FF25, yuv: 0xE8 },
    PaletteEntry { rgb: 0x00FF36, yuv: 0xE9 },
    PaletteEntry { rgb: 0x00FF47, yuv: 0xEA },
    PaletteEntry { rgb: 0x00FF58, yuv: 0xEB },
    PaletteEntry { rgb: 0x00FF69, yuv: 0xEC },
    PaletteEntry { rgb: 0x00FF99, yuv: 0x29 },
    PaletteEntry { rgb: 0x00FFAA, yuv: 0x2A },
    PaletteEntry { rgb: 0x00FFBB, yuv: 0x2B },
    PaletteEntry { rgb: 0x00FFCC, yuv: 0x2C },
    PaletteEntry { rgb: 0x00FFFF, yuv: 0x6A },
    PaletteEntry { rgb: 0x010000, yuv: 0x6B },
    PaletteEntry { rgb: 0x010001, yuv: 0x6C },
    PaletteEntry { rgb: 0x01FF17, yuv: 0xAD },
    PaletteEntry { rgb: 0x01FF7A, yuv: 0xED },
    PaletteEntry { rgb: 0x01FFDD, yuv: 0x2D },
    PaletteEntry { rgb: 0x01FFFF, yuv: 0x6D },
    PaletteEntry { rgb: 0x099CDA, yuv: 0x77 },
    PaletteEntry { rgb: 0x09AF77, yuv: 0x37 },
    PaletteEntry { rgb: 0x09C214, yuv: 0xF7 },
    PaletteEntry { rgb: 0x09D600, yuv: 0xB7 },
    PaletteEntry { rgb: 0x110074, yuv: 0x41 },
    PaletteEntry { rgb: 0x111111, yuv: 0x01 },
    PaletteEntry { rgb: 0x112400, yuv: 0xC1 },
    PaletteEntry { rgb: 0x113800, yuv: 0x81 },
    PaletteEntry { rgb: 0x12FF28, yuv: 0xAE },
    PaletteEntry { rgb: 0x12FF8B, yuv: 0xEE },
    PaletteEntry { rgb: 0x12FFEE, yuv: 0x2E },
    PaletteEntry { rgb: 0x12FFFF, yuv: 0x6E },
    PaletteEntry { rgb: 0x1AADEB, yuv: 0x78 },
    PaletteEntry { rgb: 0x1AC088, yuv: 0x38 },
    PaletteEntry { rgb: 0x1AD325, yuv: 0xF8 },
    PaletteEntry { rgb: 0x1AE700, yuv: 0xB8 },
    PaletteEntry { rgb: 0x220F85, yuv: 0x42 },
    PaletteEntry { rgb: 0x222222, yuv: 0x02 },
    PaletteEntry { rgb: 0x223500, yuv: 0xC2 },
    PaletteEntry { rgb: 0x224900, yuv: 0x82 },
    PaletteEntry { rgb: 0x23FF39, yuv: 0xAF },
    PaletteEntry { rgb: 0x23FF9C, yuv: 0xEF },
    PaletteEntry { rgb: 0x23FFFF, yuv: 0x2F },
    PaletteEntry { rgb: 0x240000, yuv: 0x6F },
    PaletteEntry { rgb: 0x2BBEFC, yuv: 0x79 },
    PaletteEntry { rgb: 0x2BD199, yuv: 0x39 },
    PaletteEntry { rgb: 0x2BE436, yuv: 0xF9 },
    PaletteEntry { rgb: 0x2BF800, yuv: 0xB9 },
    PaletteEntry { rgb: 0x332096, yuv: 0x43 },
    PaletteEntry { rgb: 0x333333, yuv: 0x03 },
    PaletteEntry { rgb: 0x334600, yuv: 0xC3 },
    PaletteEntry { rgb: 0x335A00, yuv: 0x83 },
    PaletteEntry { rgb: 0x3CCFFF, yuv: 0x7A },
    PaletteEntry { rgb: 0x3CE2AA, yuv: 0x3A },
    PaletteEntry { rgb: 0x3CF547, yuv: 0xFA },
    PaletteEntry { rgb: 0x3CFF00, yuv: 0xBA },
    PaletteEntry { rgb: 0x4431A7, yuv: 0x44 },
    PaletteEntry { rgb: 0x444444, yuv: 0x04 },
    PaletteEntry { rgb: 0x445700, yuv: 0xC4 },
    PaletteEntry { rgb: 0x446B00, yuv: 0x84 },
    PaletteEntry { rgb: 0x4DE0FF, yuv: 0x7B },
    PaletteEntry { rgb: 0x4DF3BB, yuv: 0x3B },
    PaletteEntry { rgb: 0x4DFF00, yuv: 0xBB },
    PaletteEntry { rgb: 0x4DFF58, yuv: 0xFB },
    PaletteEntry { rgb: 0x5542B8, yuv: 0x45 },
    PaletteEntry { rgb: 0x555555, yuv: 0x05 },
    PaletteEntry { rgb: 0x556800, yuv: 0xC5 },
    PaletteEntry { rgb: 0x557C00, yuv: 0x85 },
    PaletteEntry { rgb: 0x5EF1FF, yuv: 0x7C },
    PaletteEntry { rgb: 0x5EFF06, yuv: 0xBC },
    PaletteEntry { rgb: 0x5EFF69, yuv: 0xFC },
    PaletteEntry { rgb: 0x5EFFCC, yuv: 0x3C },
    PaletteEntry { rgb: 0x6653C9, yuv: 0x46 },
    PaletteEntry { rgb: 0x666666, yuv: 0x06 },
    PaletteEntry { rgb: 0x667903, yuv: 0xC6 },
    PaletteEntry { rgb: 0x668D00, yuv: 0x86 },
    PaletteEntry { rgb: 0x6E0000, yuv: 0x10 },
    PaletteEntry { rgb: 0x6E0001, yuv: 0x90 },
    PaletteEntry { rgb: 0x6E0002, yuv: 0xD0 },
    PaletteEntry { rgb: 0x6E0063, yuv: 0x50 },
    PaletteEntry { rgb: 0x6FFF17, yuv: 0xBD },
    PaletteEntry { rgb: 0x6FFF7A, yuv: 0xFD },
    PaletteEntry { rgb: 0x6FFFDD, yuv: 0x3D },
    PaletteEntry { rgb: 0x6FFFFF, yuv: 0x7D },
    PaletteEntry { rgb: 0x7764DA, yuv: 0x47 },
    PaletteEntry { rgb: 0x777777, yuv: 0x07 },
    PaletteEntry { rgb: 0x778A14, yuv: 0xC7 },
    PaletteEntry { rgb: 0x779E00, yuv: 0x87 },
    PaletteEntry { rgb: 0x7F0000, yuv: 0x91 },
    PaletteEntry { rgb: 0x7F0001, yuv: 0xD1 },
    PaletteEntry { rgb: 0x7F0011, yuv: 0x11 },
    PaletteEntry { rgb: 0x7F0074, yuv: 0x51 },
    PaletteEntry { rgb: 0x80FF28, yuv: 0xBE },
    PaletteEntry { rgb: 0x80FF8B, yuv: 0xFE },
    PaletteEntry { rgb: 0x80FFEE, yuv: 0x3E },
    PaletteEntry { rgb: 0x80FFFF, yuv: 0x7E },
    PaletteEntry { rgb: 0x8875EB, yuv: 0x48 },
    PaletteEntry { rgb: 0x888888, yuv: 0x08 },
    PaletteEntry { rgb: 0x889B25, yuv: 0xC8 },
    PaletteEntry { rgb: 0x88AF00, yuv: 0x88 },
    PaletteEntry { rgb: 0x900000, yuv: 0xD2 },
    PaletteEntry { rgb: 0x900022, yuv: 0x12 },
    PaletteEntry { rgb: 0x900085, yuv: 0x52 },
    PaletteEntry { rgb: 0x901000, yuv: 0x92 },
    PaletteEntry { rgb: 0x91FF39, yuv: 0xBF },
    PaletteEntry { rgb: 0x91FF9C, yuv: 0xFF },
    PaletteEntry { rgb: 0x91FFFF, yuv: 0x3F },
    PaletteEntry { rgb: 0x920000, yuv: 0x7F },
    PaletteEntry { rgb: 0x9986FC, yuv: 0x49 },
    PaletteEntry { rgb: 0x999999, yuv: 0x09 },
    PaletteEntry { rgb: 0x99AC36, yuv: 0xC9 },
    PaletteEntry { rgb: 0x99C000, yuv: 0x89 },
    PaletteEntry { rgb: 0xA10033, yuv: 0x13 },
    PaletteEntry { rgb: 0xA10096, yuv: 0x53 },
    PaletteEntry { rgb: 0xA10E00, yuv: 0xD3 },
    PaletteEntry { rgb: 0xA12100, yuv: 0x93 },
    PaletteEntry { rgb: 0xAA97FF, yuv: 0x4A },
    PaletteEntry { rgb: 0xAAAAAA, yuv: 0x0A },
    PaletteEntry { rgb: 0xAABD47, yuv: 0xCA },
    PaletteEntry { rgb: 0xAAD100, yuv: 0x8A },
    PaletteEntry { rgb: 0xB200A7, yuv: 0x54 },
    PaletteEntry { rgb: 0xB20C44, yuv: 0x14 },
    PaletteEntry { rgb: 0xB21F00, yuv: 0xD4 },
    PaletteEntry { rgb: 0xB23200, yuv: 0x94 },
    PaletteEntry { rgb: 0xBBA8FF, yuv: 0x4B },
    PaletteEntry { rgb: 0xBBBBBB, yuv: 0x0B },
    PaletteEntry { rgb: 0xBBCE58, yuv: 0xCB },
    PaletteEntry { rgb: 0xBBE200, yuv: 0x8B },
    PaletteEntry { rgb: 0xC30AB8, yuv: 0x55 },
    PaletteEntry { rgb: 0xC31D55, yuv: 0x15 },
    PaletteEntry { rgb: 0xC33000, yuv: 0xD5 },
    PaletteEntry { rgb: 0xC34300, yuv: 0x95 },
    PaletteEntry { rgb: 0xCCB9FF, yuv: 0x4C },
    PaletteEntry { rgb: 0xCCCCCC, yuv: 0x0C },
    PaletteEntry { rgb: 0xCCDF69, yuv: 0xCC },
    PaletteEntry { rgb: 0xCCF306, yuv: 0x8C },
    PaletteEntry { rgb: 0xD41BC9, yuv: 0x56 },
    PaletteEntry { rgb: 0xD42E66, yuv: 0x16 },
    PaletteEntry { rgb: 0xD44103, yuv: 0xD6 },
    PaletteEntry { rgb: 0xD45400, yuv: 0x96 },
    PaletteEntry { rgb: 0xDDCAFF, yuv: 0x4D },
    PaletteEntry { rgb: 0xDDDDDD, yuv: 0x0D },
    PaletteEntry { rgb: 0xDDF07A, yuv: 0xCD },
    PaletteEntry { rgb: 0xDDFF17, yuv: 0x8D },
    PaletteEntry { rgb: 0xE52CDA, yuv: 0x57 },
    PaletteEntry { rgb: 0xE53F77, yuv: 0x17 },
    PaletteEntry { rgb: 0xE55214, yuv: 0xD7 },
    PaletteEntry { rgb: 0xE56500, yuv: 0x97 },
    PaletteEntry { rgb: 0xEEDBFF, yuv: 0x4E },
    PaletteEntry { rgb: 0xEEEEEE, yuv: 0x0E },
    PaletteEntry { rgb: 0xEEFF28, yuv: 0x8E },
    PaletteEntry { rgb: 0xEEFF8B, yuv: 0xCE },
    PaletteEntry { rgb: 0xF63DEB, yuv: 0x58 },
    PaletteEntry { rgb: 0xF65088, yuv: 0x18 },
    PaletteEntry { rgb: 0xF66325, yuv: 0xD8 },
    PaletteEntry { rgb: 0xF67600, yuv: 0x98 },
    PaletteEntry { rgb: 0xFF4EFC, yuv: 0x59 },
    PaletteEntry { rgb: 0xFF5FFF, yuv: 0x5A },
    PaletteEntry { rgb: 0xFF6199, yuv: 0x19 },
    PaletteEntry { rgb: 0xFF70FF, yuv: 0x5B },
    PaletteEntry { rgb: 0xFF72AA, yuv: 0x1A },
    PaletteEntry { rgb: 0xFF7436, yuv: 0xD9 },
    PaletteEntry { rgb: 0xFF81FF, yuv: 0x5C },
    PaletteEntry { rgb: 0xFF83BB, yuv: 0x1B },
    PaletteEntry { rgb: 0xFF8547, yuv: 0xDA },
    PaletteEntry { rgb: 0xFF8700, yuv: 0x99 },
    PaletteEntry { rgb: 0xFF92FF, yuv: 0x5D },
    PaletteEntry { rgb: 0xFF94CC, yuv: 0x1C },
    PaletteEntry { rgb: 0xFF9658, yuv: 0xDB },
    PaletteEntry { rgb: 0xFF9800, yuv: 0x9A },
    PaletteEntry { rgb: 0xFFA3FF, yuv: 0x5E },
    PaletteEntry { rgb: 0xFFA5DD, yuv: 0x1D },
    PaletteEntry { rgb: 0xFFA769, yuv: 0xDC },
    PaletteEntry { rgb: 0xFFA900, yuv: 0x9B },
    PaletteEntry { rgb: 0xFFB4FF, yuv: 0x5F },
    PaletteEntry { rgb: 0xFFB6EE, yuv: 0x1E },
    PaletteEntry { rgb: 0xFFB87A, yuv: 0xDD },
    PaletteEntry { rgb: 0xFFBA06, yuv: 0x9C },
    PaletteEntry { rgb: 0xFFC7FF, yuv: 0x1F },
    PaletteEntry { rgb: 0xFFC98B, yuv: 0xDE },
    PaletteEntry { rgb: 0xFFCB17, yuv: 0x9D },
    PaletteEntry { rgb: 0xFFDA9C, yuv: 0xDF },
    PaletteEntry { rgb: 0xFFDC28, yuv: 0x9E },
    PaletteEntry { rgb: 0xFFECFF, yuv: 0x4F },
    PaletteEntry { rgb: 0xFFED39, yuv: 0x9F },
    PaletteEntry { rgb: 0xFFFF39, yuv: 0x8F },
    PaletteEntry { rgb: 0xFFFF9C, yuv: 0xCF },
    PaletteEntry { rgb: 0xFFFFFF, yuv: 0x0F },
];
