#![allow(missing_docs, dead_code)]

/// Text covering every UTF-8 sequence length.
pub const TEXT: &str = "aé€😀";

/// U+0050, U+03E8, U+AFC8 and U+249F0: one scalar for each UTF-8 length.
pub const SCALARS: [u32; 4] = [0x50, 0x3E8, 0xAFC8, 0x2_49F0];

pub const SCALARS_UTF8: [u8; 10] = [0x50, 0xCF, 0xA8, 0xEA, 0xBF, 0x88, 0xF0, 0xA4, 0xA7, 0xB0];

pub const SCALARS_UTF16: [u16; 5] = [0x50, 0x3E8, 0xAFC8, 0xD852, 0xDDF0];

pub const SCALARS_UTF16LE: [u8; 10] = [0x50, 0x00, 0xE8, 0x03, 0xC8, 0xAF, 0x52, 0xD8, 0xF0, 0xDD];

/// "hello" in Chinese, three bytes per scalar in UTF-8.
pub const CJK: &str = "你好";
