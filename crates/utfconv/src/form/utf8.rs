use super::{Decode, Decoded, Encode};
use crate::{conversion::Malformed, error::MalformedKind, scalar::utf8_len};

/// UTF-8 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Bytes;

/// Mask of the value bits of a continuation byte.
const CONT_MASK: u8 = 0b0011_1111;

/// Sequence length, value bits of the lead byte, and the accepted range of
/// the second byte for every valid multi-byte lead byte (Unicode table 3-7).
///
/// Narrowing the second byte's range rejects overlong forms, encoded
/// surrogates and values above U+10FFFF as soon as the second byte is seen.
#[inline]
fn lead_info(lead: u8) -> Option<(usize, u32, u8, u8)> {
    let info = match lead {
        0xC2..=0xDF => (2, u32::from(lead & 0x1F), 0x80, 0xBF),
        0xE0 => (3, u32::from(lead & 0x0F), 0xA0, 0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, u32::from(lead & 0x0F), 0x80, 0xBF),
        0xED => (3, u32::from(lead & 0x0F), 0x80, 0x9F),
        0xF0 => (4, u32::from(lead & 0x07), 0x90, 0xBF),
        0xF1..=0xF3 => (4, u32::from(lead & 0x07), 0x80, 0xBF),
        0xF4 => (4, u32::from(lead & 0x07), 0x80, 0x8F),
        _ => return None,
    };
    Some(info)
}

/// Names the rule a continuation byte in the narrowed second-byte range
/// broke.
fn second_byte_error(lead: u8, byte: u8) -> MalformedKind {
    if !(0x80..=0xBF).contains(&byte) {
        return MalformedKind::InvalidContinuation(byte);
    }
    match lead {
        0xE0 | 0xF0 => MalformedKind::Overlong,
        0xED => MalformedKind::EncodedSurrogate,
        0xF4 => MalformedKind::OutOfRange,
        _ => MalformedKind::InvalidContinuation(byte),
    }
}

impl Decode for Utf8Bytes {
    type Unit = u8;

    #[inline]
    fn decode(src: &[u8]) -> Decoded {
        let lead = src[0];
        if lead < 0x80 {
            return Decoded::Scalar {
                value: u32::from(lead),
                len: 1,
            };
        }

        let Some((width, init, lo, hi)) = lead_info(lead) else {
            let kind = match lead {
                0xC0 | 0xC1 => MalformedKind::Overlong,
                _ => MalformedKind::InvalidLeadByte(lead),
            };
            return Decoded::Malformed(Malformed { kind, len: 1 });
        };

        let mut value = init;
        for i in 1..width {
            let Some(&byte) = src.get(i) else {
                return Decoded::Incomplete;
            };
            let (lo, hi) = if i == 1 { (lo, hi) } else { (0x80, 0xBF) };
            if !(lo..=hi).contains(&byte) {
                let kind = if i == 1 {
                    second_byte_error(lead, byte)
                } else {
                    MalformedKind::InvalidContinuation(byte)
                };
                return Decoded::Malformed(Malformed { kind, len: i });
            }
            value = (value << 6) | u32::from(byte & CONT_MASK);
        }

        Decoded::Scalar { value, len: width }
    }
}

impl Encode for Utf8Bytes {
    type Unit = u8;

    #[inline]
    fn encoded_len(scalar: u32) -> usize {
        utf8_len(scalar)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn encode(scalar: u32, dst: &mut [u8]) {
        let width = dst.len();
        match dst {
            [a] => *a = scalar as u8,
            [a, b] => {
                *a = 0xC0 | (scalar >> 6) as u8;
                *b = 0x80 | (scalar as u8 & CONT_MASK);
            }
            [a, b, c] => {
                *a = 0xE0 | (scalar >> 12) as u8;
                *b = 0x80 | ((scalar >> 6) as u8 & CONT_MASK);
                *c = 0x80 | (scalar as u8 & CONT_MASK);
            }
            [a, b, c, d] => {
                *a = 0xF0 | (scalar >> 18) as u8;
                *b = 0x80 | ((scalar >> 12) as u8 & CONT_MASK);
                *c = 0x80 | ((scalar >> 6) as u8 & CONT_MASK);
                *d = 0x80 | (scalar as u8 & CONT_MASK);
            }
            _ => unreachable!("UTF-8 destination slot of {width} bytes"),
        }
    }
}
