use super::{Decode, Decoded, Encode};
use crate::{
    conversion::Malformed,
    error::MalformedKind,
    scalar::{combine_surrogates, is_high_surrogate, is_low_surrogate, split_surrogates, utf16_len},
};

/// UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16Units;

/// UTF-16 code units stored as bytes, two per unit, little-endian.
///
/// Counts reported for this form are in bytes. A trailing odd byte is half of
/// a code unit and is never consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf16Bytes;

/// Pairs `first` with the unit after it.
///
/// `next` is `None` when the source ends after `first`. `width` is the number
/// of source elements per code unit, so lengths come out in source elements.
#[inline]
fn pair(first: u16, next: Option<u16>, width: usize) -> Decoded {
    if is_high_surrogate(first) {
        return match next {
            None => Decoded::Incomplete,
            Some(low) if is_low_surrogate(low) => Decoded::Scalar {
                value: combine_surrogates(first, low),
                len: 2 * width,
            },
            Some(_) => Decoded::Malformed(Malformed {
                kind: MalformedKind::UnpairedHighSurrogate(first),
                len: width,
            }),
        };
    }
    if is_low_surrogate(first) {
        return Decoded::Malformed(Malformed {
            kind: MalformedKind::UnpairedLowSurrogate(first),
            len: width,
        });
    }
    Decoded::Scalar {
        value: u32::from(first),
        len: width,
    }
}

#[inline]
fn read_le(src: &[u8], at: usize) -> Option<u16> {
    match src.get(at..at + 2)? {
        &[lo, hi] => Some(u16::from_le_bytes([lo, hi])),
        _ => None,
    }
}

impl Decode for Utf16Units {
    type Unit = u16;

    #[inline]
    fn decode(src: &[u16]) -> Decoded {
        pair(src[0], src.get(1).copied(), 1)
    }
}

impl Encode for Utf16Units {
    type Unit = u16;

    #[inline]
    fn encoded_len(scalar: u32) -> usize {
        utf16_len(scalar)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn encode(scalar: u32, dst: &mut [u16]) {
        if let [unit] = dst {
            *unit = scalar as u16;
        } else {
            let (high, low) = split_surrogates(scalar);
            dst[0] = high;
            dst[1] = low;
        }
    }
}

impl Decode for Utf16Bytes {
    type Unit = u8;

    #[inline]
    fn decode(src: &[u8]) -> Decoded {
        let Some(first) = read_le(src, 0) else {
            return Decoded::Incomplete;
        };
        pair(first, read_le(src, 2), 2)
    }
}

impl Encode for Utf16Bytes {
    type Unit = u8;

    #[inline]
    fn encoded_len(scalar: u32) -> usize {
        2 * utf16_len(scalar)
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn encode(scalar: u32, dst: &mut [u8]) {
        if dst.len() == 2 {
            dst.copy_from_slice(&(scalar as u16).to_le_bytes());
        } else {
            let (high, low) = split_surrogates(scalar);
            dst[..2].copy_from_slice(&high.to_le_bytes());
            dst[2..].copy_from_slice(&low.to_le_bytes());
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&[0x0050], Decoded::Scalar { value: 0x50, len: 1 })]
    #[case(&[0xD852, 0xDDF0], Decoded::Scalar { value: 0x2_49F0, len: 2 })]
    #[case(&[0xFFFF, 0xDC00], Decoded::Scalar { value: 0xFFFF, len: 1 })]
    #[case(&[0xD852], Decoded::Incomplete)]
    #[case(&[0xD852, 0x0041], Decoded::Malformed(Malformed { kind: MalformedKind::UnpairedHighSurrogate(0xD852), len: 1 }))]
    #[case(&[0xD852, 0xD852], Decoded::Malformed(Malformed { kind: MalformedKind::UnpairedHighSurrogate(0xD852), len: 1 }))]
    #[case(&[0xDDF0, 0xD852], Decoded::Malformed(Malformed { kind: MalformedKind::UnpairedLowSurrogate(0xDDF0), len: 1 }))]
    fn units(#[case] src: &[u16], #[case] expected: Decoded) {
        assert_eq!(Utf16Units::decode(src), expected);
    }

    #[rstest]
    #[case(&[0x50, 0x00], Decoded::Scalar { value: 0x50, len: 2 })]
    #[case(&[0xE8, 0x03, 0xC8], Decoded::Scalar { value: 0x3E8, len: 2 })]
    #[case(&[0x52, 0xD8, 0xF0, 0xDD], Decoded::Scalar { value: 0x2_49F0, len: 4 })]
    #[case(&[0x50], Decoded::Incomplete)]
    #[case(&[0x52, 0xD8], Decoded::Incomplete)]
    #[case(&[0x52, 0xD8, 0xF0], Decoded::Incomplete)]
    #[case(&[0x52, 0xD8, 0x41, 0x00], Decoded::Malformed(Malformed { kind: MalformedKind::UnpairedHighSurrogate(0xD852), len: 2 }))]
    #[case(&[0xF0, 0xDD], Decoded::Malformed(Malformed { kind: MalformedKind::UnpairedLowSurrogate(0xDDF0), len: 2 }))]
    fn little_endian_bytes(#[case] src: &[u8], #[case] expected: Decoded) {
        assert_eq!(Utf16Bytes::decode(src), expected);
    }

    #[test]
    fn encodes_pairs_in_unit_order() {
        let mut units = [0u16; 2];
        Utf16Units::encode(0x2_49F0, &mut units);
        assert_eq!(units, [0xD852, 0xDDF0]);

        let mut bytes = [0u8; 4];
        Utf16Bytes::encode(0x2_49F0, &mut bytes);
        assert_eq!(bytes, [0x52, 0xD8, 0xF0, 0xDD]);

        let mut bytes = [0u8; 2];
        Utf16Bytes::encode(0xAFC8, &mut bytes);
        assert_eq!(bytes, [0xC8, 0xAF]);
    }
}
