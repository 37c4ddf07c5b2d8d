//! UTF-16 codec: conversions between little-endian UTF-16 bytes and the
//! other forms.
//!
//! Counts on the byte side are in bytes. A trailing odd byte, like a trailing
//! high surrogate, is left unconsumed with
//! [`Status::NeedInput`](crate::Status::NeedInput).

use crate::{
    Codec, Conversion, TranscodeOptions, Utf16,
    form::{Utf8Bytes, Utf16Bytes},
    transcode,
};

/// Encodes scalar values as UTF-16 bytes.
pub fn encode_scalars(src: &[u32], dst: &mut [u8]) -> Conversion {
    Utf16::encode_scalars(src, dst)
}

/// Encodes UTF-16 code units as UTF-16 bytes, validating surrogate pairing.
pub fn encode_utf16(src: &[u16], dst: &mut [u8]) -> Conversion {
    Utf16::encode_utf16(src, dst)
}

/// Transcodes UTF-8 bytes into UTF-16 bytes.
///
/// ```rust
/// use utfconv::{Status, utf16};
///
/// let mut dst = [0u8; 4];
/// let conv = utf16::encode_from_utf8(b"Hello", &mut dst);
/// assert_eq!(conv.status, Status::OutputFull);
/// assert_eq!((conv.consumed, conv.written), (2, 4));
/// ```
pub fn encode_from_utf8(src: &[u8], dst: &mut [u8]) -> Conversion {
    transcode::<Utf8Bytes, Utf16Bytes>(src, dst, TranscodeOptions::default())
}

/// Decodes UTF-16 bytes into scalar values.
pub fn decode_to_scalars(src: &[u8], dst: &mut [u32]) -> Conversion {
    Utf16::decode_to_scalars(src, dst)
}

/// Decodes UTF-16 bytes into code units, validating surrogate pairing.
pub fn decode_to_utf16(src: &[u8], dst: &mut [u16]) -> Conversion {
    Utf16::decode_to_utf16(src, dst)
}

/// Transcodes UTF-16 bytes into UTF-8 bytes.
pub fn decode_to_utf8(src: &[u8], dst: &mut [u8]) -> Conversion {
    transcode::<Utf16Bytes, Utf8Bytes>(src, dst, TranscodeOptions::default())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{Malformed, MalformedKind, Status};

    const SCALARS: [u32; 4] = [0x50, 0x3E8, 0xAFC8, 0x2_49F0];
    const BYTES: [u8; 10] = [0x50, 0x00, 0xE8, 0x03, 0xC8, 0xAF, 0x52, 0xD8, 0xF0, 0xDD];
    const UNITS: [u16; 5] = [0x50, 0x3E8, 0xAFC8, 0xD852, 0xDDF0];
    const UTF8: [u8; 10] = [0x50, 0xCF, 0xA8, 0xEA, 0xBF, 0x88, 0xF0, 0xA4, 0xA7, 0xB0];

    #[test]
    fn concrete_scenario() {
        let mut bytes = [0u8; 10];
        assert!(encode_scalars(&SCALARS, &mut bytes).is_ok());
        assert_eq!(bytes, BYTES);

        let mut bytes = [0u8; 10];
        assert!(encode_utf16(&UNITS, &mut bytes).is_ok());
        assert_eq!(bytes, BYTES);

        let mut bytes = [0u8; 10];
        assert!(encode_from_utf8(&UTF8, &mut bytes).is_ok());
        assert_eq!(bytes, BYTES);

        let mut scalars = [0u32; 4];
        assert!(decode_to_scalars(&BYTES, &mut scalars).is_ok());
        assert_eq!(scalars, SCALARS);

        let mut units = [0u16; 5];
        assert!(decode_to_utf16(&BYTES, &mut units).is_ok());
        assert_eq!(units, UNITS);

        let mut utf8 = [0u8; 10];
        assert!(decode_to_utf8(&BYTES, &mut utf8).is_ok());
        assert_eq!(utf8, UTF8);
    }

    #[rstest]
    #[case(1, 0, 0)]
    #[case(2, 1, 2)]
    #[case(5, 2, 4)]
    #[case(7, 3, 6)]
    #[case(9, 3, 6)]
    fn pair_is_written_whole(#[case] cap: usize, #[case] consumed: usize, #[case] written: usize) {
        let mut dst = [0u8; 10];
        let conv = encode_scalars(&SCALARS, &mut dst[..cap]);
        assert_eq!(conv.status, Status::OutputFull);
        assert_eq!((conv.consumed, conv.written), (consumed, written));
        assert_eq!(&dst[..written], &BYTES[..written]);
    }

    #[rstest]
    #[case(&BYTES[..7], 6, 3)]
    #[case(&BYTES[..8], 6, 3)]
    #[case(&BYTES[..9], 6, 3)]
    #[case(&BYTES[..1], 0, 0)]
    fn trailing_partial_unit_or_pair_needs_input(
        #[case] src: &[u8],
        #[case] consumed: usize,
        #[case] written: usize,
    ) {
        let mut dst = [0u32; 4];
        let conv = decode_to_scalars(src, &mut dst);
        assert_eq!(conv.status, Status::NeedInput);
        assert_eq!((conv.consumed, conv.written), (consumed, written));
    }

    #[test]
    fn only_unpaired_low_surrogates() {
        let src = [0x00, 0xDC, 0x01, 0xDC];
        let mut dst = [0u8; 16];
        let conv = decode_to_utf8(&src, &mut dst);
        assert!(!conv.is_ok());
        assert_eq!((conv.consumed, conv.written), (0, 0));
        assert_eq!(
            conv.malformed(),
            Some(Malformed {
                kind: MalformedKind::UnpairedLowSurrogate(0xDC00),
                len: 2
            })
        );
    }

    #[test]
    fn empty_destination_for_utf8_output() {
        let conv = decode_to_utf8(&BYTES, &mut []);
        assert_eq!(conv.status, Status::OutputFull);
        assert_eq!((conv.consumed, conv.written), (0, 0));
    }
}
