use crate::{
    conversion::Conversion,
    form::{CodePoints, Decode, Encode, Utf8Bytes, Utf16Bytes, Utf16Units},
    options::TranscodeOptions,
    transcode::transcode,
};

/// A codec with its own byte form and the four conversions every codec
/// offers between that form and the two in-memory forms.
///
/// All four use the default [`TranscodeOptions`]: a trailing partial sequence
/// is [`Status::NeedInput`](crate::Status::NeedInput) and ill-formed data
/// stops the call.
///
/// ```rust
/// use utfconv::{Codec, Utf8, Utf16};
///
/// fn encoded_size<C: Codec>(scalars: &[u32]) -> usize {
///     let mut dst = [0u8; 64];
///     C::encode_scalars(scalars, &mut dst).written
/// }
///
/// assert_eq!(encoded_size::<Utf8>(&[0x50, 0x2_49F0]), 5);
/// assert_eq!(encoded_size::<Utf16>(&[0x50, 0x2_49F0]), 6);
/// ```
pub trait Codec {
    /// The codec's own byte form.
    type Form: Decode<Unit = u8> + Encode<Unit = u8>;

    /// Encodes scalar values into the codec's form.
    fn encode_scalars(src: &[u32], dst: &mut [u8]) -> Conversion {
        transcode::<CodePoints, Self::Form>(src, dst, TranscodeOptions::default())
    }

    /// Encodes UTF-16 code units into the codec's form.
    fn encode_utf16(src: &[u16], dst: &mut [u8]) -> Conversion {
        transcode::<Utf16Units, Self::Form>(src, dst, TranscodeOptions::default())
    }

    /// Decodes the codec's form into scalar values.
    fn decode_to_scalars(src: &[u8], dst: &mut [u32]) -> Conversion {
        transcode::<Self::Form, CodePoints>(src, dst, TranscodeOptions::default())
    }

    /// Decodes the codec's form into UTF-16 code units.
    fn decode_to_utf16(src: &[u8], dst: &mut [u16]) -> Conversion {
        transcode::<Self::Form, Utf16Units>(src, dst, TranscodeOptions::default())
    }
}

/// The UTF-8 codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

impl Codec for Utf8 {
    type Form = Utf8Bytes;
}

/// The UTF-16 codec, little-endian.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16;

impl Codec for Utf16 {
    type Form = Utf16Bytes;
}
