//! UTF-8 codec: conversions between UTF-8 bytes and the in-memory forms.
//!
//! Every function here is [`transcode`](crate::transcode) with
//! [`Utf8Bytes`](crate::form::Utf8Bytes) on one side and the default
//! [`TranscodeOptions`](crate::TranscodeOptions).

use crate::{Codec, Conversion, Utf8};

/// Encodes scalar values as UTF-8.
///
/// Stops in front of an invalid scalar value with
/// [`MalformedKind::InvalidScalar`](crate::MalformedKind::InvalidScalar).
pub fn encode_scalars(src: &[u32], dst: &mut [u8]) -> Conversion {
    Utf8::encode_scalars(src, dst)
}

/// Encodes UTF-16 code units as UTF-8.
///
/// A high surrogate at the very end of `src` is left unconsumed with
/// [`Status::NeedInput`](crate::Status::NeedInput); pass it again at the
/// start of the next call together with its low half.
pub fn encode_utf16(src: &[u16], dst: &mut [u8]) -> Conversion {
    Utf8::encode_utf16(src, dst)
}

/// Decodes UTF-8 into scalar values.
pub fn decode_to_scalars(src: &[u8], dst: &mut [u32]) -> Conversion {
    Utf8::decode_to_scalars(src, dst)
}

/// Decodes UTF-8 into UTF-16 code units.
///
/// A scalar above U+FFFF needs room for both halves of its surrogate pair;
/// with room for one, neither is written.
pub fn decode_to_utf16(src: &[u8], dst: &mut [u16]) -> Conversion {
    Utf8::decode_to_utf16(src, dst)
}
