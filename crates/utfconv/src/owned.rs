use alloc::{vec, vec::Vec};

use crate::{
    error::TranscodeError,
    form::{Decode, Encode},
    options::TranscodeOptions,
    transcode::{measure, transcode},
};

/// Converts all of `src` into a freshly allocated buffer of exactly the
/// right length.
///
/// `src` is treated as complete: a trailing partial sequence is an error.
///
/// # Errors
///
/// [`TranscodeError::Malformed`] at the first ill-formed sequence, including
/// a truncated one at the end.
///
/// ```rust
/// use utfconv::{form::Utf16Units, form::Utf8Bytes, transcode_to_vec};
///
/// let units = transcode_to_vec::<Utf8Bytes, Utf16Units>("h😀".as_bytes())?;
/// assert_eq!(units, [0x68, 0xD83D, 0xDE00]);
/// # Ok::<(), utfconv::TranscodeError>(())
/// ```
pub fn transcode_to_vec<S: Decode, D: Encode>(
    src: &[S::Unit],
) -> Result<Vec<D::Unit>, TranscodeError> {
    into_vec::<S, D>(src, TranscodeOptions::complete())
}

/// Converts all of `src`, replacing every ill-formed sequence with U+FFFD.
///
/// ```rust
/// use utfconv::{form::Utf8Bytes, transcode_lossy_to_vec};
///
/// let fixed = transcode_lossy_to_vec::<Utf8Bytes, Utf8Bytes>(b"a\xF0\x9F\x98b\xE2");
/// assert_eq!(fixed, "a\u{FFFD}b\u{FFFD}".as_bytes());
/// ```
#[must_use]
pub fn transcode_lossy_to_vec<S: Decode, D: Encode>(src: &[S::Unit]) -> Vec<D::Unit> {
    // Under the lossy options the only early stop is a full destination,
    // which measuring rules out.
    let out = into_vec::<S, D>(src, TranscodeOptions::lossy());
    debug_assert!(out.is_ok(), "lossy conversion stopped early: {:?}", out.as_ref().err());
    out.unwrap_or_default()
}

fn into_vec<S: Decode, D: Encode>(
    src: &[S::Unit],
    options: TranscodeOptions,
) -> Result<Vec<D::Unit>, TranscodeError> {
    let len = measure::<S, D>(src, options).into_result()?;
    let mut out = vec![D::Unit::default(); len];
    transcode::<S, D>(src, &mut out, options).into_result()?;
    Ok(out)
}
