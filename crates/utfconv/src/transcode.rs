//! The one conversion loop shared by every pair of forms.

use crate::{
    conversion::{Conversion, Malformed, Measure, Status},
    error::MalformedKind,
    form::{Decode, Decoded, Encode},
    options::{MalformedPolicy, TranscodeOptions},
    scalar::REPLACEMENT,
};

/// Walks `src` scalar by scalar, handing each one to `emit`.
///
/// `emit` returns `false` when the scalar does not fit; the scalar is then not
/// consumed. Returns the final status and the number of source units
/// consumed.
#[inline]
fn run<S: Decode>(
    src: &[S::Unit],
    options: TranscodeOptions,
    mut emit: impl FnMut(u32) -> bool,
) -> (Status, usize) {
    let mut read = 0;
    while read < src.len() {
        let malformed = match S::decode(&src[read..]) {
            Decoded::Scalar { value, len } => {
                if !emit(value) {
                    return (Status::OutputFull, read);
                }
                read += len;
                continue;
            }
            Decoded::Incomplete if !options.end_of_stream => return (Status::NeedInput, read),
            Decoded::Incomplete => Malformed {
                kind: MalformedKind::Truncated,
                len: src.len() - read,
            },
            Decoded::Malformed(malformed) => malformed,
        };

        match options.on_malformed {
            MalformedPolicy::Stop => return (Status::Malformed(malformed), read),
            MalformedPolicy::Replace => {
                if !emit(REPLACEMENT) {
                    return (Status::OutputFull, read);
                }
                read += malformed.len;
            }
        }
    }
    (Status::Done, read)
}

/// Converts a prefix of `src` from form `S` into a prefix of `dst` in form
/// `D`.
///
/// The call stops at the first scalar whose encoded form does not fit in the
/// rest of `dst`, at a sequence cut off by the end of `src`, or at ill-formed
/// data (depending on `options`). Nothing of the scalar it stops at is
/// consumed or written.
///
/// ```rust
/// use utfconv::{Status, TranscodeOptions, form::Utf8Bytes, form::Utf16Bytes, transcode};
///
/// let src = "Hello".as_bytes();
/// let mut dst = [0u8; 5];
/// let conv = transcode::<Utf8Bytes, Utf16Bytes>(src, &mut dst, TranscodeOptions::default());
/// assert_eq!(conv.status, Status::OutputFull);
/// assert_eq!((conv.consumed, conv.written), (2, 4));
/// assert_eq!(&dst[..4], &[0x48, 0x00, 0x65, 0x00]);
/// ```
pub fn transcode<S: Decode, D: Encode>(
    src: &[S::Unit],
    dst: &mut [D::Unit],
    options: TranscodeOptions,
) -> Conversion {
    let mut written = 0;
    let (status, consumed) = run::<S>(src, options, |scalar| {
        let len = D::encoded_len(scalar);
        let Some(slot) = dst.get_mut(written..written + len) else {
            return false;
        };
        D::encode(scalar, slot);
        written += len;
        true
    });

    match status {
        Status::Done => {}
        Status::Malformed(Malformed { kind, len }) => {
            tracing::debug!(?kind, len, consumed, written, "malformed input");
        }
        Status::OutputFull | Status::NeedInput => {
            tracing::trace!(?status, consumed, written, "resumable stop");
        }
    }

    Conversion {
        status,
        consumed,
        written,
    }
}

/// Computes what [`transcode`] would report for an unbounded destination.
///
/// Used to size a destination before converting into it.
///
/// ```rust
/// use utfconv::{Status, TranscodeOptions, form::Utf16Units, form::Utf8Bytes, measure};
///
/// let m = measure::<Utf16Units, Utf8Bytes>(&[0x50, 0x3E8, 0xD852, 0xDDF0], TranscodeOptions::default());
/// assert_eq!((m.status, m.consumed, m.len), (Status::Done, 4, 7));
/// ```
pub fn measure<S: Decode, D: Encode>(src: &[S::Unit], options: TranscodeOptions) -> Measure {
    let mut len = 0;
    let (status, consumed) = run::<S>(src, options, |scalar| {
        len += D::encoded_len(scalar);
        true
    });
    Measure {
        status,
        consumed,
        len,
    }
}
