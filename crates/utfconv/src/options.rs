/// What a conversion does when it meets ill-formed source data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MalformedPolicy {
    /// Stop in front of the ill-formed sequence without consuming it and
    /// report [`Status::Malformed`](crate::Status::Malformed).
    #[default]
    Stop,
    /// Consume the ill-formed sequence and write U+FFFD in its place.
    ///
    /// The replacement is subject to the same output-space rule as any other
    /// scalar: if it does not fit, the call stops with
    /// [`Status::OutputFull`](crate::Status::OutputFull) in front of the
    /// ill-formed sequence.
    Replace,
}

/// Configuration for a single [`transcode`](crate::transcode) or
/// [`measure`](crate::measure) call.
///
/// The codec functions in [`utf8`](crate::utf8) and [`utf16`](crate::utf16)
/// always use the default options.
///
/// # Examples
///
/// ```rust
/// use utfconv::{
///     MalformedKind, Status, TranscodeOptions, form::Utf16Units, form::Utf8Bytes, transcode,
/// };
///
/// // A trailing high surrogate is only an error once no more input can arrive.
/// let src = [0x0041, 0xD83D];
/// let mut dst = [0u8; 8];
///
/// let open = transcode::<Utf16Units, Utf8Bytes>(&src, &mut dst, TranscodeOptions::default());
/// assert_eq!(open.status, Status::NeedInput);
///
/// let options = TranscodeOptions {
///     end_of_stream: true,
///     ..Default::default()
/// };
/// let closed = transcode::<Utf16Units, Utf8Bytes>(&src, &mut dst, options);
/// assert_eq!(closed.malformed().map(|m| m.kind), Some(MalformedKind::Truncated));
/// assert_eq!((closed.consumed, closed.written), (1, 1));
/// ```
///
/// # Default
///
/// Not end of stream, [`MalformedPolicy::Stop`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TranscodeOptions {
    /// Whether the source slice is the end of the stream.
    ///
    /// When `false`, a source that ends inside a sequence (a UTF-8 lead byte
    /// missing continuation bytes, a high surrogate missing its low half, an
    /// odd trailing byte of UTF-16 bytes) is a resumable stop and reported as
    /// [`Status::NeedInput`](crate::Status::NeedInput). When `true`, the same
    /// tail is ill-formed and reported as
    /// [`MalformedKind::Truncated`](crate::MalformedKind::Truncated).
    ///
    /// The truncated sequence always spans the whole unconsumed tail. For
    /// UTF-16 bytes a high surrogate followed by one odd byte is therefore a
    /// single three-byte sequence, and [`MalformedPolicy::Replace`] writes one
    /// U+FFFD for it.
    ///
    /// # Default
    ///
    /// `false`
    pub end_of_stream: bool,

    /// Handling of ill-formed source data.
    ///
    /// # Default
    ///
    /// [`MalformedPolicy::Stop`]
    pub on_malformed: MalformedPolicy,
}

impl TranscodeOptions {
    /// Options for a source that is complete: end of stream, stop on
    /// malformed input.
    #[must_use]
    pub const fn complete() -> Self {
        Self {
            end_of_stream: true,
            on_malformed: MalformedPolicy::Stop,
        }
    }

    /// Options for a complete source where ill-formed sequences become U+FFFD.
    #[must_use]
    pub const fn lossy() -> Self {
        Self {
            end_of_stream: true,
            on_malformed: MalformedPolicy::Replace,
        }
    }
}
