use thiserror::Error;

/// Why a source sequence was rejected.
///
/// Every kind describes data that can never become valid no matter what
/// follows it, except [`MalformedKind::Truncated`], which is only produced once
/// the caller has asserted end of stream.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MalformedKind {
    /// A scalar-value source unit that is a surrogate or above U+10FFFF.
    #[error("invalid scalar value {0:#X}")]
    InvalidScalar(u32),
    /// A high surrogate followed by something other than a low surrogate.
    #[error("high surrogate {0:#06X} not followed by a low surrogate")]
    UnpairedHighSurrogate(u16),
    /// A low surrogate with no high surrogate in front of it.
    #[error("low surrogate {0:#06X} not preceded by a high surrogate")]
    UnpairedLowSurrogate(u16),
    /// A continuation byte or `F5..=FF` where a sequence should start.
    #[error("invalid UTF-8 lead byte {0:#04X}")]
    InvalidLeadByte(u8),
    /// A byte where a continuation byte was required.
    #[error("invalid UTF-8 continuation byte {0:#04X}")]
    InvalidContinuation(u8),
    /// A sequence longer than the shortest encoding of its scalar, including
    /// the lead bytes `C0` and `C1`.
    #[error("overlong UTF-8 encoding")]
    Overlong,
    /// A three-byte sequence for U+D800..=U+DFFF.
    #[error("UTF-8 encoded surrogate")]
    EncodedSurrogate,
    /// A four-byte sequence for a value above U+10FFFF.
    #[error("UTF-8 sequence above U+10FFFF")]
    OutOfRange,
    /// The source ended inside a sequence at end of stream.
    #[error("input ends inside a sequence")]
    Truncated,
}

/// A conversion that did not run to completion, as a `Result` error.
///
/// `offset` is always the number of source units consumed before the stop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeError {
    /// Ill-formed source data.
    #[error("{kind} at offset {offset}")]
    Malformed {
        /// What is wrong with the sequence.
        kind: MalformedKind,
        /// Source units consumed before it.
        offset: usize,
    },
    /// The destination filled up.
    #[error("output full after {written} units at offset {offset}")]
    OutputFull {
        /// Source units consumed.
        offset: usize,
        /// Destination units written.
        written: usize,
    },
    /// The source ended inside a sequence.
    #[error("input ends inside a sequence at offset {offset}")]
    NeedInput {
        /// Source units consumed.
        offset: usize,
    },
}

impl TranscodeError {
    /// Source units consumed before the stop.
    #[must_use]
    pub fn offset(&self) -> usize {
        match *self {
            TranscodeError::Malformed { offset, .. }
            | TranscodeError::OutputFull { offset, .. }
            | TranscodeError::NeedInput { offset } => offset,
        }
    }
}
