use crate::error::{MalformedKind, TranscodeError};

/// An ill-formed source sequence: what is wrong with it and how many source
/// units it spans.
///
/// Skipping `len` units past the stop point resumes after the bad sequence,
/// which is how a caller substitutes its own replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Malformed {
    /// The rule the sequence breaks.
    pub kind: MalformedKind,
    /// Source units the sequence spans, at least 1.
    pub len: usize,
}

/// How a conversion call ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The whole source was consumed and its whole result written.
    Done,
    /// The next scalar's encoded form does not fit in the remaining
    /// destination. Resume with the unconsumed source and a fresh destination.
    OutputFull,
    /// The source ends inside a sequence. Resume with the unconsumed source
    /// followed by more input.
    NeedInput,
    /// The source holds ill-formed data at the stop point.
    Malformed(Malformed),
}

/// Result of one conversion call.
///
/// `consumed` and `written` count elements of the slices passed in: bytes for
/// byte forms, code units for `u16` slices, scalars for `u32` slices. The
/// first `written` destination elements always hold complete encoded scalars
/// and correspond exactly to the first `consumed` source elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Conversion {
    /// Why the call returned.
    pub status: Status,
    /// Source units consumed.
    pub consumed: usize,
    /// Destination units written.
    pub written: usize,
}

impl Conversion {
    /// Whether the call succeeded: the whole source was consumed and the
    /// whole result written.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.status, Status::Done)
    }

    /// Whether the call stopped early for a reason that more output space or
    /// more input resolves.
    #[must_use]
    pub const fn is_resumable(&self) -> bool {
        matches!(self.status, Status::OutputFull | Status::NeedInput)
    }

    /// The ill-formed sequence the call stopped at, if any.
    #[must_use]
    pub const fn malformed(&self) -> Option<Malformed> {
        match self.status {
            Status::Malformed(malformed) => Some(malformed),
            _ => None,
        }
    }

    /// Converts into `Ok((consumed, written))` on success.
    ///
    /// # Errors
    ///
    /// Any status other than [`Status::Done`] maps to the matching
    /// [`TranscodeError`], carrying `consumed` as the offset.
    pub fn into_result(self) -> Result<(usize, usize), TranscodeError> {
        let offset = self.consumed;
        match self.status {
            Status::Done => Ok((self.consumed, self.written)),
            Status::OutputFull => Err(TranscodeError::OutputFull {
                offset,
                written: self.written,
            }),
            Status::NeedInput => Err(TranscodeError::NeedInput { offset }),
            Status::Malformed(Malformed { kind, .. }) => {
                Err(TranscodeError::Malformed { kind, offset })
            }
        }
    }
}

/// What a conversion with an unbounded destination would report.
///
/// `len` is the number of destination units the first `consumed` source
/// units encode to. `status` is never [`Status::OutputFull`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use]
pub struct Measure {
    /// Why measuring stopped.
    pub status: Status,
    /// Source units consumed.
    pub consumed: usize,
    /// Destination units needed for the consumed source.
    pub len: usize,
}

impl Measure {
    /// Converts into `Ok(len)` when the whole source is convertible.
    ///
    /// # Errors
    ///
    /// [`TranscodeError::Malformed`] or [`TranscodeError::NeedInput`] at the
    /// point where measuring stopped.
    pub fn into_result(self) -> Result<usize, TranscodeError> {
        Conversion {
            status: self.status,
            consumed: self.consumed,
            written: self.len,
        }
        .into_result()
        .map(|(_, len)| len)
    }
}
