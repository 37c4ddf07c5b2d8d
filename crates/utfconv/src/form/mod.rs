//! The interchange forms a conversion reads from and writes to.
//!
//! Each form is a zero-sized marker type. A source form implements [`Decode`]
//! (read one scalar off the front of a slice), a destination form implements
//! [`Encode`] (write one scalar into a slice of exactly the right length).
//! [`transcode`](crate::transcode) pairs any source with any destination, so
//! the validation and surrogate-pairing rules live here once per form.
//!
//! | Form            | Unit  | Contents                                  |
//! |-----------------|-------|-------------------------------------------|
//! | [`CodePoints`]  | `u32` | one Unicode scalar value per unit         |
//! | [`Utf8Bytes`]   | `u8`  | UTF-8                                     |
//! | [`Utf16Units`]  | `u16` | UTF-16 code units                         |
//! | [`Utf16Bytes`]  | `u8`  | UTF-16 code units, 2 bytes each, little-endian |

mod scalars;
mod utf16;
mod utf8;

pub use scalars::CodePoints;
pub use utf8::Utf8Bytes;
pub use utf16::{Utf16Bytes, Utf16Units};

use crate::conversion::Malformed;

/// Outcome of reading one scalar off the front of a source slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A scalar spanning the first `len` source units.
    #[allow(missing_docs)]
    Scalar { value: u32, len: usize },
    /// The slice ends inside a sequence whose present units are a valid
    /// prefix.
    Incomplete,
    /// The front of the slice is ill-formed.
    Malformed(Malformed),
}

/// A form scalars can be read from.
pub trait Decode {
    /// Element type of a source slice in this form.
    type Unit: Copy;

    /// Reads the scalar at the front of `src`, which is never empty.
    fn decode(src: &[Self::Unit]) -> Decoded;
}

/// A form scalars can be written to.
pub trait Encode {
    /// Element type of a destination slice in this form.
    type Unit: Copy + Default;

    /// Units `scalar` occupies in this form.
    fn encoded_len(scalar: u32) -> usize;

    /// Writes `scalar` into `dst`, whose length is exactly
    /// `Self::encoded_len(scalar)`. `scalar` is always a valid scalar value.
    fn encode(scalar: u32, dst: &mut [Self::Unit]);
}
