//! Resumable transcoding between UTF-8 bytes, UTF-16 code units and Unicode
//! scalar values over caller-supplied, size-bounded buffers.
//!
//! Every conversion consumes a prefix of the source, writes a prefix of the
//! destination and reports both counts in a [`Conversion`]. A call never
//! consumes half of a multi-unit sequence and never writes half of an encoded
//! scalar, so a caller can always resume with the unconsumed remainder and a
//! fresh destination:
//!
//! ```rust
//! use utfconv::{Status, utf8};
//!
//! let src = [0x50, 0x3E8, 0xAFC8, 0x249F0];
//! let mut first = [0u8; 4];
//! let step = utf8::encode_scalars(&src, &mut first);
//! assert_eq!(step.status, Status::OutputFull);
//! assert_eq!((step.consumed, step.written), (2, 3));
//!
//! let mut rest = [0u8; 7];
//! let done = utf8::encode_scalars(&src[step.consumed..], &mut rest);
//! assert!(done.is_ok());
//! assert_eq!(rest, [0xEA, 0xBF, 0x88, 0xF0, 0xA4, 0xA7, 0xB0]);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codec;
mod conversion;
mod error;
mod options;
mod owned;
mod transcode;
mod utf8_string;

pub mod chunk_utils;
pub mod form;
pub mod scalar;
pub mod utf16;
pub mod utf8;

#[cfg(test)]
mod tests;

pub use chunk_utils::{produce_chunks, produce_prefixes};
pub use codec::{Codec, Utf8, Utf16};
pub use conversion::{Conversion, Malformed, Measure, Status};
pub use error::{MalformedKind, TranscodeError};
pub use options::{MalformedPolicy, TranscodeOptions};
pub use owned::{transcode_lossy_to_vec, transcode_to_vec};
pub use scalar::Encoding;
pub use transcode::{measure, transcode};
pub use utf8_string::{Bytes, Utf8String};
