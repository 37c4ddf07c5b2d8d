use alloc::{boxed::Box, string::String, vec::Vec};
use core::{fmt, iter::FusedIterator, ops::Index};

use bstr::BStr;

use crate::{
    error::TranscodeError,
    form::{CodePoints, Utf8Bytes, Utf16Units},
    owned::{transcode_lossy_to_vec, transcode_to_vec},
};

/// An immutable, owned UTF-8 string with byte-granular access.
///
/// The contents are well-formed UTF-8 by construction and never change
/// afterwards. Length, indexing and iteration all work on bytes.
///
/// ```rust
/// use utfconv::Utf8String;
///
/// let s = Utf8String::from_utf16(&[0x50, 0x3E8, 0xD852, 0xDDF0])?;
/// assert_eq!(s.len(), 7);
/// assert_eq!(s[1], 0xCF);
/// assert_eq!(s.iter().last(), Some(0xB0));
/// assert_eq!(s, "P\u{3E8}\u{249F0}");
/// # Ok::<(), utfconv::TranscodeError>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Utf8String {
    bytes: Box<[u8]>,
}

impl Utf8String {
    /// Builds a string from UTF-16 code units.
    ///
    /// # Errors
    ///
    /// [`TranscodeError::Malformed`] for an unpaired surrogate anywhere in
    /// `units`, a trailing high surrogate included.
    pub fn from_utf16(units: &[u16]) -> Result<Self, TranscodeError> {
        transcode_to_vec::<Utf16Units, Utf8Bytes>(units).map(Self::from_vec)
    }

    /// Builds a string from scalar values.
    ///
    /// # Errors
    ///
    /// [`TranscodeError::Malformed`] for a surrogate or a value above
    /// U+10FFFF.
    pub fn from_scalars(scalars: &[u32]) -> Result<Self, TranscodeError> {
        transcode_to_vec::<CodePoints, Utf8Bytes>(scalars).map(Self::from_vec)
    }

    /// Builds a string from bytes after checking they are UTF-8.
    ///
    /// # Errors
    ///
    /// [`TranscodeError::Malformed`] at the first ill-formed sequence.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, TranscodeError> {
        transcode_to_vec::<Utf8Bytes, Utf8Bytes>(bytes).map(Self::from_vec)
    }

    /// `bytes` must be well-formed UTF-8.
    fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the string has no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The byte at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Iterates over the bytes from the start.
    pub fn iter(&self) -> Bytes<'_> {
        Bytes {
            inner: self.bytes.iter(),
        }
    }

    /// The UTF-8 bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The contents as a `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // SAFETY: every constructor either validates the bytes as UTF-8 or
        // produces them with the UTF-8 encoder, and they are never mutated.
        unsafe { core::str::from_utf8_unchecked(&self.bytes) }
    }

    /// The contents as a byte string, for `bstr`'s search and formatting
    /// methods.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(&self.bytes)
    }

    /// Re-encodes the string as UTF-16 code units.
    #[must_use]
    pub fn to_utf16(&self) -> Vec<u16> {
        transcode_lossy_to_vec::<Utf8Bytes, Utf16Units>(&self.bytes)
    }
}

impl From<&str> for Utf8String {
    fn from(s: &str) -> Self {
        Self {
            bytes: Box::from(s.as_bytes()),
        }
    }
}

impl From<String> for Utf8String {
    fn from(s: String) -> Self {
        Self {
            bytes: s.into_boxed_str().into_boxed_bytes(),
        }
    }
}

impl Index<usize> for Utf8String {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.bytes[index]
    }
}

impl PartialEq<str> for Utf8String {
    fn eq(&self, other: &str) -> bool {
        *self.bytes == *other.as_bytes()
    }
}

impl PartialEq<&str> for Utf8String {
    fn eq(&self, other: &&str) -> bool {
        *self.bytes == *other.as_bytes()
    }
}

impl fmt::Debug for Utf8String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_bstr(), f)
    }
}

impl fmt::Display for Utf8String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bstr(), f)
    }
}

impl<'a> IntoIterator for &'a Utf8String {
    type Item = u8;
    type IntoIter = Bytes<'a>;

    fn into_iter(self) -> Bytes<'a> {
        self.iter()
    }
}

/// Forward iterator over the bytes of a [`Utf8String`].
#[derive(Debug, Clone)]
pub struct Bytes<'a> {
    inner: core::slice::Iter<'a, u8>,
}

impl Iterator for Bytes<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Bytes<'_> {}

impl FusedIterator for Bytes<'_> {}

#[cfg(feature = "serde")]
impl serde::Serialize for Utf8String {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Utf8String {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
