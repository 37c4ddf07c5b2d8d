//! Classification of Unicode scalar values and UTF-16 surrogates.
//!
//! Everything here is a pure function of its argument. Callers decide how to
//! react to an invalid scalar; nothing in this module fails.

/// Largest Unicode code point.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

/// U+FFFD, substituted for ill-formed input under
/// [`MalformedPolicy::Replace`](crate::MalformedPolicy::Replace).
pub const REPLACEMENT: u32 = 0xFFFD;

/// The two encoded forms a scalar can be measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Lengths in bytes, 1 to 4.
    Utf8,
    /// Lengths in 16-bit code units, 1 or 2.
    Utf16,
}

/// Whether `value` is a Unicode scalar value: a code point outside the
/// surrogate range.
#[inline]
#[must_use]
pub const fn is_valid_scalar(value: u32) -> bool {
    value < 0xD800 || (value > 0xDFFF && value <= MAX_SCALAR)
}

/// Number of units `scalar` occupies in `encoding`.
///
/// The length depends only on the numeric range of `scalar`; the value is not
/// validated.
#[inline]
#[must_use]
pub const fn encoded_len(scalar: u32, encoding: Encoding) -> usize {
    match encoding {
        Encoding::Utf8 => utf8_len(scalar),
        Encoding::Utf16 => utf16_len(scalar),
    }
}

#[inline]
pub(crate) const fn utf8_len(scalar: u32) -> usize {
    match scalar {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        _ => 4,
    }
}

#[inline]
pub(crate) const fn utf16_len(scalar: u32) -> usize {
    if scalar < 0x1_0000 { 1 } else { 2 }
}

/// Whether `unit` is a leading (high) surrogate, U+D800 to U+DBFF.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Whether `unit` is a trailing (low) surrogate, U+DC00 to U+DFFF.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Whether `unit` is either half of a surrogate pair.
#[inline]
#[must_use]
pub const fn is_surrogate(unit: u16) -> bool {
    unit & 0xF800 == 0xD800
}

/// Joins a high and a low surrogate into the scalar they encode.
///
/// The caller guarantees that `high` and `low` come from the respective
/// surrogate ranges.
#[inline]
#[must_use]
pub const fn combine_surrogates(high: u16, low: u16) -> u32 {
    debug_assert!(is_high_surrogate(high) && is_low_surrogate(low));
    0x1_0000 + (((high as u32) - 0xD800) << 10) + ((low as u32) - 0xDC00)
}

/// Splits a supplementary-plane scalar (U+10000 and up) into its surrogate
/// pair.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn split_surrogates(scalar: u32) -> (u16, u16) {
    debug_assert!(scalar >= 0x1_0000 && scalar <= MAX_SCALAR);
    let offset = scalar - 0x1_0000;
    (
        0xD800 | (offset >> 10) as u16,
        0xDC00 | (offset & 0x3FF) as u16,
    )
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0x00, 1, 1)]
    #[case(0x7F, 1, 1)]
    #[case(0x80, 2, 1)]
    #[case(0x7FF, 2, 1)]
    #[case(0x800, 3, 1)]
    #[case(0xD7FF, 3, 1)]
    #[case(0xE000, 3, 1)]
    #[case(0xFFFF, 3, 1)]
    #[case(0x1_0000, 4, 2)]
    #[case(0x10_FFFF, 4, 2)]
    fn range_boundaries(#[case] scalar: u32, #[case] utf8: usize, #[case] utf16: usize) {
        assert_eq!(encoded_len(scalar, Encoding::Utf8), utf8);
        assert_eq!(encoded_len(scalar, Encoding::Utf16), utf16);
    }

    #[rstest]
    #[case(0xD7FF, true)]
    #[case(0xD800, false)]
    #[case(0xDBFF, false)]
    #[case(0xDC00, false)]
    #[case(0xDFFF, false)]
    #[case(0xE000, true)]
    #[case(0x10_FFFF, true)]
    #[case(0x11_0000, false)]
    #[case(u32::MAX, false)]
    fn scalar_validity(#[case] value: u32, #[case] valid: bool) {
        assert_eq!(is_valid_scalar(value), valid);
    }

    #[quickcheck]
    fn agrees_with_char(value: u32) -> bool {
        let value = value % 0x11_0100;
        match char::from_u32(value) {
            Some(c) => {
                is_valid_scalar(value)
                    && encoded_len(value, Encoding::Utf8) == c.len_utf8()
                    && encoded_len(value, Encoding::Utf16) == c.len_utf16()
            }
            None => !is_valid_scalar(value),
        }
    }

    #[test]
    fn surrogate_pair_roundtrip() {
        assert_eq!(split_surrogates(0x2_49F0), (0xD852, 0xDDF0));
        assert_eq!(combine_surrogates(0xD852, 0xDDF0), 0x2_49F0);
        assert_eq!(split_surrogates(0x10_FFFF), (0xDBFF, 0xDFFF));
        assert!(is_surrogate(0xD800) && is_surrogate(0xDFFF));
        assert!(!is_surrogate(0xD7FF) && !is_surrogate(0xE000));
        assert!(is_high_surrogate(0xDBFF) && !is_high_surrogate(0xDC00));
        assert!(is_low_surrogate(0xDC00) && !is_low_surrogate(0xDBFF));
    }
}
