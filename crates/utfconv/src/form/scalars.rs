use super::{Decode, Decoded, Encode};
use crate::{conversion::Malformed, error::MalformedKind, scalar::is_valid_scalar};

/// Raw Unicode scalar values, one `u32` each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePoints;

impl Decode for CodePoints {
    type Unit = u32;

    #[inline]
    fn decode(src: &[u32]) -> Decoded {
        let value = src[0];
        if is_valid_scalar(value) {
            Decoded::Scalar { value, len: 1 }
        } else {
            Decoded::Malformed(Malformed {
                kind: MalformedKind::InvalidScalar(value),
                len: 1,
            })
        }
    }
}

impl Encode for CodePoints {
    type Unit = u32;

    #[inline]
    fn encoded_len(_scalar: u32) -> usize {
        1
    }

    #[inline]
    fn encode(scalar: u32, dst: &mut [u32]) {
        dst[0] = scalar;
    }
}
