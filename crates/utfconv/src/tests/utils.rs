use alloc::{vec, vec::Vec};

use crate::{
    MalformedPolicy, Status, TranscodeOptions,
    form::{Decode, Encode},
    transcode,
};

/// Cuts `src` into chunks whose sizes are derived from `splits`; whatever
/// the splits leave over becomes the last chunk.
pub fn split_by<'a, T>(src: &'a [T], splits: &[usize]) -> Vec<&'a [T]> {
    let mut chunks = Vec::new();
    let mut rest = src;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let size = 1 + (s % rest.len());
        let (chunk, tail) = rest.split_at(size);
        chunks.push(chunk);
        rest = tail;
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}

/// Streams `chunks` through [`transcode`] the way a caller with small
/// buffers would: unconsumed source is carried into the next call, and each
/// destination buffer has the next size from `caps` (cycled).
///
/// A destination too small for even one scalar is retried with room for
/// four units. The last chunk is sent with end of stream asserted. Returns
/// everything written and the status the stream ended with.
pub fn drive<S, D>(
    chunks: &[&[S::Unit]],
    caps: &[usize],
    on_malformed: MalformedPolicy,
) -> (Vec<D::Unit>, Status)
where
    S: Decode,
    D: Encode,
{
    assert!(!caps.is_empty());
    let mut out = Vec::new();
    let mut pending: Vec<S::Unit> = Vec::new();
    let mut calls = 0;

    for (i, chunk) in chunks.iter().enumerate() {
        pending.extend_from_slice(chunk);
        let options = TranscodeOptions {
            end_of_stream: i + 1 == chunks.len(),
            on_malformed,
        };
        let mut stalled = false;
        loop {
            let cap = if stalled { 4 } else { caps[calls % caps.len()] };
            calls += 1;
            let mut buf = vec![D::Unit::default(); cap];
            let conv = transcode::<S, D>(&pending, &mut buf, options);
            out.extend_from_slice(&buf[..conv.written]);
            pending.drain(..conv.consumed);
            match conv.status {
                Status::OutputFull => stalled = conv.written == 0,
                Status::Done | Status::NeedInput => break,
                Status::Malformed(_) => return (out, conv.status),
            }
        }
    }
    (out, Status::Done)
}

/// One call over the whole source with a destination of exactly the
/// measured size.
pub fn single_shot<S, D>(src: &[S::Unit], on_malformed: MalformedPolicy) -> (Vec<D::Unit>, Status)
where
    S: Decode,
    D: Encode,
{
    let options = TranscodeOptions {
        end_of_stream: true,
        on_malformed,
    };
    let len = crate::measure::<S, D>(src, options).len;
    let mut out = vec![D::Unit::default(); len];
    let conv = transcode::<S, D>(src, &mut out, options);
    assert_eq!(conv.written, len);
    (out, conv.status)
}

#[test]
fn split_by_covers_source() {
    let src = [1, 2, 3, 4, 5, 6, 7];
    let chunks = split_by(&src, &[0, 9, 1]);
    assert_eq!(chunks, vec![&src[..1], &src[1..5], &src[5..7]]);
    assert!(split_by::<u8>(&[], &[3]).is_empty());
}
