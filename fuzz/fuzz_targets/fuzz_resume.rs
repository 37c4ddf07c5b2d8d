#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utfconv::{
    MalformedPolicy, Status, TranscodeOptions,
    form::{Decode, Encode, Utf8Bytes, Utf16Bytes, Utf16Units},
    measure, transcode,
};

#[derive(Debug, Arbitrary)]
enum Pair {
    Utf8ToUnits,
    Utf8ToUtf16Le,
    Utf16LeToUtf8,
}

#[derive(Debug, Arbitrary)]
struct Input {
    pair: Pair,
    lossy: bool,
    /// Source chunk sizes, cycled.
    splits: Vec<u8>,
    /// Destination sizes, cycled.
    caps: Vec<u8>,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| match input.pair {
    Pair::Utf8ToUnits => check::<Utf8Bytes, Utf16Units>(&input),
    Pair::Utf8ToUtf16Le => check::<Utf8Bytes, Utf16Bytes>(&input),
    Pair::Utf16LeToUtf8 => check::<Utf16Bytes, Utf8Bytes>(&input),
});

/// A chunked conversion through small destinations must end exactly like one
/// call over the whole input.
fn check<S: Decode<Unit = u8>, D: Encode>(input: &Input)
where
    D::Unit: PartialEq + core::fmt::Debug,
{
    let policy = if input.lossy {
        MalformedPolicy::Replace
    } else {
        MalformedPolicy::Stop
    };
    let complete = TranscodeOptions {
        end_of_stream: true,
        on_malformed: policy,
    };

    let m = measure::<S, D>(&input.data, complete);
    let mut expected = vec![D::Unit::default(); m.len];
    let single = transcode::<S, D>(&input.data, &mut expected, complete);
    assert_eq!((single.status, single.consumed, single.written), (m.status, m.consumed, m.len));

    let mut out = Vec::new();
    let mut pending = Vec::new();
    let mut rest = &input.data[..];
    let mut calls = 0usize;
    let mut status = Status::Done;

    'feed: for step in 0.. {
        let size = input
            .splits
            .get(step % input.splits.len().max(1))
            .map_or(rest.len(), |&s| 1 + usize::from(s));
        let (chunk, tail) = rest.split_at(size.min(rest.len()));
        rest = tail;
        pending.extend_from_slice(chunk);
        let options = TranscodeOptions {
            end_of_stream: rest.is_empty(),
            on_malformed: policy,
        };

        let mut stalled = false;
        loop {
            let cap = if stalled {
                4
            } else {
                input
                    .caps
                    .get(calls % input.caps.len().max(1))
                    .map_or(4, |&c| usize::from(c))
            };
            calls += 1;
            let mut dst = vec![D::Unit::default(); cap];
            let conv = transcode::<S, D>(&pending, &mut dst, options);
            assert!(conv.consumed <= pending.len());
            assert!(conv.written <= cap);
            out.extend_from_slice(&dst[..conv.written]);
            pending.drain(..conv.consumed);
            match conv.status {
                Status::OutputFull => stalled = conv.written == 0,
                Status::NeedInput => {
                    assert!(!options.end_of_stream);
                    break;
                }
                Status::Done => break,
                Status::Malformed(_) => {
                    status = conv.status;
                    break 'feed;
                }
            }
        }
        if rest.is_empty() {
            break;
        }
    }

    assert_eq!(status, single.status);
    assert_eq!(out, expected);
}
