//! Formatting a value and parsing the text back yields the same value.

use pguint::types::{BinaryDecode, BinaryEncode, TextDecode, TextEncode};
use pguint::{IntType, TypeIo};

fn text_round_trip<T>(v: T)
where
    T: TextEncode + TextDecode + PartialEq + std::fmt::Debug + Copy,
{
    let text = v.encode_text();
    assert_eq!(T::decode_text(text.as_bytes()).unwrap(), v, "{text}");
}

/// Values spread across the range of a width, including both ends.
fn samples(max: u64) -> impl Iterator<Item = u64> {
    let step = (max / 4099).max(1);
    (0..=max / step)
        .map(move |i| i * step)
        .chain([1, max - 1, max])
}

#[test]
fn uint1_every_value() {
    for v in 0..=u8::MAX {
        text_round_trip(v);
    }
}

#[test]
fn uint2_every_value() {
    for v in 0..=u16::MAX {
        text_round_trip(v);
    }
}

#[test]
fn uint4_sampled() {
    for v in samples(IntType::Uint4.max_value()) {
        text_round_trip(u32::try_from(v).unwrap());
    }
}

#[test]
fn uint8_sampled() {
    for v in samples(IntType::Uint8.max_value()) {
        text_round_trip(v);
    }
    for shift in 0..64 {
        text_round_trip(1u64 << shift);
    }
}

#[test]
fn int1_every_value() {
    for v in i8::MIN..=i8::MAX {
        text_round_trip(v);
    }
}

#[test]
fn entry_points_round_trip_through_c_strings() {
    let io = TypeIo::default();
    for v in [0u64, 1, 255, 65_535, 4_294_967_295, u64::MAX] {
        let text = io.uint8out(v).unwrap();
        assert_eq!(io.uint8in(Some(text.as_c_str())).unwrap(), v);
    }
    for v in [0u32, 7, u32::MAX] {
        let text = io.uint4out(v).unwrap();
        assert_eq!(io.uint4in(Some(text.as_c_str())).unwrap(), v);
    }
}

#[test]
fn binary_round_trip_at_boundaries() {
    for v in [0u64, 1, u64::MAX / 2, u64::MAX] {
        let mut buf = Vec::new();
        v.encode_binary(&mut buf);
        assert_eq!(buf.len(), IntType::Uint8.size());
        assert_eq!(u64::decode_binary(&buf).unwrap(), v);
    }
    for v in [i8::MIN, -1, 0, i8::MAX] {
        let mut buf = Vec::new();
        v.encode_binary(&mut buf);
        assert_eq!(i8::decode_binary(&buf).unwrap(), v);
    }
}
