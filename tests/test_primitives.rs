/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use structstream::prelude::*;

macro_rules! round_trip {
    ($write:ident, $read:ident, $value:expr) => {{
        let mut w = Stream::new_writer(8);
        w.$write($value).unwrap();
        let mut r = Stream::from_bytes(w.into_bytes());
        assert_eq!(r.$read().unwrap(), $value);
    }};
}

#[test]
fn unsigned_round_trip_all_widths() {
    round_trip!(write_u1, read_u1, 0xAB_u8);
    round_trip!(write_u2be, read_u2be, 0xABCD_u16);
    round_trip!(write_u2le, read_u2le, 0xABCD_u16);
    round_trip!(write_u4be, read_u4be, 0xDEAD_BEEF_u32);
    round_trip!(write_u4le, read_u4le, 0xDEAD_BEEF_u32);
    round_trip!(write_u8be, read_u8be, 0x0123_4567_89AB_CDEF_u64);
    round_trip!(write_u8le, read_u8le, 0x0123_4567_89AB_CDEF_u64);
}

#[test]
fn signed_round_trip_all_widths() {
    round_trip!(write_s1, read_s1, -42_i8);
    round_trip!(write_s2be, read_s2be, -1234_i16);
    round_trip!(write_s2le, read_s2le, -1234_i16);
    round_trip!(write_s4be, read_s4be, -123_456_789_i32);
    round_trip!(write_s4le, read_s4le, -123_456_789_i32);
    round_trip!(write_s8be, read_s8be, i64::MIN);
    round_trip!(write_s8le, read_s8le, i64::MIN);
}

#[test]
fn float_round_trip() {
    round_trip!(write_f4be, read_f4be, std::f32::consts::PI);
    round_trip!(write_f4le, read_f4le, std::f32::consts::PI);
    round_trip!(write_f8be, read_f8be, std::f64::consts::E);
    round_trip!(write_f8le, read_f8le, std::f64::consts::E);
}

#[test]
fn big_and_little_endian_disagree_on_byte_order() {
    let mut be = Stream::new_writer(2);
    be.write_u2be(0x1234).unwrap();
    assert_eq!(be.into_bytes(), vec![0x12, 0x34]);

    let mut le = Stream::new_writer(2);
    le.write_u2le(0x1234).unwrap();
    assert_eq!(le.into_bytes(), vec![0x34, 0x12]);
}

#[test]
fn primitive_reads_byte_align_first() {
    let mut s = Stream::from_bytes(vec![0xFF, 0x00, 0x01]);
    s.read_bits_be(3).unwrap();
    assert_eq!(s.read_u1().unwrap(), 0x00, "read_u1 discards the leftover 5 bits and reads byte 1");
    assert_eq!(s.read_u1().unwrap(), 0x01);
}

#[test]
fn unexpected_eof_on_short_read() {
    let mut s = Stream::from_bytes(vec![0x01]);
    assert!(matches!(s.read_u4be(), Err(Error::UnexpectedEof { .. })));
}
