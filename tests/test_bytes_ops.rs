/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use structstream::prelude::*;

#[test]
fn ensure_fixed_contents_scenario() {
    let elf_magic = [0x7F, 0x45, 0x4C, 0x46];

    let mut ok = Stream::from_bytes(elf_magic.to_vec());
    assert_eq!(ok.ensure_fixed_contents(&elf_magic).unwrap(), elf_magic);

    let mut bad = Stream::from_bytes(vec![0x7F, 0x45, 0x4C, 0x47]);
    assert!(matches!(
        bad.ensure_fixed_contents(&elf_magic),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn read_bytes_term_scenario() {
    let mut s = Stream::from_bytes(vec![0x41, 0x42, 0x00, 0x43]);
    let out = s.read_bytes_term(0x00, false, true, false).unwrap();
    assert_eq!(out, vec![0x41, 0x42]);
    assert_eq!(s.pos(), 3);
}

#[test]
fn read_bytes_term_can_leave_terminator_unconsumed() {
    let mut s = Stream::from_bytes(vec![0x41, 0x00, 0x43]);
    let out = s.read_bytes_term(0x00, false, false, false).unwrap();
    assert_eq!(out, vec![0x41]);
    assert_eq!(s.pos(), 1);
    assert_eq!(s.read_u1().unwrap(), 0x00);
}

#[test]
fn read_bytes_term_graceful_eos_without_terminator() {
    let mut s = Stream::from_bytes(vec![0x41, 0x42]);
    let out = s.read_bytes_term(0x00, false, true, false).unwrap();
    assert_eq!(out, vec![0x41, 0x42]);
}

#[test]
fn read_bytes_term_errors_on_eos_when_required() {
    let mut s = Stream::from_bytes(vec![0x41, 0x42]);
    assert!(matches!(
        s.read_bytes_term(0x00, false, true, true),
        Err(Error::UnexpectedEof { .. })
    ));
}

#[test]
fn read_bytes_full_reads_remaining() {
    let mut s = Stream::from_bytes(vec![1, 2, 3, 4, 5]);
    s.read_bytes(2).unwrap();
    assert_eq!(s.read_bytes_full().unwrap(), vec![3, 4, 5]);
}

#[test]
fn write_bytes_limit_pads_and_terminates() {
    let mut s = Stream::new_writer(8);
    s.write_bytes_limit(b"hi", 5, 0x00, 0xAA).unwrap();
    assert_eq!(s.into_bytes(), vec![b'h', b'i', 0x00, 0xAA, 0xAA]);
}

#[test]
fn write_bytes_limit_exact_size_has_no_terminator() {
    let mut s = Stream::new_writer(8);
    s.write_bytes_limit(b"abcde", 5, 0x00, 0xAA).unwrap();
    assert_eq!(s.into_bytes(), b"abcde".to_vec());
}

#[test]
fn write_bytes_limit_rejects_oversized_content() {
    let mut s = Stream::new_writer(8);
    assert!(matches!(
        s.write_bytes_limit(b"too long", 3, 0x00, 0x00),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn bytes_strip_right_drops_trailing_pad() {
    assert_eq!(bytes_strip_right(&[1, 2, 0, 0, 0], 0), vec![1, 2]);
}

#[test]
fn bytes_strip_right_of_all_padding_is_empty() {
    assert_eq!(bytes_strip_right(&[0, 0, 0], 0), Vec::<u8>::new());
    assert_eq!(bytes_strip_right(&[], 0), Vec::<u8>::new());
}

#[test]
fn bytes_terminate_includes_terminator_on_request() {
    assert_eq!(bytes_terminate(&[1, 2, 0, 3], 0, true), vec![1, 2, 0]);
    assert_eq!(bytes_terminate(&[1, 2, 0, 3], 0, false), vec![1, 2]);
    assert_eq!(bytes_terminate(&[1, 2, 3], 0, false), vec![1, 2, 3]);
}
