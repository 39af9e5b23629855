/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Byte-array processors: XOR, circular rotate, and zlib (de)compression.
//!
//! These operate on whole byte arrays rather than a [`crate::stream::Stream`]
//! — generated code reads/writes the raw bytes through a stream, then runs
//! them through one of these before/after interpreting them further.

use std::io::{Read, Write};

use flate2::write::DeflateEncoder;
use flate2::{read::DeflateDecoder, Compression};

use crate::error::{Error, Result};

/// XOR every byte of `data` with a single repeating key byte.
pub fn process_xor_byte(data: &[u8], key: u8) -> Vec<u8> {
    data.iter().map(|b| b ^ key).collect()
}

/// XOR every byte of `data` with `key`, repeating `key` cyclically.
pub fn process_xor_bytes(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .enumerate()
        .map(|(i, b)| b ^ key[i % key.len()])
        .collect()
}

/// Circularly rotate every byte of `data` left by `amount` bits.
///
/// `amount` must be in `-7..=7` (negative values rotate right); only
/// `group_size == 1` (byte-at-a-time rotation) is implemented.
pub fn process_rotate_left(data: &[u8], amount: i32, group_size: usize) -> Result<Vec<u8>> {
    if group_size != 1 {
        return Err(Error::NotImplemented(format!(
            "rotate with group size {group_size} (only 1 is supported)"
        )));
    }
    if !(-7..=7).contains(&amount) {
        return Err(Error::InvalidArgument(format!(
            "rotate amount {amount} out of range -7..=7"
        )));
    }
    let amt = (if amount < 0 { amount + 8 } else { amount }) as u32;
    Ok(data
        .iter()
        .map(|&b| {
            let wide = u16::from(b);
            ((wide << amt) | (wide >> (8 - amt))) as u8
        })
        .collect())
}

/// Parse a zlib-framed (RFC 1950) DEFLATE payload, returning the inflated
/// bytes. The trailing Adler-32 footer is consumed but never verified.
pub fn process_zlib(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < 2 {
        return Err(Error::UnexpectedEof {
            requested: 2,
            obtained: data.len() as u64,
        });
    }
    let cmf = data[0];
    let flg = data[1];
    if cmf & 0x0F != 0x08 {
        return Err(Error::NotSupported(format!(
            "zlib compression method {} (only method 8, DEFLATE, is supported)",
            cmf & 0x0F
        )));
    }
    let header_len = if flg & 0x20 != 0 { 6 } else { 2 };
    if data.len() < header_len + 4 {
        return Err(Error::UnexpectedEof {
            requested: (header_len + 4) as u64,
            obtained: data.len() as u64,
        });
    }
    let body = &data[header_len..data.len() - 4];
    let mut decoder = DeflateDecoder::new(body);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    log::trace!(
        "process_zlib: {} compressed byte(s) -> {} inflated byte(s)",
        body.len(),
        out.len()
    );
    Ok(out)
}

/// Synthesize a zlib container (RFC 1950) wrapping a fresh DEFLATE encoding
/// of `data`, with a real Adler-32 footer.
///
/// Uses a fixed 32 KiB window (`CMF = 0x78`) and "optimal compression, no
/// preset dictionary" flags (`FLG = 0xDA`), matching what the reference
/// runtime emits.
pub fn unprocess_zlib(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;

    let (s1, s2) = adler32(data);
    let checksum = (s2 << 16) | s1;

    let mut out = Vec::with_capacity(2 + compressed.len() + 4);
    out.push(0x78);
    out.push(0xDA);
    out.extend_from_slice(&compressed);
    out.extend_from_slice(&checksum.to_be_bytes());
    log::trace!(
        "unprocess_zlib: {} byte(s) -> {} framed byte(s)",
        data.len(),
        out.len()
    );
    Ok(out)
}

/// Adler-32 checksum, returned as the `(s1, s2)` pair the zlib footer packs
/// as `(s2 << 16) | s1`.
fn adler32(data: &[u8]) -> (u32, u32) {
    const MOD_ADLER: u32 = 65521;
    let mut s1: u32 = 1;
    let mut s2: u32 = 0;
    for &b in data {
        s1 = (s1 + u32::from(b)) % MOD_ADLER;
        s2 = (s2 + s1) % MOD_ADLER;
    }
    (s1, s2)
}
