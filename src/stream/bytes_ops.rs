/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Length- and terminator-delimited byte reads/writes, and the small
//! slice-level helpers (`strip_right`/`terminate`) they're built on.

use super::Stream;
use crate::backend::ByteBackend;
use crate::error::{Error, Result};

/// Largest byte count `read_bytes` accepts, mirroring a 31-bit signed max.
pub const MAX_BYTE_COUNT: i64 = i32::MAX as i64;

impl<B: ByteBackend> Stream<B> {
    /// Read exactly `count` bytes, byte-aligning first.
    pub fn read_bytes(&mut self, count: i64) -> Result<Vec<u8>> {
        if count < 0 || count > MAX_BYTE_COUNT {
            return Err(Error::OutOfRange(count));
        }
        self.byte_align()?;
        self.backend.read_exact(count as usize)
    }

    /// Read from the current position to the end of the stream.
    pub fn read_bytes_full(&mut self) -> Result<Vec<u8>> {
        self.byte_align()?;
        let remaining = self.backend.length().saturating_sub(self.backend.position());
        self.backend.read_exact(remaining as usize)
    }

    /// Read bytes up to (and optionally including/consuming) a terminator.
    ///
    /// If the terminator is never found before the end of the stream:
    /// raises [`Error::UnexpectedEof`] when `eos_error` is set, otherwise
    /// returns everything read so far (a "graceful EOS").
    pub fn read_bytes_term(
        &mut self,
        term: u8,
        include_term: bool,
        consume_term: bool,
        eos_error: bool,
    ) -> Result<Vec<u8>> {
        self.byte_align()?;
        let mut out = Vec::new();
        loop {
            if self.backend.position() >= self.backend.length() {
                if eos_error {
                    return Err(Error::UnexpectedEof {
                        requested: 1,
                        obtained: 0,
                    });
                }
                break;
            }
            let byte = self.backend.read_exact(1)?[0];
            if byte == term {
                if include_term {
                    out.push(byte);
                }
                if !consume_term {
                    self.backend.seek(self.backend.position() - 1)?;
                }
                break;
            }
            out.push(byte);
        }
        Ok(out)
    }

    /// Read exactly `expected.len()` bytes and require them to match.
    ///
    /// A mismatch is reported as [`Error::InvalidArgument`], carrying the
    /// stream position the fixed content started at.
    pub fn ensure_fixed_contents(&mut self, expected: &[u8]) -> Result<Vec<u8>> {
        let at = self.pos();
        let actual = self.read_bytes(expected.len() as i64)?;
        if actual != expected {
            return Err(Error::InvalidArgument(format!(
                "fixed contents mismatch at position {at}: expected {expected:02x?}, got {actual:02x?}"
            )));
        }
        Ok(actual)
    }

    /// Write-align, then write `bytes` verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_align_to_byte()?;
        self.backend.write(bytes)
    }

    /// Write-align, then write `bytes` padded/terminated out to exactly
    /// `size` bytes.
    ///
    /// `bytes.len() == size` writes verbatim with no terminator;
    /// `bytes.len() < size` appends one `term` byte followed by pad bytes;
    /// `bytes.len() > size` fails with [`Error::InvalidArgument`].
    pub fn write_bytes_limit(&mut self, bytes: &[u8], size: usize, term: u8, pad: u8) -> Result<()> {
        if bytes.len() > size {
            return Err(Error::InvalidArgument(format!(
                "content length {} exceeds limit {size}",
                bytes.len()
            )));
        }
        self.write_align_to_byte()?;
        self.backend.write(bytes)?;
        if bytes.len() < size {
            self.backend.write(&[term])?;
            let pad_count = size - bytes.len() - 1;
            if pad_count > 0 {
                self.backend.write(&vec![pad; pad_count])?;
            }
        }
        Ok(())
    }
}

/// Return the prefix of `src` with trailing `pad` bytes removed.
pub fn bytes_strip_right(src: &[u8], pad: u8) -> Vec<u8> {
    let end = src.iter().rposition(|&b| b != pad).map_or(0, |i| i + 1);
    src[..end].to_vec()
}

/// Return the prefix of `src` up to the first occurrence of `term`
/// (inclusive if `include_term` is set), or the whole slice if absent.
pub fn bytes_terminate(src: &[u8], term: u8, include_term: bool) -> Vec<u8> {
    match src.iter().position(|&b| b == term) {
        Some(i) => src[..if include_term { i + 1 } else { i }].to_vec(),
        None => src.to_vec(),
    }
}
