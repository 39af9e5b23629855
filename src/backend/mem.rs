/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{check_eof, ByteBackend};
use crate::error::Result;

/// An in-memory, growable [`ByteBackend`].
///
/// Reads past the end of the buffer fail with [`crate::error::Error::UnexpectedEof`];
/// writes past the end grow the buffer. Because the backing storage is a
/// plain `Vec<u8>`, this backend can hand out its contents as a contiguous
/// slice, which is what lets [`crate::stream::Stream::to_byte_array`] skip a
/// seek-and-read-full round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemBackend {
    buf: Vec<u8>,
    pos: usize,
}

impl MemBackend {
    /// Wrap an existing buffer, cursor at the start.
    pub fn new(buf: Vec<u8>) -> Self {
        Self { buf, pos: 0 }
    }

    /// An empty, growable buffer with `capacity` bytes pre-reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            pos: 0,
        }
    }

    /// Consume the backend, returning its buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}

impl ByteBackend for MemBackend {
    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>> {
        check_eof(n, self.buf.len().saturating_sub(self.pos))?;
        let out = self.buf[self.pos..self.pos + n].to_vec();
        self.pos += n;
        Ok(out)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self.pos + bytes.len();
        if end > self.buf.len() {
            self.buf.resize(end, 0);
        }
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
        log::trace!("MemBackend: wrote {} byte(s), position now {}", bytes.len(), self.pos);
        Ok(())
    }

    fn seek(&mut self, pos: u64) -> Result<()> {
        self.pos = pos as usize;
        Ok(())
    }

    fn position(&self) -> u64 {
        self.pos as u64
    }

    fn length(&self) -> u64 {
        self.buf.len() as u64
    }

    fn as_contiguous(&self) -> Option<&[u8]> {
        Some(&self.buf)
    }
}
