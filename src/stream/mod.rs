/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The bidirectional bit/byte stream engine.
//!
//! [`Stream`] composes a [`ByteBackend`] with a small residual-bit buffer
//! (up to 7 bits, carried across byte-aligned operations) and, in write
//! mode, a tree of child streams used for deferred write-back. See the
//! submodules for the operation families: [`bits`] for unaligned bit I/O,
//! [`primitive`] for aligned integer/float I/O, [`bytes_ops`] for
//! length/terminator-delimited byte I/O, and [`writeback`] for the
//! child-stream flush protocol.

mod bits;
mod bytes_ops;
mod primitive;
mod writeback;

pub use writeback::{WriteBackHandler, WriteBackTarget};

use std::path::Path;

use crate::backend::{ByteBackend, FileBackend, MemBackend};
use crate::error::Result;

/// A handle for deferred write-back: every [`Stream`] regardless of its
/// backend type can play the role of "child" once it is materialized as a
/// `Stream<MemBackend>`, since that is the only concrete shape a yet-unsized
/// sub-structure can take while its containing structure is still being
/// written. See [`writeback`] for the rationale.
pub type ChildStream = Stream<MemBackend>;

/// A stream over an in-memory backend, named so call sites building or
/// returning one don't have to spell out `Stream<MemBackend>`.
pub type MemStream = ChildStream;

/// A stream over a file backend.
pub type FileStream = Stream<FileBackend>;

/// A readable or writable stream of bits and bytes over some [`ByteBackend`].
pub struct Stream<B: ByteBackend> {
    backend: B,
    /// Number of valid residual bits held outside the backend, in `0..=7`.
    bits_left: u8,
    /// The residual bits themselves, right-aligned (only the low
    /// `bits_left` bits are meaningful).
    bits: u64,
    /// Packing direction of the most recent bit operation: `true` = LSB
    /// first (little-endian bit order), `false` = MSB first.
    bits_le: bool,
    /// Overall stream mode: `true` while writing, `false` while reading.
    write_mode: bool,
    write_back_handler: Option<WriteBackHandler>,
    children: Vec<ChildStream>,
}

impl<B: ByteBackend> Stream<B> {
    fn new(backend: B, write_mode: bool) -> Self {
        Self {
            backend,
            bits_left: 0,
            bits: 0,
            bits_le: false,
            write_mode,
            write_back_handler: None,
            children: Vec::new(),
        }
    }

    /// The logical cursor position.
    ///
    /// Equal to the backend's position, plus one in write mode when a
    /// partial byte is still buffered (it occupies a byte's worth of space
    /// that has not yet been committed to the backend).
    pub fn pos(&self) -> u64 {
        self.backend.position() + u64::from(self.write_mode && self.bits_left > 0)
    }

    /// True once the stream has reached, or has no more than a trailing
    /// partial byte left before, the end of the backend.
    pub fn is_eof(&self) -> bool {
        self.backend.position() >= self.backend.length() && (self.write_mode || self.bits_left == 0)
    }

    /// True while the stream is open for writing.
    pub fn is_write_mode(&self) -> bool {
        self.write_mode
    }

    /// Total length of the underlying backend, in bytes.
    pub fn len(&self) -> u64 {
        self.backend.length()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the cursor to an absolute byte offset, aligning first.
    ///
    /// A pending write-mode partial byte is flushed before the seek; a
    /// pending read-mode partial byte is simply discarded.
    pub fn seek(&mut self, pos: u64) -> Result<()> {
        if self.write_mode {
            self.write_align_to_byte()?;
        } else {
            self.align_to_byte();
        }
        self.backend.seek(pos)
    }

    /// Return the whole contents of the stream as an owned byte array.
    ///
    /// When the backend exposes a contiguous buffer whose length matches
    /// the stream's logical length, that buffer is cloned directly.
    /// Otherwise the stream seeks to the start, reads everything, and
    /// restores the original position.
    pub fn to_byte_array(&mut self) -> Result<Vec<u8>> {
        let len = self.backend.length();
        if let Some(buf) = self.backend.as_contiguous() {
            if buf.len() as u64 == len {
                return Ok(buf.to_vec());
            }
        }
        let saved = self.backend.position();
        self.backend.seek(0)?;
        let out = self.backend.read_exact(len as usize)?;
        self.backend.seek(saved)?;
        Ok(out)
    }
}

impl<B: ByteBackend> Drop for Stream<B> {
    fn drop(&mut self) {
        if self.write_mode && self.bits_left > 0 {
            if let Err(err) = self.write_align_to_byte() {
                log::error!("Stream: failed to flush partial byte on drop: {err}");
            }
        }
    }
}

impl Stream<MemBackend> {
    /// Take ownership of an existing buffer, read mode, cursor at 0.
    pub fn from_bytes(data: Vec<u8>) -> Self {
        log::trace!("Stream::from_bytes: {} byte(s)", data.len());
        Self::new(MemBackend::new(data), false)
    }

    /// Copy a borrowed buffer into an owned in-memory backend, read mode.
    pub fn from_slice(data: &[u8]) -> Self {
        Self::from_bytes(data.to_vec())
    }

    /// An empty, growable in-memory backend, write mode.
    pub fn new_writer(capacity_hint: usize) -> Self {
        Self::new(MemBackend::with_capacity(capacity_hint), true)
    }

    /// Consume the stream, returning its backing buffer.
    ///
    /// `Stream`'s `Drop` impl forbids destructuring by value, so the pending
    /// partial byte (if any) is flushed manually before lifting the backend
    /// out of a now-empty placeholder.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.write_mode && self.bits_left > 0 {
            let _ = self.write_align_to_byte();
        }
        std::mem::take(&mut self.backend).into_vec()
    }
}

impl Stream<FileBackend> {
    /// Open a file read-only, read mode.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(FileBackend::open(path)?, false))
    }

    /// Open (creating if necessary) a file for writing, write mode.
    pub fn from_file_writer(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(FileBackend::create(path)?, true))
    }
}
