/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Deferred write-back: child streams and the depth-first flush that patches
//! their materialized sizes/offsets back into their parents.
//!
//! A structure with a forward-referenced or size-prefixed field writes a
//! placeholder, attaches a child [`Stream<MemBackend>`](super::ChildStream)
//! for the sub-structure, and installs a write-back handler on that child
//! describing how to patch the placeholder once the child's own size is
//! known. [`Stream::write_back_child_streams`] walks the tree depth-first,
//! post-order, so grandchildren are patched into their parents before those
//! parents are themselves patched into *their* parents.

use super::{ChildStream, Stream};
use crate::backend::ByteBackend;
use crate::error::Result;

/// A deferred patch: seek the target to `anchor`, then hand it to `callback`.
pub struct WriteBackHandler {
    anchor: u64,
    callback: Box<dyn FnOnce(&mut dyn WriteBackTarget) -> Result<()>>,
}

/// The minimal surface a write-back handler needs from whatever stream it
/// is patching — implemented by every [`Stream`] regardless of backend, so
/// a handler installed on one backend type can patch into another.
pub trait WriteBackTarget {
    fn pos(&self) -> u64;
    fn seek(&mut self, pos: u64) -> Result<()>;
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()>;
}

impl<B: ByteBackend> WriteBackTarget for Stream<B> {
    fn pos(&self) -> u64 {
        self.pos()
    }

    fn seek(&mut self, pos: u64) -> Result<()> {
        self.seek(pos)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_bytes(bytes)
    }
}

impl<B: ByteBackend> Stream<B> {
    /// Attach a child stream, to be flushed (and have its own handler run)
    /// the next time this stream's write-back is processed.
    pub fn add_child_stream(&mut self, child: ChildStream) {
        self.children.push(child);
    }

    /// Install this stream's own write-back handler, run once against its
    /// parent the next time the parent's `write_back_child_streams` reaches
    /// this child.
    pub fn set_write_back_handler<F>(&mut self, anchor: u64, callback: F)
    where
        F: FnOnce(&mut dyn WriteBackTarget) -> Result<()> + 'static,
    {
        self.write_back_handler = Some(WriteBackHandler {
            anchor,
            callback: Box::new(callback),
        });
    }

    /// Flush this stream's children depth-first, post-order, then (if this
    /// stream is itself a child with a pending handler) run that handler.
    ///
    /// Called with no arguments on a root stream once its structure has
    /// been fully serialized.
    pub fn write_back_child_streams(&mut self) -> Result<()> {
        self.flush_with_parent(None)
    }

    fn flush_with_parent(&mut self, parent: Option<&mut dyn WriteBackTarget>) -> Result<()> {
        let saved_pos = self.pos();
        let children = std::mem::take(&mut self.children);
        log::trace!("write-back: flushing {} child stream(s)", children.len());
        for mut child in children {
            child.flush_with_parent(Some(self))?;
        }
        self.seek(saved_pos)?;

        if let Some(parent) = parent {
            if let Some(handler) = self.write_back_handler.take() {
                log::trace!("write-back: patching parent at anchor {}", handler.anchor);
                parent.seek(handler.anchor)?;
                (handler.callback)(parent)?;
            }
        }
        Ok(())
    }
}
