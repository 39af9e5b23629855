/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Runtime support for generated binary-format parsers and serializers.
//!
//! This crate is the engine generated code calls into: a bidirectional
//! bit/byte [`stream::Stream`], byte-array [`processors`], and a handful of
//! [`util`] helpers. It does not itself know about any particular binary
//! format — it only provides the primitives a code generator's output is
//! built from (unaligned bit reads/writes, endianness-normalized integer
//! and float I/O, terminator-bounded byte reads, and the deferred
//! write-back protocol that lets a parent structure's size-prefix fields be
//! patched in after its variable-sized children have been serialized).

pub mod backend;
pub mod error;
pub mod processors;
pub mod stream;
pub mod util;

/// Re-exports the common entry points: [`Stream`] and its backend-specific
/// constructors, plus [`Error`].
pub mod prelude {
    pub use crate::backend::{ByteBackend, FileBackend, MemBackend};
    pub use crate::error::{Error, Result};
    pub use crate::processors::*;
    pub use crate::stream::{ChildStream, FileStream, MemStream, Stream, WriteBackHandler, WriteBackTarget};
    pub use crate::util::*;
}

pub use error::{Error, Result};
pub use stream::{ChildStream, FileStream, MemStream, Stream};
