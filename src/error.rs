/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Error kinds raised by the stream engine itself.
//!
//! Generated parsers/serializers own a much larger error taxonomy
//! (validation failures, write-phase consistency checks, undecided
//! endianness switches); those are not represented here. This type covers
//! only the failures the engine can itself detect while moving bytes and
//! bits around, so a downstream crate can embed it in a richer error type
//! with `#[from]`.

use thiserror::Error;

/// Errors produced by stream, backend, and processor operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A read asked for more bytes than the backend had left.
    #[error("unexpected end of stream: requested {requested} byte(s), got {obtained}")]
    UnexpectedEof { requested: u64, obtained: u64 },

    /// A byte count was negative or exceeded the 31-bit signed maximum.
    #[error("byte count {0} is out of range")]
    OutOfRange(i64),

    /// An argument violated a precondition of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested variant of an operation is not implemented.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// The requested operation cannot be satisfied for the given input.
    #[error("not supported: {0}")]
    NotSupported(String),

    /// A backend-level I/O failure that does not fit one of the kinds above.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
