/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use super::{check_eof, ByteBackend};
use crate::error::Result;

/// A [`ByteBackend`] over an open file.
///
/// Unlike [`super::MemBackend`], a file never exposes a contiguous in-memory
/// view of its contents, so [`crate::stream::Stream::to_byte_array`] falls
/// back to seeking to the start and reading the whole file.
#[derive(Debug)]
pub struct FileBackend {
    file: File,
    pos: u64,
    len: u64,
}

impl FileBackend {
    /// Open an existing file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let len = file.metadata()?.len();
        log::debug!("FileBackend: opened {:?} for reading ({len} byte(s))", path.as_ref());
        Ok(Self { file, pos: 0, len })
    }

    /// Open (creating if necessary, truncating otherwise) a file for writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path.as_ref())?;
        log::debug!("FileBackend: opened {:?} for writing", path.as_ref());
        Ok(Self { file, pos: 0, len: 0 })
    }
}

impl ByteBackend for FileBackend {
    fn read_exact(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut out = vec![0u8; n];
        let mut read_total = 0;
        while read_total < n {
            let read = self.file.read(&mut out[read_total..])?;
            if read == 0 {
                break;
            }
            read_total += read;
        }
        check_eof(n, read_total)?;
        self.pos += read_total as u64;
        Ok(out)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.file.write_all(bytes)?;
        self.pos += bytes.len() as u64;
        self.len = self.len.max(self.pos);
        Ok(())
    }

    fn seek(&mut self, pos: u64) -> Result<()> {
        self.file.seek(SeekFrom::Start(pos))?;
        self.pos = pos;
        Ok(())
    }

    fn position(&self) -> u64 {
        self.pos
    }

    fn length(&self) -> u64 {
        self.len
    }
}
