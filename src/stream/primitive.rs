/*
 * SPDX-FileCopyrightText: 2026 structstream contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Byte-aligned integer and float I/O.
//!
//! Every operation here byte-aligns first (flushing a pending write-mode
//! partial byte, or discarding a pending read-mode one), then reads/writes
//! exactly the declared width and reinterprets it in the declared
//! endianness.

use super::Stream;
use crate::backend::ByteBackend;
use crate::error::Result;

impl<B: ByteBackend> Stream<B> {
    pub(super) fn byte_align(&mut self) -> Result<()> {
        if self.write_mode {
            self.write_align_to_byte()
        } else {
            self.align_to_byte();
            Ok(())
        }
    }

    fn read_uint(&mut self, n: usize, big_endian: bool) -> Result<u64> {
        self.byte_align()?;
        let raw = self.backend.read_exact(n)?;
        let mut val: u64 = 0;
        if big_endian {
            for b in &raw {
                val = (val << 8) | u64::from(*b);
            }
        } else {
            for b in raw.iter().rev() {
                val = (val << 8) | u64::from(*b);
            }
        }
        Ok(val)
    }

    fn write_uint(&mut self, n: usize, value: u64, big_endian: bool) -> Result<()> {
        self.byte_align()?;
        let mut buf = vec![0u8; n];
        if big_endian {
            for i in 0..n {
                buf[n - 1 - i] = ((value >> (8 * i)) & 0xFF) as u8;
            }
        } else {
            for i in 0..n {
                buf[i] = ((value >> (8 * i)) & 0xFF) as u8;
            }
        }
        self.backend.write(&buf)
    }

    /// Sign-extend the low `bits` bits of `value` (1..=64) to a full `i64`.
    fn sign_extend(value: u64, bits: u32) -> i64 {
        if bits >= 64 {
            return value as i64;
        }
        let shift = 64 - bits;
        ((value << shift) as i64) >> shift
    }

    pub fn read_u1(&mut self) -> Result<u8> {
        Ok(self.read_uint(1, true)? as u8)
    }
    pub fn read_s1(&mut self) -> Result<i8> {
        Ok(self.read_u1()? as i8)
    }

    pub fn read_u2be(&mut self) -> Result<u16> {
        Ok(self.read_uint(2, true)? as u16)
    }
    pub fn read_u2le(&mut self) -> Result<u16> {
        Ok(self.read_uint(2, false)? as u16)
    }
    pub fn read_s2be(&mut self) -> Result<i16> {
        Ok(Self::sign_extend(self.read_uint(2, true)?, 16) as i16)
    }
    pub fn read_s2le(&mut self) -> Result<i16> {
        Ok(Self::sign_extend(self.read_uint(2, false)?, 16) as i16)
    }

    pub fn read_u4be(&mut self) -> Result<u32> {
        Ok(self.read_uint(4, true)? as u32)
    }
    pub fn read_u4le(&mut self) -> Result<u32> {
        Ok(self.read_uint(4, false)? as u32)
    }
    pub fn read_s4be(&mut self) -> Result<i32> {
        Ok(Self::sign_extend(self.read_uint(4, true)?, 32) as i32)
    }
    pub fn read_s4le(&mut self) -> Result<i32> {
        Ok(Self::sign_extend(self.read_uint(4, false)?, 32) as i32)
    }

    pub fn read_u8be(&mut self) -> Result<u64> {
        self.read_uint(8, true)
    }
    pub fn read_u8le(&mut self) -> Result<u64> {
        self.read_uint(8, false)
    }
    pub fn read_s8be(&mut self) -> Result<i64> {
        Ok(Self::sign_extend(self.read_uint(8, true)?, 64))
    }
    pub fn read_s8le(&mut self) -> Result<i64> {
        Ok(Self::sign_extend(self.read_uint(8, false)?, 64))
    }

    pub fn read_f4be(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_uint(4, true)? as u32))
    }
    pub fn read_f4le(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.read_uint(4, false)? as u32))
    }
    pub fn read_f8be(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_uint(8, true)?))
    }
    pub fn read_f8le(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.read_uint(8, false)?))
    }

    pub fn write_u1(&mut self, value: u8) -> Result<()> {
        self.write_uint(1, u64::from(value), true)
    }
    pub fn write_s1(&mut self, value: i8) -> Result<()> {
        self.write_u1(value as u8)
    }

    pub fn write_u2be(&mut self, value: u16) -> Result<()> {
        self.write_uint(2, u64::from(value), true)
    }
    pub fn write_u2le(&mut self, value: u16) -> Result<()> {
        self.write_uint(2, u64::from(value), false)
    }
    pub fn write_s2be(&mut self, value: i16) -> Result<()> {
        self.write_u2be(value as u16)
    }
    pub fn write_s2le(&mut self, value: i16) -> Result<()> {
        self.write_u2le(value as u16)
    }

    pub fn write_u4be(&mut self, value: u32) -> Result<()> {
        self.write_uint(4, u64::from(value), true)
    }
    pub fn write_u4le(&mut self, value: u32) -> Result<()> {
        self.write_uint(4, u64::from(value), false)
    }
    pub fn write_s4be(&mut self, value: i32) -> Result<()> {
        self.write_u4be(value as u32)
    }
    pub fn write_s4le(&mut self, value: i32) -> Result<()> {
        self.write_u4le(value as u32)
    }

    pub fn write_u8be(&mut self, value: u64) -> Result<()> {
        self.write_uint(8, value, true)
    }
    pub fn write_u8le(&mut self, value: u64) -> Result<()> {
        self.write_uint(8, value, false)
    }
    pub fn write_s8be(&mut self, value: i64) -> Result<()> {
        self.write_u8be(value as u64)
    }
    pub fn write_s8le(&mut self, value: i64) -> Result<()> {
        self.write_u8le(value as u64)
    }

    pub fn write_f4be(&mut self, value: f32) -> Result<()> {
        self.write_uint(4, u64::from(value.to_bits()), true)
    }
    pub fn write_f4le(&mut self, value: f32) -> Result<()> {
        self.write_uint(4, u64::from(value.to_bits()), false)
    }
    pub fn write_f8be(&mut self, value: f64) -> Result<()> {
        self.write_uint(8, value.to_bits(), true)
    }
    pub fn write_f8le(&mut self, value: f64) -> Result<()> {
        self.write_uint(8, value.to_bits(), false)
    }
}
