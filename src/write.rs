// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traits and implementations for writing fields sequentially
//! into a fixed-size buffer.
//!
//! ## Example
//! ```
//! use netbits::{BitWrite, BitWriter, LittleEndian};
//!
//! let mut buf = [0u8; 32];
//! let mut writer = BitWriter::endian(&mut buf, LittleEndian);
//! writer.write_bit(false).unwrap();
//! writer.write_signed(6, -3i32).unwrap();
//! writer.write(32, 42u32).unwrap();
//! writer.write(8, 43u8).unwrap();
//! writer.write(16, 44u16).unwrap();
//! writer.write(64, u64::MAX).unwrap();
//! writer.write_bit(true).unwrap();
//! writer.byte_align().unwrap();
//! writer.write_varint_u32(300).unwrap();
//! assert_eq!(writer.position(), 128 + 16);
//! assert_eq!(writer.byte_len(), 18);
//! ```

use bytemuck::Pod;

use crate::bits::check_width;
use crate::bytes;
use crate::codec::BitCodec;
use crate::endian::{DefaultEndian, Endianness};
use crate::error::Result;
use crate::varint::{self, MAX_VARINT_LEN_U64};
use crate::{Numeric, SignedNumeric};

/// For writing bit values to an underlying buffer in a given endianness.
pub trait BitWrite {
    /// Writes an unsigned value to the buffer using the given
    /// number of bits.  Bits above `bits` in `value` are ignored.
    ///
    /// # Errors
    ///
    /// Fails if `bits` is larger than `U` or the buffer is full.
    fn write<U>(&mut self, bits: u32, value: U) -> Result<()>
    where
        U: Numeric;

    /// Writes a twos-complement signed value to the buffer
    /// with the given number of bits.
    ///
    /// # Errors
    ///
    /// Fails if `bits` is 0 or larger than `S`, or the buffer is full.
    fn write_signed<S>(&mut self, bits: u32, value: S) -> Result<()>
    where
        S: SignedNumeric;

    /// Writes a single bit.
    ///
    /// # Errors
    ///
    /// Fails if the buffer is full.
    #[inline]
    fn write_bit(&mut self, bit: bool) -> Result<()> {
        self.write(1, u8::from(bit))
    }

    /// Writes the entirety of a byte slice to the buffer.
    ///
    /// # Errors
    ///
    /// Fails if the buffer cannot hold every byte.
    fn write_bytes(&mut self, buf: &[u8]) -> Result<()>;

    /// Writes the bytes of a plain-data value's in-memory layout.
    ///
    /// # Errors
    ///
    /// Fails if the buffer cannot hold `size_of::<T>()` bytes.
    #[inline]
    fn write_pod<T: Pod>(&mut self, value: &T) -> Result<()> {
        self.write_bytes(bytemuck::bytes_of(value))
    }

    /// Writes a base-128 variable-length `u32`.
    ///
    /// # Errors
    ///
    /// Fails if the buffer cannot hold the whole encoding.
    fn write_varint_u32(&mut self, value: u32) -> Result<()> {
        self.write_varint_u64(u64::from(value))
    }

    /// Writes a base-128 variable-length `u64`.
    ///
    /// # Errors
    ///
    /// Fails if the buffer cannot hold the whole encoding.
    fn write_varint_u64(&mut self, value: u64) -> Result<()>;

    /// Writes a zig-zag encoded variable-length `i32`.
    ///
    /// # Errors
    ///
    /// Fails if the buffer cannot hold the whole encoding.
    fn write_varint_i32(&mut self, value: i32) -> Result<()> {
        self.write_varint_u32(varint::zigzag_i32(value))
    }

    /// Writes a zig-zag encoded variable-length `i64`.
    ///
    /// # Errors
    ///
    /// Fails if the buffer cannot hold the whole encoding.
    fn write_varint_i64(&mut self, value: i64) -> Result<()> {
        self.write_varint_u64(varint::zigzag_i64(value))
    }

    /// Returns true if the buffer is aligned at a whole byte.
    fn byte_aligned(&self) -> bool;

    /// Pads the buffer with 0 bits until it is aligned at a whole byte.
    /// Does nothing if the buffer is already aligned.
    ///
    /// # Errors
    ///
    /// Fails if the padding does not fit in the buffer.
    fn byte_align(&mut self) -> Result<()>;
}

/// Writes fields one after another into a caller-owned buffer,
/// tracking the bit position between calls.
///
/// The buffer never grows; a write which does not fit fails
/// and leaves both the buffer and the position unchanged.
pub struct BitWriter<'a, E: Endianness = DefaultEndian> {
    buffer: &'a mut [u8],
    position: usize,
    codec: BitCodec<E>,
}

impl<'a> BitWriter<'a, DefaultEndian> {
    /// Wraps a writer around a buffer using the endianness chosen
    /// at build time, starting at bit 0.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        BitWriter::endian(buffer, DefaultEndian::default())
    }
}

impl<'a, E: Endianness> BitWriter<'a, E> {
    /// Wraps a writer around a buffer with the given endianness,
    /// starting at bit 0.
    pub fn endian(buffer: &'a mut [u8], endianness: E) -> Self {
        BitWriter {
            buffer,
            position: 0,
            codec: BitCodec::endian(endianness),
        }
    }

    /// Returns the current bit position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes touched so far, counting a
    /// partially written final byte.
    #[inline]
    pub fn byte_len(&self) -> usize {
        (self.position + 7) / 8
    }

    /// Returns how many bits may still be written.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buffer.len() * 8 - self.position
    }

    /// Returns the written portion of the buffer.
    pub fn written(&self) -> &[u8] {
        &self.buffer[..self.byte_len()]
    }

    /// Unwraps the buffer and returns it with the number of bytes used.
    pub fn into_inner(self) -> (&'a mut [u8], usize) {
        let len = self.byte_len();
        (self.buffer, len)
    }
}

impl<'a, E: Endianness> BitWrite for BitWriter<'a, E> {
    fn write<U>(&mut self, bits: u32, value: U) -> Result<()>
    where
        U: Numeric,
    {
        self.position = self.codec.write(value, bits, self.buffer, self.position)?;
        Ok(())
    }

    fn write_signed<S>(&mut self, bits: u32, value: S) -> Result<()>
    where
        S: SignedNumeric,
    {
        check_width(bits, 1, S::BITS_SIZE)?;
        self.write(bits, value.as_unsigned(bits))
    }

    fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        bytes::write_bytes(buf, 0, buf.len(), self.buffer, self.position)?;
        self.position += buf.len() * 8;
        Ok(())
    }

    fn write_varint_u64(&mut self, value: u64) -> Result<()> {
        if self.byte_aligned() {
            let written = varint::write_varint_u64(self.buffer, self.position / 8, value)?;
            self.position += written * 8;
            Ok(())
        } else {
            let mut scratch = [0u8; MAX_VARINT_LEN_U64];
            let len = varint::encode(value, &mut scratch);
            self.write_bytes(&scratch[..len])
        }
    }

    #[inline]
    fn byte_aligned(&self) -> bool {
        self.position % 8 == 0
    }

    fn byte_align(&mut self) -> Result<()> {
        let pad = ((8 - self.position % 8) % 8) as u32;
        self.write(pad, 0u8)
    }
}
