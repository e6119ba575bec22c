// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Traits and implementations for reading fields sequentially
//! from a received buffer.
//!
//! ## Example
//! ```
//! use netbits::{BitRead, BitReader, LittleEndian};
//!
//! let packet: [u8; 4] = [0xB1, 0xED, 0x3B, 0xC1];
//! let mut reader = BitReader::endian(&packet, LittleEndian);
//! assert_eq!(reader.read::<u8>(2).unwrap(), 0b01);
//! assert_eq!(reader.read::<u8>(3).unwrap(), 0b100);
//! assert_eq!(reader.read::<u8>(5).unwrap(), 0b01101);
//! assert_eq!(reader.read::<u8>(3).unwrap(), 0b011);
//! assert_eq!(reader.read::<u32>(19).unwrap(), 0x609DF);
//! assert!(reader.byte_aligned());
//! assert!(reader.read::<u8>(1).is_err());
//! ```

use bytemuck::Pod;

use crate::bits::{check_bounds, check_width};
use crate::bytes;
use crate::codec::BitCodec;
use crate::endian::{DefaultEndian, Endianness};
use crate::error::{CodecError, Result};
use crate::varint;
use crate::{Numeric, SignedNumeric};

/// For reading bit values from an underlying buffer in a given endianness.
pub trait BitRead {
    /// Reads an unsigned value from the buffer with
    /// the given number of bits.
    ///
    /// # Errors
    ///
    /// Fails if `bits` is 0 or larger than `U`, or too few bits remain.
    fn read<U>(&mut self, bits: u32) -> Result<U>
    where
        U: Numeric;

    /// Reads an unsigned value without advancing the position.
    ///
    /// # Errors
    ///
    /// Fails if `bits` is 0 or larger than `U`, or too few bits remain.
    fn peek<U>(&self, bits: u32) -> Result<U>
    where
        U: Numeric;

    /// Reads a twos-complement signed value from the buffer with
    /// the given number of bits.
    ///
    /// # Errors
    ///
    /// Fails if `bits` is 0 or larger than `S`, or too few bits remain.
    fn read_signed<S>(&mut self, bits: u32) -> Result<S>
    where
        S: SignedNumeric;

    /// Reads a single bit.
    ///
    /// # Errors
    ///
    /// Fails if no bits remain.
    #[inline]
    fn read_bit(&mut self) -> Result<bool> {
        self.read::<u8>(1).map(|bit| bit != 0)
    }

    /// Skips the given number of bits.
    ///
    /// # Errors
    ///
    /// Fails if fewer than `bits` bits remain.
    fn skip(&mut self, bits: u32) -> Result<()>;

    /// Completely fills the given slice with whole bytes.
    ///
    /// # Errors
    ///
    /// Fails if fewer than `buf.len()` bytes remain.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()>;

    /// Reads a plain-data value from the bytes of its in-memory
    /// layout, as written by [`crate::BitWrite::write_pod`].
    ///
    /// # Errors
    ///
    /// Fails if fewer than `size_of::<T>()` bytes remain.
    fn read_pod<T: Pod>(&mut self) -> Result<T> {
        let mut value: T = bytemuck::Zeroable::zeroed();
        self.read_bytes(bytemuck::bytes_of_mut(&mut value))?;
        Ok(value)
    }

    /// Reads a base-128 variable-length `u32`.
    ///
    /// # Errors
    ///
    /// Fails on a malformed or truncated encoding.
    fn read_varint_u32(&mut self) -> Result<u32>;

    /// Reads a base-128 variable-length `u64`.
    ///
    /// # Errors
    ///
    /// Fails on a malformed or truncated encoding.
    fn read_varint_u64(&mut self) -> Result<u64>;

    /// Reads a zig-zag encoded variable-length `i32`.
    ///
    /// # Errors
    ///
    /// Fails on a malformed or truncated encoding.
    fn read_varint_i32(&mut self) -> Result<i32> {
        self.read_varint_u32().map(varint::unzigzag_i32)
    }

    /// Reads a zig-zag encoded variable-length `i64`.
    ///
    /// # Errors
    ///
    /// Fails on a malformed or truncated encoding.
    fn read_varint_i64(&mut self) -> Result<i64> {
        self.read_varint_u64().map(varint::unzigzag_i64)
    }

    /// Returns true if the position is aligned at a whole byte.
    fn byte_aligned(&self) -> bool;

    /// Throws away all unread bits until the next whole byte.
    fn byte_align(&mut self);
}

/// Reads fields one after another from a received buffer,
/// tracking the bit position between calls.
///
/// A read which fails leaves the position unchanged.
pub struct BitReader<'a, E: Endianness = DefaultEndian> {
    buffer: &'a [u8],
    position: usize,
    limit: usize,
    codec: BitCodec<E>,
}

impl<'a> BitReader<'a, DefaultEndian> {
    /// Wraps a reader around a buffer using the endianness chosen
    /// at build time, starting at bit 0.
    pub fn new(buffer: &'a [u8]) -> Self {
        BitReader::endian(buffer, DefaultEndian::default())
    }
}

impl<'a, E: Endianness> BitReader<'a, E> {
    /// Wraps a reader around a buffer with the given endianness,
    /// starting at bit 0.
    pub fn endian(buffer: &'a [u8], endianness: E) -> Self {
        BitReader {
            buffer,
            position: 0,
            limit: buffer.len() * 8,
            codec: BitCodec::endian(endianness),
        }
    }

    /// Restricts reading to the first `bits` bits of the buffer,
    /// for messages whose length is not a whole number of bytes.
    ///
    /// # Errors
    ///
    /// Fails if the buffer holds fewer than `bits` bits.
    pub fn with_bit_length(mut self, bits: usize) -> Result<Self> {
        check_bounds(self.buffer.len(), 0, bits)?;
        self.limit = bits;
        Ok(self)
    }

    /// Returns the current bit position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns how many bits are left to read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.position
    }

    fn ensure(&self, bits: usize) -> Result<()> {
        match self.position.checked_add(bits) {
            Some(end) if end <= self.limit => Ok(()),
            _ => Err(CodecError::out_of_bounds(self.position, bits, self.limit)),
        }
    }

    // running out of bytes here is a truncated varint, not a caller error
    fn next_byte(&mut self) -> Option<u8> {
        if self.remaining() < 8 {
            return None;
        }
        let byte = self.codec.read::<u8>(self.buffer, 8, self.position).ok()?;
        self.position += 8;
        Some(byte)
    }

    fn read_varint(&mut self, bits: u32) -> Result<u64> {
        let start = self.position;
        let mut bytes = core::iter::from_fn(|| self.next_byte());
        let result = varint::decode(&mut bytes, bits);
        drop(bytes);
        if result.is_err() {
            self.position = start;
        }
        result.map(|(value, _)| value)
    }
}

impl<'a, E: Endianness> BitRead for BitReader<'a, E> {
    fn read<U>(&mut self, bits: u32) -> Result<U>
    where
        U: Numeric,
    {
        let value = self.peek(bits)?;
        self.position += bits as usize;
        Ok(value)
    }

    fn peek<U>(&self, bits: u32) -> Result<U>
    where
        U: Numeric,
    {
        check_width(bits, 1, U::BITS_SIZE)?;
        self.ensure(bits as usize)?;
        self.codec.read(self.buffer, bits, self.position)
    }

    fn read_signed<S>(&mut self, bits: u32) -> Result<S>
    where
        S: SignedNumeric,
    {
        check_width(bits, 1, S::BITS_SIZE)?;
        let raw = self.read::<u64>(bits)?;
        Ok(S::as_negative(raw, bits))
    }

    fn skip(&mut self, bits: u32) -> Result<()> {
        self.ensure(bits as usize)?;
        self.position += bits as usize;
        Ok(())
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let bits = buf.len().saturating_mul(8);
        self.ensure(bits)?;
        bytes::read_bytes(self.buffer, buf.len(), self.position, buf, 0)?;
        self.position += bits;
        Ok(())
    }

    fn read_varint_u32(&mut self) -> Result<u32> {
        self.read_varint(u32::BITS).map(|value| value as u32)
    }

    fn read_varint_u64(&mut self) -> Result<u64> {
        self.read_varint(u64::BITS)
    }

    #[inline]
    fn byte_aligned(&self) -> bool {
        self.position % 8 == 0
    }

    fn byte_align(&mut self) {
        self.position = core::cmp::min((self.position + 7) & !7, self.limit);
    }
}

#[cfg(test)]
mod tests {
    use super::{BitRead, BitReader};
    use crate::{BigEndian, CodecError};

    #[test]
    fn test_bit_length_limit() {
        let data = [0xFFu8, 0xFF];
        let mut reader = BitReader::new(&data).with_bit_length(10).unwrap();
        assert_eq!(reader.read::<u16>(9).unwrap(), 0x1FF);
        assert_eq!(
            reader.read::<u8>(2),
            Err(CodecError::OutOfBounds {
                offset: 9,
                bits: 2,
                capacity: 10
            })
        );
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.remaining(), 0);
        assert!(BitReader::new(&data).with_bit_length(17).is_err());
    }

    #[test]
    fn test_truncated_varint_restores_position() {
        let data = [0x01u8, 0xFF, 0xFF];
        let mut reader = BitReader::endian(&data, BigEndian);
        reader.skip(8).unwrap();
        assert_eq!(
            reader.read_varint_u32(),
            Err(CodecError::TruncatedVarint { consumed: 2 })
        );
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn test_peek_and_align() {
        let data = [0x3Du8, 0x80];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.peek::<u8>(6).unwrap(), 0x3D);
        assert_eq!(reader.read_signed::<i32>(6).unwrap(), -3);
        reader.byte_align();
        assert_eq!(reader.position(), 8);
        reader.skip(7).unwrap();
        assert!(reader.read_bit().unwrap());
        reader.byte_align();
        assert_eq!(reader.position(), 16);
    }
}
