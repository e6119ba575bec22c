// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Fixed-width unsigned integers of 1 to 64 bits at any bit offset.
//!
//! Integers are split into 8-bit chunks, least significant first,
//! and each chunk goes through [`crate::bits`].  A field of 9 bits
//! is therefore one full byte followed by a single bit.
//!
//! ## Example
//! ```
//! use netbits::{BitCodec, BigEndian, LittleEndian};
//!
//! let mut le = [0u8; 2];
//! let mut be = [0u8; 2];
//! BitCodec::endian(LittleEndian).write_u16(0x1234, 16, &mut le, 0).unwrap();
//! BitCodec::endian(BigEndian).write_u16(0x1234, 16, &mut be, 0).unwrap();
//! assert_eq!(le, [0x34, 0x12]);
//! assert_eq!(be, [0x12, 0x34]);
//! ```

use core::cmp::min;

use crate::bits::{check_bounds, check_width, extract, insert};
use crate::endian::{DefaultEndian, Endianness};
use crate::error::Result;
use crate::Numeric;

/// Reads and writes fixed-width integers in a given endianness.
///
/// The codec holds no state besides its endianness, so one value
/// may be shared freely.  Bit offsets are tracked by the caller;
/// every write returns the offset just past the field so writes
/// can be chained.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BitCodec<E: Endianness = DefaultEndian> {
    endianness: E,
}

impl BitCodec<DefaultEndian> {
    /// Builds a codec using the endianness chosen at build time.
    #[inline]
    pub fn new() -> Self {
        BitCodec {
            endianness: DefaultEndian::default(),
        }
    }
}

impl<E: Endianness> BitCodec<E> {
    /// Builds a codec with the given endianness.
    #[inline]
    pub fn endian(endianness: E) -> Self {
        BitCodec { endianness }
    }

    /// Returns this codec's endianness.
    #[inline]
    pub fn endianness(&self) -> E {
        self.endianness
    }

    /// Reads a `bits`-wide unsigned field at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodecError::InvalidWidth`] if `bits` is 0 or
    /// larger than `U`, and [`crate::CodecError::OutOfBounds`] if the
    /// field extends past the end of `buf`.
    pub fn read<U>(&self, buf: &[u8], bits: u32, offset: usize) -> Result<U>
    where
        U: Numeric,
    {
        check_width(bits, 1, U::BITS_SIZE)?;
        check_bounds(buf.len(), offset, bits as usize)?;

        let mut value = 0u64;
        let mut shift = 0;
        let mut remaining = bits;
        let mut position = offset;
        while remaining > 0 {
            let chunk = min(remaining, 8);
            value |= u64::from(extract(buf, chunk, position)) << shift;
            shift += 8;
            position += chunk as usize;
            remaining -= chunk;
        }

        Ok(U::from_u64(self.endianness.reorder(value, bits)))
    }

    /// Writes the low `bits` of `value` at `offset` and returns the
    /// bit offset immediately after the field.
    /// Writing 0 bits does nothing and returns `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodecError::InvalidWidth`] if `bits` is larger
    /// than `U`, and [`crate::CodecError::OutOfBounds`] if the field
    /// extends past the end of `buf`.  The buffer is untouched on error.
    pub fn write<U>(&self, value: U, bits: u32, buf: &mut [u8], offset: usize) -> Result<usize>
    where
        U: Numeric,
    {
        check_width(bits, 0, U::BITS_SIZE)?;
        check_bounds(buf.len(), offset, bits as usize)?;

        let mut source = self.endianness.reorder(value.to_u64(), bits);
        let mut remaining = bits;
        let mut position = offset;
        while remaining > 0 {
            let chunk = min(remaining, 8);
            insert(source as u8, chunk, buf, position);
            source >>= 8;
            position += chunk as usize;
            remaining -= chunk;
        }

        Ok(position)
    }

    /// Reads a field of 1 to 16 bits.
    ///
    /// # Errors
    ///
    /// See [`BitCodec::read`].
    #[inline]
    pub fn read_u16(&self, buf: &[u8], bits: u32, offset: usize) -> Result<u16> {
        self.read(buf, bits, offset)
    }

    /// Reads a field of 1 to 32 bits.
    ///
    /// # Errors
    ///
    /// See [`BitCodec::read`].
    #[inline]
    pub fn read_u32(&self, buf: &[u8], bits: u32, offset: usize) -> Result<u32> {
        self.read(buf, bits, offset)
    }

    /// Reads a field of 1 to 64 bits.
    ///
    /// # Errors
    ///
    /// See [`BitCodec::read`].
    #[inline]
    pub fn read_u64(&self, buf: &[u8], bits: u32, offset: usize) -> Result<u64> {
        self.read(buf, bits, offset)
    }

    /// Writes a field of 0 to 16 bits.
    ///
    /// # Errors
    ///
    /// See [`BitCodec::write`].
    #[inline]
    pub fn write_u16(&self, value: u16, bits: u32, buf: &mut [u8], offset: usize) -> Result<usize> {
        self.write(value, bits, buf, offset)
    }

    /// Writes a field of 0 to 32 bits.
    ///
    /// # Errors
    ///
    /// See [`BitCodec::write`].
    #[inline]
    pub fn write_u32(&self, value: u32, bits: u32, buf: &mut [u8], offset: usize) -> Result<usize> {
        self.write(value, bits, buf, offset)
    }

    /// Writes a field of 0 to 64 bits.
    ///
    /// # Errors
    ///
    /// See [`BitCodec::write`].
    #[inline]
    pub fn write_u64(&self, value: u64, bits: u32, buf: &mut [u8], offset: usize) -> Result<usize> {
        self.write(value, bits, buf, offset)
    }
}
