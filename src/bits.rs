// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading and writing 0 to 8 bits at an arbitrary bit offset.
//!
//! A bit offset addresses byte `offset / 8`, bit `offset % 8`,
//! where bit 0 is the least significant bit of the byte.
//! A field may straddle two neighboring bytes.
//!
//! ## Example
//! ```
//! use netbits::bits::{read_byte, write_byte};
//!
//! let mut buf = [0xFFu8, 0xFF];
//! write_byte(0b001, 3, &mut buf, 6).unwrap();
//! assert_eq!(buf, [0b0111_1111, 0b1111_1110]);
//! assert_eq!(read_byte(&buf, 3, 6).unwrap(), 0b001);
//! ```

use crate::error::{CodecError, Result};

/// Reads 1 to 8 bits starting at `offset`, returned in the low
/// bits of the result.
///
/// # Errors
///
/// Returns [`CodecError::InvalidWidth`] if `bits` is 0 or greater
/// than 8, and [`CodecError::OutOfBounds`] if the field extends
/// past the end of `buf`.
pub fn read_byte(buf: &[u8], bits: u32, offset: usize) -> Result<u8> {
    check_width(bits, 1, 8)?;
    check_bounds(buf.len(), offset, bits as usize)?;
    Ok(extract(buf, bits, offset))
}

/// Writes the low `bits` of `value` starting at `offset`,
/// leaving every bit outside the field unchanged.
/// Writing 0 bits does nothing.
///
/// # Errors
///
/// Returns [`CodecError::InvalidWidth`] if `bits` is greater than 8,
/// and [`CodecError::OutOfBounds`] if the field extends past the
/// end of `buf`.  The buffer is untouched on error.
pub fn write_byte(value: u8, bits: u32, buf: &mut [u8], offset: usize) -> Result<()> {
    check_width(bits, 0, 8)?;
    check_bounds(buf.len(), offset, bits as usize)?;
    insert(value, bits, buf, offset);
    Ok(())
}

/// Reads a field already known to fit in `buf`.
#[inline]
pub(crate) fn extract(buf: &[u8], bits: u32, offset: usize) -> u8 {
    debug_assert!(bits >= 1 && bits <= 8);

    let index = offset >> 3;
    let shift = (offset & 7) as u32;

    if shift == 0 && bits == 8 {
        return buf[index];
    }

    let low = buf[index] >> shift;
    let free = 8 - shift;
    if bits <= free {
        low & mask(bits)
    } else {
        let high = buf[index + 1] & mask(bits - free);
        low | (high << free)
    }
}

/// Writes a field already known to fit in `buf`.
#[inline]
pub(crate) fn insert(value: u8, bits: u32, buf: &mut [u8], offset: usize) {
    debug_assert!(bits <= 8);

    if bits == 0 {
        return;
    }

    let value = value & mask(bits);
    let index = offset >> 3;
    let used = (offset & 7) as u32;
    let free = 8 - used;

    if bits <= free {
        let keep = !(mask(bits) << used);
        buf[index] = (buf[index] & keep) | (value << used);
    } else {
        // low part fills the top of this byte, high part the bottom of the next
        buf[index] = (buf[index] & mask(used)) | (value << used);
        let spill = bits - free;
        buf[index + 1] = (buf[index + 1] & !mask(spill)) | (value >> free);
    }
}

/// A byte with its low `bits` set, for `bits` in `0..=8`.
#[inline(always)]
pub(crate) fn mask(bits: u32) -> u8 {
    ((1u16 << bits) - 1) as u8
}

/// A `u64` with its low `bits` set, for `bits` in `0..=64`.
#[inline(always)]
pub(crate) fn mask_u64(bits: u32) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

pub(crate) fn check_width(bits: u32, min: u32, max: u32) -> Result<()> {
    if bits < min || bits > max {
        Err(CodecError::invalid_width(bits, min, max))
    } else {
        Ok(())
    }
}

pub(crate) fn check_bounds(len: usize, offset: usize, bits: usize) -> Result<()> {
    let capacity = len.saturating_mul(8);
    match offset.checked_add(bits) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(CodecError::out_of_bounds(offset, bits, capacity)),
    }
}
