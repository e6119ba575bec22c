// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Copying runs of whole bytes to or from an arbitrary bit offset.
//!
//! If the bit offset is byte-aligned the copy maps to a single
//! slice copy.  Otherwise every byte is split across two
//! neighboring buffer bytes, the same way [`crate::bits`] splits
//! a field which straddles a byte boundary.
//!
//! Plain-data values implementing [`bytemuck::Pod`] travel the same
//! way, as the run of bytes making up their in-memory layout.
//!
//! ## Example
//! ```
//! use netbits::bytes::{read_pod, write_pod};
//!
//! let mut buf = [0xFFu8; 5];
//! write_pod(&0x1234_5678u32.to_le(), &mut buf, 4).unwrap();
//! assert_eq!(buf, [0x8F, 0x67, 0x45, 0x23, 0xF1]);
//! assert_eq!(u32::from_le(read_pod(&buf, 4).unwrap()), 0x1234_5678);
//! ```

use bytemuck::Pod;

use crate::bits::{check_bounds, mask};
use crate::error::{CodecError, Result};

/// Copies `count` bytes starting at bit `offset` of `buf` into
/// `dst[dst_offset..dst_offset + count]`.
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if `count` bytes at `offset`
/// extend past the end of `buf`, and [`CodecError::SliceTooShort`]
/// if `dst` cannot hold `count` bytes at `dst_offset`.
pub fn read_bytes(
    buf: &[u8],
    count: usize,
    offset: usize,
    dst: &mut [u8],
    dst_offset: usize,
) -> Result<()> {
    check_bounds(buf.len(), offset, bit_len(buf, count, offset)?)?;
    let dst = sub_range_mut(dst, dst_offset, count)?;
    if count == 0 {
        return Ok(());
    }

    let index = offset >> 3;
    let shift = (offset & 7) as u32;

    if shift == 0 {
        dst.copy_from_slice(&buf[index..index + count]);
        return Ok(());
    }

    let carry = 8 - shift;
    let src = &buf[index..=index + count];
    for (out, pair) in dst.iter_mut().zip(src.windows(2)) {
        *out = (pair[0] >> shift) | (pair[1] << carry);
    }
    Ok(())
}

/// Copies `src[src_offset..src_offset + count]` into `buf` starting
/// at bit `offset`, leaving every bit outside the written range
/// unchanged.
///
/// # Errors
///
/// Returns [`CodecError::SliceTooShort`] if `src` does not hold
/// `count` bytes at `src_offset`, and [`CodecError::OutOfBounds`]
/// if `count` bytes at `offset` extend past the end of `buf`.
/// The buffer is untouched on error.
pub fn write_bytes(
    src: &[u8],
    src_offset: usize,
    count: usize,
    buf: &mut [u8],
    offset: usize,
) -> Result<()> {
    check_bounds(buf.len(), offset, bit_len(buf, count, offset)?)?;
    let src = sub_range(src, src_offset, count)?;
    if count == 0 {
        return Ok(());
    }

    let index = offset >> 3;
    let shift = (offset & 7) as u32;

    if shift == 0 {
        buf[index..index + count].copy_from_slice(src);
        return Ok(());
    }

    let carry = 8 - shift;
    let low = mask(shift);
    for (i, &byte) in src.iter().enumerate() {
        let p = index + i;
        buf[p] = (buf[p] & low) | (byte << shift);
        buf[p + 1] = (buf[p + 1] & !low) | (byte >> carry);
    }
    Ok(())
}

/// Reads a plain-data value stored at bit `offset` of `buf`.
///
/// The value's bytes are taken in memory order, so multi-byte
/// fields inside `T` are in the host's native byte order.
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the value extends past
/// the end of `buf`.
pub fn read_pod<T: Pod>(buf: &[u8], offset: usize) -> Result<T> {
    let size = core::mem::size_of::<T>();
    check_bounds(buf.len(), offset, bit_len(buf, size, offset)?)?;
    if offset & 7 == 0 {
        let start = offset >> 3;
        return Ok(bytemuck::pod_read_unaligned(&buf[start..start + size]));
    }

    let mut value: T = bytemuck::Zeroable::zeroed();
    read_bytes(buf, size, offset, bytemuck::bytes_of_mut(&mut value), 0)?;
    Ok(value)
}

/// Writes the bytes of a plain-data value at bit `offset` of `buf`,
/// leaving every bit outside the value unchanged.
///
/// # Errors
///
/// Returns [`CodecError::OutOfBounds`] if the value extends past
/// the end of `buf`.  The buffer is untouched on error.
pub fn write_pod<T: Pod>(value: &T, buf: &mut [u8], offset: usize) -> Result<()> {
    let bytes = bytemuck::bytes_of(value);
    write_bytes(bytes, 0, bytes.len(), buf, offset)
}

fn bit_len(buf: &[u8], count: usize, offset: usize) -> Result<usize> {
    let capacity = buf.len().saturating_mul(8);
    count
        .checked_mul(8)
        .ok_or_else(|| CodecError::out_of_bounds(offset, usize::MAX, capacity))
}

fn sub_range(slice: &[u8], start: usize, count: usize) -> Result<&[u8]> {
    let available = slice.len();
    start
        .checked_add(count)
        .and_then(|end| slice.get(start..end))
        .ok_or_else(|| CodecError::slice_too_short(start.saturating_add(count), available))
}

fn sub_range_mut(slice: &mut [u8], start: usize, count: usize) -> Result<&mut [u8]> {
    let available = slice.len();
    start
        .checked_add(count)
        .and_then(move |end| slice.get_mut(start..end))
        .ok_or_else(|| CodecError::slice_too_short(start.saturating_add(count), available))
}
