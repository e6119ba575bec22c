// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Base-128 variable-length unsigned integers.
//!
//! Each byte carries 7 payload bits, least significant group first,
//! with bit 7 set when more bytes follow.  A `u32` takes 1 to 5
//! bytes and a `u64` 1 to 10.  These functions address the buffer
//! by byte offset; they never operate at a bit offset.
//!
//! Decoding is strict: an encoding longer than the target type
//! allows, or a final byte carrying payload bits above the type's
//! width (anything over `0x0F` in the fifth byte of a `u32`), is
//! rejected as [`CodecError::MalformedVarint`] instead of being
//! truncated.
//!
//! Signed values are zig-zag mapped onto the unsigned encoding so
//! small negative numbers stay short.
//!
//! ## Example
//! ```
//! use netbits::varint::{read_varint_u32, write_varint_u32};
//!
//! let mut buf = [0u8; 8];
//! assert_eq!(write_varint_u32(&mut buf, 0, 300).unwrap(), 2);
//! assert_eq!(&buf[..2], &[0xAC, 0x02]);
//!
//! let mut offset = 0;
//! assert_eq!(read_varint_u32(&buf, &mut offset).unwrap(), 300);
//! assert_eq!(offset, 2);
//! ```

use crate::error::{CodecError, Result};

/// Longest encoding of a `u32`.
pub const MAX_VARINT_LEN_U32: usize = 5;

/// Longest encoding of a `u64`.
pub const MAX_VARINT_LEN_U64: usize = 10;

const CONTINUATION: u8 = 0x80;
const PAYLOAD: u8 = 0x7F;

/// Returns how many bytes `value` encodes to.
#[inline]
pub fn varint_len_u32(value: u32) -> usize {
    varint_len_u64(u64::from(value))
}

/// Returns how many bytes `value` encodes to.
#[inline]
pub fn varint_len_u64(value: u64) -> usize {
    let significant = 64 - (value | 1).leading_zeros() as usize;
    (significant + 6) / 7
}

/// Writes `value` at byte `offset` and returns the number of
/// bytes written.
///
/// # Errors
///
/// Returns [`CodecError::SliceTooShort`] if the encoding does not fit
/// in `buf` at `offset`.  Nothing is written in that case.
pub fn write_varint_u32(buf: &mut [u8], offset: usize, value: u32) -> Result<usize> {
    write_varint_u64(buf, offset, u64::from(value))
}

/// Writes `value` at byte `offset` and returns the number of
/// bytes written.
///
/// # Errors
///
/// Returns [`CodecError::SliceTooShort`] if the encoding does not fit
/// in `buf` at `offset`.  Nothing is written in that case.
pub fn write_varint_u64(buf: &mut [u8], offset: usize, value: u64) -> Result<usize> {
    let len = varint_len_u64(value);
    let available = buf.len();
    let out = offset
        .checked_add(len)
        .and_then(|end| buf.get_mut(offset..end))
        .ok_or_else(|| CodecError::slice_too_short(offset.saturating_add(len), available))?;
    Ok(encode(value, out))
}

/// Reads a value written by [`write_varint_u32`] at byte `*offset`,
/// advancing `*offset` past it.
///
/// # Errors
///
/// Returns [`CodecError::MalformedVarint`] if a fifth byte still has
/// its continuation bit set or carries bits beyond the 32nd, and [`CodecError::TruncatedVarint`] if
/// `buf` ends mid-value.  `*offset` is left unchanged on error.
pub fn read_varint_u32(buf: &[u8], offset: &mut usize) -> Result<u32> {
    read_with_limit(buf, offset, u32::BITS).map(|value| value as u32)
}

/// Reads a value written by [`write_varint_u64`] at byte `*offset`,
/// advancing `*offset` past it.
///
/// # Errors
///
/// Returns [`CodecError::MalformedVarint`] if a tenth byte still has
/// its continuation bit set or carries bits beyond the 64th, and [`CodecError::TruncatedVarint`] if
/// `buf` ends mid-value.  `*offset` is left unchanged on error.
pub fn read_varint_u64(buf: &[u8], offset: &mut usize) -> Result<u64> {
    read_with_limit(buf, offset, u64::BITS)
}

/// Writes a zig-zag encoded `value` at byte `offset` and returns
/// the number of bytes written.
///
/// # Errors
///
/// See [`write_varint_u32`].
pub fn write_varint_i32(buf: &mut [u8], offset: usize, value: i32) -> Result<usize> {
    write_varint_u32(buf, offset, zigzag_i32(value))
}

/// Reads a value written by [`write_varint_i32`].
///
/// # Errors
///
/// See [`read_varint_u32`].
pub fn read_varint_i32(buf: &[u8], offset: &mut usize) -> Result<i32> {
    read_varint_u32(buf, offset).map(unzigzag_i32)
}

/// Writes a zig-zag encoded `value` at byte `offset` and returns
/// the number of bytes written.
///
/// # Errors
///
/// See [`write_varint_u64`].
pub fn write_varint_i64(buf: &mut [u8], offset: usize, value: i64) -> Result<usize> {
    write_varint_u64(buf, offset, zigzag_i64(value))
}

/// Reads a value written by [`write_varint_i64`].
///
/// # Errors
///
/// See [`read_varint_u64`].
pub fn read_varint_i64(buf: &[u8], offset: &mut usize) -> Result<i64> {
    read_varint_u64(buf, offset).map(unzigzag_i64)
}

/// Maps signed integers onto unsigned ones so that values of small
/// magnitude, positive or negative, become small.
#[inline]
pub fn zigzag_i32(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

/// Inverse of [`zigzag_i32`].
#[inline]
pub fn unzigzag_i32(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Maps signed integers onto unsigned ones so that values of small
/// magnitude, positive or negative, become small.
#[inline]
pub fn zigzag_i64(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

/// Inverse of [`zigzag_i64`].
#[inline]
pub fn unzigzag_i64(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Encodes `value` into `out`, which must be exactly
/// `varint_len_u64(value)` bytes or longer, returning the length.
pub(crate) fn encode(mut value: u64, out: &mut [u8]) -> usize {
    let mut written = 0;
    while value >= u64::from(CONTINUATION) {
        out[written] = (value as u8) | CONTINUATION;
        value >>= 7;
        written += 1;
    }
    out[written] = value as u8;
    written + 1
}

/// Decodes one value of at most `bits` bits from a byte source.
/// Returns the value and the bytes consumed.
pub(crate) fn decode<I>(bytes: I, bits: u32) -> Result<(u64, usize)>
where
    I: IntoIterator<Item = u8>,
{
    let max_len = ((bits + 6) / 7) as usize;
    // payload bits the last permitted byte may carry
    let spare = bits - 7 * (max_len as u32 - 1);
    let mut bytes = bytes.into_iter();
    let mut value = 0u64;
    let mut shift = 0;
    for consumed in 0..max_len {
        let byte = bytes
            .next()
            .ok_or_else(|| CodecError::truncated_varint(consumed))?;
        if consumed + 1 == max_len && (byte & PAYLOAD) >> spare != 0 {
            return Err(CodecError::malformed_varint(max_len));
        }
        value |= u64::from(byte & PAYLOAD) << shift;
        shift += 7;
        if byte & CONTINUATION == 0 {
            return Ok((value, consumed + 1));
        }
    }
    Err(CodecError::malformed_varint(max_len))
}

fn read_with_limit(buf: &[u8], offset: &mut usize, bits: u32) -> Result<u64> {
    let tail = buf.get(*offset..).unwrap_or(&[]);
    let (value, consumed) = decode(tail.iter().copied(), bits)?;
    *offset += consumed;
    Ok(value)
}
