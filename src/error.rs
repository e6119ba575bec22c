// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors returned by codec operations.
//!
//! Width and capacity violations are programming errors in the
//! calling message layer and are logged at `error` level.
//! Malformed variable-length integers come from the network
//! and are logged at `warn` level.

use thiserror::Error;

/// Errors that can occur while reading or writing a buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The field width is outside what the operation supports.
    #[error("field width {bits} outside supported range {min}..={max}")]
    InvalidWidth {
        /// The requested width.
        bits: u32,
        /// Smallest width the operation accepts.
        min: u32,
        /// Largest width the operation accepts.
        max: u32,
    },

    /// The field would extend past the end of the buffer.
    #[error("{bits} bits at bit offset {offset} exceed buffer of {capacity} bits")]
    OutOfBounds {
        /// Bit offset of the field.
        offset: usize,
        /// Width of the field in bits.
        bits: usize,
        /// Size of the buffer in bits.
        capacity: usize,
    },

    /// A byte slice is too short for the requested range.
    #[error("slice of {available} bytes too short, need {needed}")]
    SliceTooShort {
        /// Bytes the operation needs.
        needed: usize,
        /// Bytes available.
        available: usize,
    },

    /// A variable-length integer has more continuation bytes
    /// than its type allows.
    #[error("bad 7-bit encoded integer after {consumed} bytes")]
    MalformedVarint {
        /// Bytes examined before giving up.
        consumed: usize,
    },

    /// The buffer ended while a continuation bit was still set.
    #[error("variable-length integer truncated after {consumed} bytes")]
    TruncatedVarint {
        /// Bytes examined before the buffer ended.
        consumed: usize,
    },

    /// A byte order name was neither `little` nor `big`.
    #[error("unknown byte order, expected \"little\" or \"big\"")]
    UnknownByteOrder,
}

/// Result type for codec operations.
pub type Result<T> = core::result::Result<T, CodecError>;

impl CodecError {
    pub(crate) fn invalid_width(bits: u32, min: u32, max: u32) -> Self {
        tracing::error!(bits, min, max, "field width out of range");
        CodecError::InvalidWidth { bits, min, max }
    }

    pub(crate) fn out_of_bounds(offset: usize, bits: usize, capacity: usize) -> Self {
        tracing::error!(offset, bits, capacity, "field exceeds buffer");
        CodecError::OutOfBounds {
            offset,
            bits,
            capacity,
        }
    }

    pub(crate) fn slice_too_short(needed: usize, available: usize) -> Self {
        tracing::error!(needed, available, "slice too short");
        CodecError::SliceTooShort { needed, available }
    }

    pub(crate) fn malformed_varint(consumed: usize) -> Self {
        tracing::warn!(consumed, "bad 7-bit encoded integer");
        CodecError::MalformedVarint { consumed }
    }

    pub(crate) fn truncated_varint(consumed: usize) -> Self {
        tracing::warn!(consumed, "truncated 7-bit encoded integer");
        CodecError::TruncatedVarint { consumed }
    }

    /// Returns true for errors caused by malformed input,
    /// as opposed to a caller breaking a width or capacity contract.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            CodecError::MalformedVarint { .. } | CodecError::TruncatedVarint { .. }
        )
    }
}
