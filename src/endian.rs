// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Byte ordering of multi-byte integer fields.
//!
//! The mode is chosen once, when a [`crate::BitCodec`] is built,
//! never per call.  It only affects fields whose width is a whole
//! number of bytes greater than one: their bytes are placed most
//! significant first in big-endian mode.  Bits inside a byte are
//! always least significant first, and a field whose width is not
//! a multiple of 8 is laid out identically in both modes.
//!
//! The default mode is little-endian unless the crate is built
//! with the `big-endian` feature.

use core::fmt;
use core::str::FromStr;

use crate::bits::mask_u64;
use crate::error::CodecError;

/// A stream's endianness, or byte order, for multi-byte fields.
pub trait Endianness: Copy + fmt::Debug {
    /// Returns the runtime byte order this endianness stands for.
    fn byte_order(&self) -> ByteOrder;

    /// Converts the low `bits` of a value between its logical
    /// form and its on-wire form.  The conversion is its own
    /// inverse, so the same call is used for reads and writes.
    #[inline]
    fn reorder(&self, value: u64, bits: u32) -> u64 {
        let value = value & mask_u64(bits);
        match self.byte_order() {
            ByteOrder::Big if bits > 8 && bits % 8 == 0 => value.swap_bytes() >> (64 - bits),
            _ => value,
        }
    }
}

/// Little-endian, least significant byte first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LittleEndian;

/// Big-endian, most significant byte first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigEndian;

impl Endianness for LittleEndian {
    #[inline(always)]
    fn byte_order(&self) -> ByteOrder {
        ByteOrder::Little
    }

    #[inline(always)]
    fn reorder(&self, value: u64, bits: u32) -> u64 {
        value & mask_u64(bits)
    }
}

impl Endianness for BigEndian {
    #[inline(always)]
    fn byte_order(&self) -> ByteOrder {
        ByteOrder::Big
    }
}

/// The endianness selected at build time.
#[cfg(not(feature = "big-endian"))]
pub type DefaultEndian = LittleEndian;

/// The endianness selected at build time.
#[cfg(feature = "big-endian")]
pub type DefaultEndian = BigEndian;

/// A byte order picked at deployment time, such as from a
/// configuration file.
///
/// ```
/// use netbits::ByteOrder;
///
/// assert_eq!("big".parse::<ByteOrder>().unwrap(), ByteOrder::Big);
/// assert!("middle".parse::<ByteOrder>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ByteOrder {
    /// Least significant byte first.
    Little,
    /// Most significant byte first.
    Big,
}

impl Default for ByteOrder {
    fn default() -> Self {
        DefaultEndian::default().byte_order()
    }
}

impl Endianness for ByteOrder {
    #[inline(always)]
    fn byte_order(&self) -> ByteOrder {
        *self
    }
}

impl FromStr for ByteOrder {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "little" | "little-endian" | "le" => Ok(ByteOrder::Little),
            "big" | "big-endian" | "be" => Ok(ByteOrder::Big),
            _ => Err(CodecError::UnknownByteOrder),
        }
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ByteOrder::Little => "little",
            ByteOrder::Big => "big",
        })
    }
}
