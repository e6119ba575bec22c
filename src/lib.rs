// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Bit-precise reading and writing of fields inside pre-allocated
//! network message buffers.
//!
//! The codec never owns or grows a buffer.  Every operation takes
//! a caller-supplied byte slice, an absolute bit offset into it and
//! a field width, and either succeeds or returns a [`CodecError`]
//! without touching the buffer.
//!
//! It is organized in four layers, each building on the previous one:
//!
//! * [`bits`] - 0 to 8 bits at any bit offset
//! * [`bytes`] - runs of whole bytes, or [`Pod`] values, at any bit offset
//! * [`BitCodec`] - 1 to 64 bit unsigned integers, with an [`Endianness`] mode
//! * [`varint`] - byte-aligned base-128 variable-length integers
//!
//! [`BitWriter`] and [`BitReader`] track the bit position for callers
//! that write or read fields sequentially.
//!
//! Bits are always packed least-significant first within a byte.
//!
//! ## Example
//! ```
//! use netbits::{BitCodec, LittleEndian};
//!
//! let codec = BitCodec::endian(LittleEndian);
//! let mut buf = [0u8; 16];
//!
//! let mut offset = 0;
//! offset = codec.write_u32(0, 1, &mut buf, offset).unwrap();
//! offset = codec.write_u32(42, 32, &mut buf, offset).unwrap();
//! offset = codec.write_u16(44, 16, &mut buf, offset).unwrap();
//! assert_eq!(offset, 49);
//!
//! assert_eq!(codec.read_u32(&buf, 32, 1).unwrap(), 42);
//! assert_eq!(codec.read_u16(&buf, 16, 33).unwrap(), 44);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use core::fmt::Debug;

pub mod bits;
pub mod bytes;
pub mod codec;
pub mod endian;
pub mod error;
pub mod read;
pub mod varint;
pub mod write;

pub use bytemuck::Pod;

pub use codec::BitCodec;

pub use endian::BigEndian;
pub use endian::ByteOrder;
pub use endian::DefaultEndian;
pub use endian::Endianness;
pub use endian::LittleEndian;

pub use error::CodecError;
pub use error::Result;

pub use read::BitRead;
pub use read::BitReader;

pub use write::BitWrite;
pub use write::BitWriter;

/// An unsigned integer type which fixed-width fields may be
/// read into or written from.
pub trait Numeric: Sized + Copy + Default + Debug + PartialEq {
    /// Size of the type in bits.
    const BITS_SIZE: u32;

    /// Converts a `u64` to this type, keeping only the low bits
    /// which fit.
    fn from_u64(value: u64) -> Self;

    /// Widens this value to a `u64`.
    fn to_u64(self) -> u64;
}

/// A two's complement signed integer type which fixed-width
/// fields may be read into or written from.
pub trait SignedNumeric: Sized + Copy + Default + Debug + PartialEq {
    /// Size of the type in bits.
    const BITS_SIZE: u32;

    /// Returns the low `bits` of this value's two's complement
    /// representation.
    fn as_unsigned(self, bits: u32) -> u64;

    /// Sign-extends a `bits`-wide two's complement field.
    fn as_negative(raw: u64, bits: u32) -> Self;
}

macro_rules! define_numeric {
    ($t:ty) => {
        impl Numeric for $t {
            const BITS_SIZE: u32 = <$t>::BITS;

            #[inline(always)]
            fn from_u64(value: u64) -> Self {
                value as $t
            }

            #[inline(always)]
            fn to_u64(self) -> u64 {
                self as u64
            }
        }
    };
}

define_numeric!(u8);
define_numeric!(u16);
define_numeric!(u32);
define_numeric!(u64);

macro_rules! define_signed_numeric {
    ($t:ty) => {
        impl SignedNumeric for $t {
            const BITS_SIZE: u32 = <$t>::BITS;

            #[inline(always)]
            fn as_unsigned(self, bits: u32) -> u64 {
                (self as i64 as u64) & crate::bits::mask_u64(bits)
            }

            #[inline(always)]
            fn as_negative(raw: u64, bits: u32) -> Self {
                let shift = 64 - bits;
                (((raw << shift) as i64) >> shift) as $t
            }
        }
    };
}

define_signed_numeric!(i8);
define_signed_numeric!(i16);
define_signed_numeric!(i32);
define_signed_numeric!(i64);
