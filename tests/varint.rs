// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate netbits;

use netbits::varint::*;
use netbits::CodecError;

fn encoded_u32(value: u32) -> Vec<u8> {
    let mut buf = [0u8; MAX_VARINT_LEN_U32];
    let len = write_varint_u32(&mut buf, 0, value).unwrap();
    buf[..len].to_vec()
}

#[test]
fn test_wire_format() {
    assert_eq!(encoded_u32(0), [0x00]);
    assert_eq!(encoded_u32(1), [0x01]);
    assert_eq!(encoded_u32(127), [0x7F]);
    assert_eq!(encoded_u32(128), [0x80, 0x01]);
    assert_eq!(encoded_u32(300), [0xAC, 0x02]);
    assert_eq!(encoded_u32(16384), [0x80, 0x80, 0x01]);
    assert_eq!(encoded_u32(u32::MAX), [0xFF, 0xFF, 0xFF, 0xFF, 0x0F]);
}

#[test]
fn test_u32_roundtrip() {
    for shift in 0..32 {
        let base = 1u32 << shift;
        for &value in &[base - 1, base, base | 1, base.wrapping_mul(3), !base] {
            let mut buf = [0xEEu8; 8];
            let written = write_varint_u32(&mut buf, 2, value).unwrap();
            assert_eq!(written, varint_len_u32(value));
            assert!(written >= 1 && written <= MAX_VARINT_LEN_U32);
            assert_eq!(buf[..2], [0xEE, 0xEE]);
            assert_eq!(buf[2 + written..], vec![0xEE; 6 - written][..]);

            let mut offset = 2;
            assert_eq!(read_varint_u32(&buf, &mut offset).unwrap(), value);
            assert_eq!(offset, 2 + written);
        }
    }
}

#[test]
fn test_u64_roundtrip() {
    for shift in 0..64 {
        let value = (1u64 << shift) | 0x55;
        let mut buf = [0u8; MAX_VARINT_LEN_U64];
        let written = write_varint_u64(&mut buf, 0, value).unwrap();
        assert_eq!(written, varint_len_u64(value));

        let mut offset = 0;
        assert_eq!(read_varint_u64(&buf, &mut offset).unwrap(), value);
        assert_eq!(offset, written);
    }

    let mut buf = [0u8; MAX_VARINT_LEN_U64];
    assert_eq!(write_varint_u64(&mut buf, 0, u64::MAX).unwrap(), 10);
    assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]);
}

#[test]
fn test_back_to_back() {
    let values = [2115998022u32, 48, 0, 470000, u32::MAX, 127, 128];
    let mut buf = [0u8; 64];
    let mut offset = 0;
    for &value in values.iter() {
        offset += write_varint_u32(&mut buf, offset, value).unwrap();
    }
    let end = offset;

    offset = 0;
    for &value in values.iter() {
        assert_eq!(read_varint_u32(&buf, &mut offset).unwrap(), value);
    }
    assert_eq!(offset, end);
}

#[test]
fn test_signed() {
    let mut buf = [0u8; 16];
    assert_eq!(write_varint_i32(&mut buf, 0, -47).unwrap(), 1);
    assert_eq!(write_varint_i64(&mut buf, 1, -49).unwrap(), 1);
    assert_eq!(write_varint_i32(&mut buf, 2, i32::MIN).unwrap(), 5);
    assert_eq!(write_varint_i64(&mut buf, 7, 1 << 40).unwrap(), 6);

    let mut offset = 0;
    assert_eq!(read_varint_i32(&buf, &mut offset).unwrap(), -47);
    assert_eq!(read_varint_i64(&buf, &mut offset).unwrap(), -49);
    assert_eq!(read_varint_i32(&buf, &mut offset).unwrap(), i32::MIN);
    assert_eq!(read_varint_i64(&buf, &mut offset).unwrap(), 1 << 40);
    assert_eq!(offset, 13);
}

#[test]
fn test_malformed() {
    let buf = [0x80u8, 0x80, 0x80, 0x80, 0x80, 0x00];
    let mut offset = 0;
    assert_eq!(
        read_varint_u32(&buf, &mut offset),
        Err(CodecError::MalformedVarint { consumed: 5 })
    );
    assert_eq!(offset, 0);

    let buf = [0xFFu8; 11];
    let mut offset = 0;
    assert_eq!(
        read_varint_u64(&buf, &mut offset),
        Err(CodecError::MalformedVarint { consumed: 10 })
    );
    assert!(read_varint_u64(&buf, &mut offset)
        .unwrap_err()
        .is_malformed_input());
}

#[test]
fn test_fifth_byte_overflow() {
    let buf = [0xFFu8, 0xFF, 0xFF, 0xFF, 0x0F];
    let mut offset = 0;
    assert_eq!(read_varint_u32(&buf, &mut offset).unwrap(), u32::MAX);
    assert_eq!(offset, 5);

    for last in 0x10u8..0x80 {
        let buf = [0xFFu8, 0xFF, 0xFF, 0xFF, last];
        let mut offset = 0;
        assert_eq!(
            read_varint_u32(&buf, &mut offset),
            Err(CodecError::MalformedVarint { consumed: 5 })
        );
        assert_eq!(offset, 0);
    }

    let mut buf = [0xFFu8; 10];
    buf[9] = 0x02;
    let mut offset = 0;
    assert_eq!(
        read_varint_u64(&buf, &mut offset),
        Err(CodecError::MalformedVarint { consumed: 10 })
    );
}

#[test]
fn test_truncated() {
    let buf = [0x80u8, 0x80];
    let mut offset = 0;
    assert_eq!(
        read_varint_u32(&buf, &mut offset),
        Err(CodecError::TruncatedVarint { consumed: 2 })
    );

    let mut offset = 2;
    assert_eq!(
        read_varint_u32(&buf, &mut offset),
        Err(CodecError::TruncatedVarint { consumed: 0 })
    );

    let mut offset = 9;
    assert_eq!(
        read_varint_u64(&buf, &mut offset),
        Err(CodecError::TruncatedVarint { consumed: 0 })
    );
    assert_eq!(offset, 9);
}

#[test]
fn test_write_needs_room() {
    let mut buf = [0u8; 4];
    assert_eq!(
        write_varint_u32(&mut buf, 2, 16384),
        Err(CodecError::SliceTooShort {
            needed: 5,
            available: 4
        })
    );
    assert_eq!(buf, [0; 4]);
    assert_eq!(write_varint_u32(&mut buf, 2, 16383), Ok(2));
    assert!(write_varint_u32(&mut buf, 5, 0).is_err());
}
