// Copyright 2026 The netbits Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

extern crate netbits;

use netbits::{BigEndian, BitWrite, BitWriter, CodecError, LittleEndian};

#[test]
fn test_writer_le() {
    let final_data: [u8; 4] = [0xB1, 0xED, 0x3B, 0xC1];

    {
        /*writing unsigned values*/
        let mut output = [0u8; 4];
        let mut w = BitWriter::endian(&mut output, LittleEndian);
        assert!(w.byte_aligned());
        w.write(2, 1u32).unwrap();
        assert!(!w.byte_aligned());
        w.write(3, 4u32).unwrap();
        assert!(!w.byte_aligned());
        w.write(5, 13u32).unwrap();
        assert!(!w.byte_aligned());
        w.write(3, 3u32).unwrap();
        assert!(!w.byte_aligned());
        w.write(19, 395743u32).unwrap();
        assert!(w.byte_aligned());
        assert!(w.write(1, 0u8).is_err());
        assert_eq!(w.written(), &final_data);
    }
    {
        /*writing signed values*/
        let mut output = [0u8; 4];
        let mut w = BitWriter::endian(&mut output, LittleEndian);
        w.write_signed(2, 1i32).unwrap();
        w.write_signed(3, -4i32).unwrap();
        w.write_signed(5, 13i32).unwrap();
        w.write_signed(3, 3i32).unwrap();
        w.write_signed(19, -128545i32).unwrap();
        assert_eq!(output, final_data);
    }
    {
        /*writing unaligned bytes*/
        let mut output = [0u8; 4];
        let mut w = BitWriter::endian(&mut output, LittleEndian);
        w.write(4, 0x1u8).unwrap();
        w.write_bytes(&[0xDB, 0xBE, 0x13]).unwrap();
        w.write(4, 0xCu8).unwrap();
        assert_eq!(output, final_data);
    }
}

#[test]
fn test_writer_be() {
    let final_data: [u8; 4] = [0xB1, 0xED, 0x3B, 0xC1];

    {
        let mut output = [0u8; 4];
        let mut w = BitWriter::endian(&mut output, BigEndian);
        w.write(16, 0xB1EDu16).unwrap();
        w.write(16, 0x3BC1u16).unwrap();
        assert_eq!(output, final_data);
    }
    {
        let mut output = [0u8; 4];
        let mut w = BitWriter::endian(&mut output, BigEndian);
        w.write(24, 0xB1ED3Bu32).unwrap();
        w.write(8, 0xC1u8).unwrap();
        assert_eq!(output, final_data);
    }
    {
        let mut output = [0u8; 4];
        BitWriter::endian(&mut output, BigEndian)
            .write(32, 0xB1ED3BC1u32)
            .unwrap();
        assert_eq!(output, final_data);
    }
}

#[test]
fn test_writer_overwrites_field_only() {
    let mut output = [0xFFu8; 2];
    let mut w = BitWriter::new(&mut output);
    w.write(3, 0b010u8).unwrap();
    w.write(7, 0u8).unwrap();
    assert_eq!(output, [0b0000_0010, 0b1111_1100]);
}

#[test]
fn test_writer_padding() {
    let mut output = [0xFFu8; 3];
    let mut w = BitWriter::new(&mut output);
    w.write_bit(true).unwrap();
    w.byte_align().unwrap();
    assert_eq!(w.position(), 8);
    w.byte_align().unwrap();
    assert_eq!(w.position(), 8);
    w.write_bytes(&[0xAA]).unwrap();
    w.write(3, 0u8).unwrap();
    w.byte_align().unwrap();
    assert_eq!(w.byte_len(), 3);
    assert_eq!(output, [0x01, 0xAA, 0x00]);
}

#[test]
fn test_writer_varints() {
    let mut output = [0u8; 3];
    let mut w = BitWriter::new(&mut output);
    w.write_bit(true).unwrap();
    w.write_varint_u32(300).unwrap();
    assert_eq!(w.position(), 17);
    assert_eq!(
        w.write_varint_u32(128),
        Err(CodecError::OutOfBounds {
            offset: 17,
            bits: 16,
            capacity: 24
        })
    );
    assert_eq!(w.position(), 17);
    assert_eq!(output, [0x59, 0x05, 0x00]);

    let mut output = [0u8; 2];
    let mut w = BitWriter::new(&mut output);
    w.write_varint_i32(-47).unwrap();
    assert!(w.write_varint_u32(16384).is_err());
    w.write_varint_u64(1).unwrap();
    assert_eq!(output, [93, 1]);
}
