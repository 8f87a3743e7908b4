//! Unsigned varint (LEB128) encoding of multicodec code bytes.
//!
//! Only the write side exists. Decoding never parses a varint stream; it
//! matches registered prefixes instead (see [`crate::decode`]).
//!
//! [`unsigned-varint`](https://github.com/multiformats/unsigned-varint)

/// Encodes a single byte as an unsigned varint: one byte for `0x00..=0x7F`,
/// two bytes otherwise.
pub fn encode_unsigned_varint(value: u8) -> Vec<u8> {
    let mut buf = unsigned_varint::encode::u8_buffer();
    unsigned_varint::encode::u8(value, &mut buf).to_vec()
}

/// Varint-encodes every byte of `code` in order and appends the results to `out`.
pub fn encode_code_into(code: &[u8], out: &mut Vec<u8>) {
    let mut buf = unsigned_varint::encode::u8_buffer();
    for byte in code {
        out.extend_from_slice(unsigned_varint::encode::u8(*byte, &mut buf));
    }
}

pub fn encode_code(code: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(code.len() * 2);
    encode_code_into(code, &mut out);
    out
}
