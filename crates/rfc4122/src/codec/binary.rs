//! Fixed-width binary layout.
//!
//! A UUID on the wire is exactly 16 bytes in RFC 4122 field order. The bytes
//! are copied verbatim; version and variant bits are not inspected.

use crate::error::Error;

/// Length of the binary representation.
pub const UUID_LEN: usize = 16;

/// Decodes a 16-byte slice into an owned array.
#[inline]
pub fn decode_binary(input: &[u8]) -> Result<[u8; UUID_LEN], Error> {
    input.try_into().map_err(|_| Error::length(input.len()))
}

/// Encodes a UUID as an owned byte vector.
#[inline]
pub fn encode_binary(bytes: &[u8; UUID_LEN]) -> Vec<u8> {
    bytes.to_vec()
}
