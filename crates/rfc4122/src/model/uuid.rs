//! The UUID value type.
//!
//! A [`Uuid`] is 16 bytes held by value. It is `Copy`, so every owner has an
//! independent instance, and the only ways to change one in place are the
//! `&mut self` methods: [`Uuid::set_version`], [`Uuid::set_variant`],
//! [`Uuid::unmarshal_binary`] and [`Uuid::unmarshal_text`].

use std::str::FromStr;

use crate::codec::binary::{decode_binary, encode_binary, UUID_LEN};
use crate::codec::text::{encode_hyphenated, parse_text};
use crate::error::Error;
use crate::model::variant::Variant;

/// A 16-byte RFC 4122 identifier.
///
/// Bytes are stored in RFC 4122 field order (time-low, time-mid,
/// time-hi-and-version, clock-seq-hi-and-reserved, clock-seq-low, node).
/// Only byte 6 (version) and byte 8 (variant) are interpreted.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uuid([u8; UUID_LEN]);

impl Uuid {
    /// The nil UUID, all bytes zero.
    pub const NIL: Uuid = Uuid([0u8; UUID_LEN]);

    /// Namespace for fully-qualified domain names (RFC 4122 Appendix C).
    pub const NAMESPACE_DNS: Uuid = Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);

    /// Namespace for URLs.
    pub const NAMESPACE_URL: Uuid = Uuid::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);

    /// Namespace for ISO object identifiers.
    pub const NAMESPACE_OID: Uuid = Uuid::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8);

    /// Namespace for X.500 distinguished names.
    pub const NAMESPACE_X500: Uuid = Uuid::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8);

    /// Wraps an owned 16-byte array.
    #[inline]
    pub const fn from_array(bytes: [u8; UUID_LEN]) -> Self {
        Self(bytes)
    }

    /// Builds a UUID from a big-endian 128-bit integer.
    #[inline]
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Copies a UUID out of a byte slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless `input` is exactly 16 bytes.
    pub fn from_bytes(input: &[u8]) -> Result<Self, Error> {
        decode_binary(input).map(Self)
    }

    /// Like [`Uuid::from_bytes`], but yields [`Uuid::NIL`] on failure.
    pub fn from_bytes_or_nil(input: &[u8]) -> Self {
        Self::from_bytes(input).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "binary UUID rejected, using nil");
            Self::NIL
        })
    }

    /// Parses any of the accepted textual forms.
    ///
    /// See [`crate::codec::text`] for the grammar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if `input` matches none of the forms.
    pub fn parse(input: &str) -> Result<Self, Error> {
        parse_text(input.as_bytes()).map(Self)
    }

    /// Like [`Uuid::parse`], but yields [`Uuid::NIL`] on failure.
    pub fn parse_or_nil(input: &str) -> Self {
        Self::parse(input).unwrap_or_else(|err| {
            tracing::debug!(error = %err, "textual UUID rejected, using nil");
            Self::NIL
        })
    }

    /// Decodes a database column value holding either the 16 raw bytes or
    /// any accepted textual form.
    pub fn scan(src: &[u8]) -> Result<Self, Error> {
        if src.len() == UUID_LEN {
            return Self::from_bytes(src);
        }
        parse_text(src).map(Self)
    }

    /// Returns a copy of the 16 bytes.
    #[inline]
    pub const fn bytes(&self) -> [u8; UUID_LEN] {
        self.0
    }

    /// Borrows the 16 bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.0
    }

    /// Returns the value as a big-endian 128-bit integer.
    #[inline]
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Returns true for [`Uuid::NIL`].
    #[inline]
    pub const fn is_nil(&self) -> bool {
        self.as_u128() == 0
    }

    /// Returns the version nibble (high four bits of byte 6).
    #[inline]
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Overwrites the version nibble with the low four bits of `version`.
    ///
    /// The value is not range checked and no other bit changes.
    #[inline]
    pub fn set_version(&mut self, version: u8) {
        self.0[6] = (self.0[6] & 0x0f) | ((version & 0x0f) << 4);
    }

    /// Returns the variant encoded in byte 8.
    #[inline]
    pub const fn variant(&self) -> Variant {
        Variant::from_byte(self.0[8])
    }

    /// Marks the UUID as RFC 4122 variant (`10xxxxxx` in byte 8).
    ///
    /// The low six bits of byte 8 are kept.
    #[inline]
    pub fn set_variant(&mut self) {
        self.0[8] = (self.0[8] & 0x3f) | 0x80;
    }

    /// Binary marshalling: the 16 bytes. Never fails.
    pub fn marshal_binary(&self) -> Result<Vec<u8>, Error> {
        Ok(encode_binary(&self.0))
    }

    /// Replaces this UUID with `data`, which must be exactly 16 bytes.
    ///
    /// On error the receiver is unchanged.
    pub fn unmarshal_binary(&mut self, data: &[u8]) -> Result<(), Error> {
        *self = Self::from_bytes(data)?;
        Ok(())
    }

    /// Text marshalling: the canonical hyphenated form as ASCII. Never fails.
    pub fn marshal_text(&self) -> Result<Vec<u8>, Error> {
        Ok(encode_hyphenated(&self.0, false).to_vec())
    }

    /// Replaces this UUID with the value parsed from `text`.
    ///
    /// Accepts the same forms as [`Uuid::parse`]. On error the receiver is unchanged.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), Error> {
        *self = parse_text(text).map(Self)?;
        Ok(())
    }
}

impl FromStr for Uuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse(s)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Uuid::from_bytes(value)
    }
}

impl From<[u8; UUID_LEN]> for Uuid {
    fn from(bytes: [u8; UUID_LEN]) -> Self {
        Uuid(bytes)
    }
}

impl From<Uuid> for [u8; UUID_LEN] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
