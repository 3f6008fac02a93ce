//! UUID variant field.

use std::fmt;

/// Layout family encoded in the leading bits of byte 8.
///
/// Decoded most-significant bit first, so exactly one variant matches any byte:
///
/// ```text
/// 0xxxxxxx  NCS backward compatibility
/// 10xxxxxx  RFC 4122
/// 110xxxxx  Microsoft backward compatibility
/// 111xxxxx  reserved for future definition
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Ncs,
    Rfc4122,
    Microsoft,
    Future,
}

impl Variant {
    /// Decodes the variant from the value of byte 8.
    #[inline]
    pub const fn from_byte(byte: u8) -> Self {
        if byte & 0x80 == 0x00 {
            Variant::Ncs
        } else if byte & 0xc0 == 0x80 {
            Variant::Rfc4122
        } else if byte & 0xe0 == 0xc0 {
            Variant::Microsoft
        } else {
            Variant::Future
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Variant::Ncs => "NCS",
            Variant::Rfc4122 => "RFC4122",
            Variant::Microsoft => "Microsoft",
            Variant::Future => "Future",
        })
    }
}
