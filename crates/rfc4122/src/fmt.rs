//! Textual rendering.
//!
//! `Uuid`'s own `Display` is the canonical lowercase hyphenated form. The
//! adapters below render the other layouts the parser accepts; each honours
//! `{:x}` and `{:X}` for the digit case.
//!
//! ```rust
//! use rfc4122::Uuid;
//!
//! let id = Uuid::NAMESPACE_DNS;
//! assert_eq!(id.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
//! assert_eq!(id.simple().to_string(), "6ba7b8109dad11d180b400c04fd430c8");
//! assert_eq!(format!("{:X}", id.braced()), "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}");
//! ```

use std::fmt;

use crate::codec::text::{encode_hyphenated, encode_simple};
use crate::model::Uuid;

fn write_ascii(f: &mut fmt::Formatter<'_>, prefix: &str, body: &[u8], suffix: &str) -> fmt::Result {
    let body = std::str::from_utf8(body).map_err(|_| fmt::Error)?;
    f.write_str(prefix)?;
    f.write_str(body)?;
    f.write_str(suffix)
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({})", self)
    }
}

impl fmt::LowerHex for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ascii(f, "", &encode_hyphenated(self.as_bytes(), false), "")
    }
}

impl fmt::UpperHex for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ascii(f, "", &encode_hyphenated(self.as_bytes(), true), "")
    }
}

/// `6ba7b810-9dad-11d1-80b4-00c04fd430c8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hyphenated(Uuid);

/// `6ba7b8109dad11d180b400c04fd430c8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Simple(Uuid);

/// `{6ba7b810-9dad-11d1-80b4-00c04fd430c8}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Braced(Uuid);

/// `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Urn(Uuid);

impl Uuid {
    /// Renders as the hyphenated form (same as `Display`).
    pub const fn hyphenated(self) -> Hyphenated {
        Hyphenated(self)
    }

    /// Renders as 32 hex digits without separators.
    pub const fn simple(self) -> Simple {
        Simple(self)
    }

    /// Renders as the hyphenated form wrapped in braces.
    pub const fn braced(self) -> Braced {
        Braced(self)
    }

    /// Renders as the hyphenated form prefixed with `urn:uuid:`.
    pub const fn urn(self) -> Urn {
        Urn(self)
    }
}

macro_rules! impl_adapter {
    ($adapter:ident, $prefix:literal, $encode:ident, $suffix:literal) => {
        impl $adapter {
            /// Returns the wrapped UUID.
            pub const fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $adapter {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(self, f)
            }
        }

        impl fmt::LowerHex for $adapter {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_ascii(f, $prefix, &$encode(self.0.as_bytes(), false), $suffix)
            }
        }

        impl fmt::UpperHex for $adapter {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_ascii(f, $prefix, &$encode(self.0.as_bytes(), true), $suffix)
            }
        }

        impl From<Uuid> for $adapter {
            fn from(uuid: Uuid) -> Self {
                $adapter(uuid)
            }
        }
    };
}

impl_adapter!(Hyphenated, "", encode_hyphenated, "");
impl_adapter!(Simple, "", encode_simple, "");
impl_adapter!(Braced, "{", encode_hyphenated, "}");
impl_adapter!(Urn, "urn:uuid:", encode_hyphenated, "");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_canonical() {
        let u = Uuid::NAMESPACE_URL;
        assert_eq!(format!("{}", u), "6ba7b811-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(format!("{}", u), u.hyphenated().to_string());
    }

    #[test]
    fn test_debug() {
        assert_eq!(
            format!("{:?}", Uuid::NIL),
            "Uuid(00000000-0000-0000-0000-000000000000)"
        );
    }

    #[test]
    fn test_hex_case() {
        let u = Uuid::NAMESPACE_DNS;
        assert_eq!(format!("{:x}", u), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
        assert_eq!(format!("{:X}", u), "6BA7B810-9DAD-11D1-80B4-00C04FD430C8");
        assert_eq!(format!("{:X}", u.simple()), "6BA7B8109DAD11D180B400C04FD430C8");
    }

    #[test]
    fn test_adapters() {
        let u = Uuid::NAMESPACE_DNS;
        assert_eq!(u.simple().to_string(), "6ba7b8109dad11d180b400c04fd430c8");
        assert_eq!(
            u.braced().to_string(),
            "{6ba7b810-9dad-11d1-80b4-00c04fd430c8}"
        );
        assert_eq!(
            u.urn().to_string(),
            "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8"
        );
        assert_eq!(u.urn().into_uuid(), u);
        assert_eq!(Braced::from(u), u.braced());
    }

    #[test]
    fn test_adapter_output_parses_back() {
        let u = Uuid::NAMESPACE_X500;
        for text in [
            u.hyphenated().to_string(),
            u.simple().to_string(),
            u.braced().to_string(),
            u.urn().to_string(),
            format!("urn:uuid:{}", u.simple()),
            format!("{:X}", u.braced()),
        ] {
            assert_eq!(Uuid::parse(&text).unwrap(), u, "{}", text);
        }
    }
}
