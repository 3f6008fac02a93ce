//! RFC 4122 UUIDs as a plain 16-byte value type.
//!
//! This crate provides the value type, strict parsing, canonical formatting,
//! and version/variant bit-field access. It does not generate UUIDs.
//!
//! # Quick Start
//!
//! ```rust
//! use rfc4122::{Uuid, Variant};
//!
//! // Any of the five accepted forms parses to the same value
//! let a = Uuid::parse("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap();
//! let b = Uuid::parse("urn:uuid:6BA7B8109DAD11D180B400C04FD430C8").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a, Uuid::NAMESPACE_DNS);
//!
//! // Output is always the canonical lowercase hyphenated form
//! assert_eq!(b.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
//!
//! // Bit fields
//! let mut id = Uuid::from_bytes(&[0u8; 16]).unwrap();
//! id.set_version(4);
//! id.set_variant();
//! assert_eq!(id.version(), 4);
//! assert_eq!(id.variant(), Variant::Rfc4122);
//! ```
//!
//! # Modules
//!
//! - [`model`]: the [`Uuid`] value and [`Variant`]
//! - [`codec`]: binary layout and the textual grammar
//! - [`fmt`]: output adapters (`simple`, `braced`, `urn`)
//! - [`error`]: error types
//!
//! # Accepted text
//!
//! Parsing dispatches on total length and validates every position; no other
//! arrangement is accepted:
//!
//! - `6ba7b810-9dad-11d1-80b4-00c04fd430c8`
//! - `{6ba7b810-9dad-11d1-80b4-00c04fd430c8}`
//! - `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8`
//! - `6ba7b8109dad11d180b400c04fd430c8`
//! - `urn:uuid:6ba7b8109dad11d180b400c04fd430c8`
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` (string for human-readable formats,
//!   16 raw bytes otherwise)
//! - `uuid`: conversions to and from [`uuid::Uuid`](https://docs.rs/uuid)

pub mod codec;
pub mod error;
pub mod fmt;
pub mod model;

#[cfg(feature = "uuid")]
mod interop;

// Re-export commonly used types at crate root
pub use codec::{TextForm, UUID_LEN};
pub use error::{Error, ErrorKind};
pub use fmt::{Braced, Hyphenated, Simple, Urn};
pub use model::{Uuid, Variant};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
