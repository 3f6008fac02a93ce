//! Binary and textual encoding/decoding for UUIDs.
//!
//! [`binary`] handles the fixed 16-byte layout, [`text`] the five accepted
//! string forms and the canonical output.

pub mod binary;
pub mod text;

#[cfg(feature = "serde")]
mod serde_support;

pub use binary::{decode_binary, encode_binary, UUID_LEN};
pub use text::{
    encode_hyphenated, encode_simple, parse_text, parse_text_form, TextForm, HYPHENATED_LEN,
    SIMPLE_LEN, URN_PREFIX,
};
