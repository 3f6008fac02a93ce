//! Textual UUID grammar.
//!
//! Five input forms are accepted, each with a distinct total length, so the
//! parser dispatches on length first and then validates every position of the
//! chosen layout:
//!
//! | form        | example                                         | length |
//! |-------------|-------------------------------------------------|--------|
//! | hyphenated  | `6ba7b810-9dad-11d1-80b4-00c04fd430c8`          | 36     |
//! | braced      | `{6ba7b810-9dad-11d1-80b4-00c04fd430c8}`        | 38     |
//! | urn         | `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8` | 45     |
//! | simple      | `6ba7b8109dad11d180b400c04fd430c8`              | 32     |
//! | urn simple  | `urn:uuid:6ba7b8109dad11d180b400c04fd430c8`     | 41     |
//!
//! Hex digits are case-insensitive. Output is always one of the fixed layouts
//! produced by [`encode_hyphenated`] or [`encode_simple`].

use crate::codec::binary::UUID_LEN;
use crate::error::Error;

/// Prefix of the URN forms. Matched case-sensitively.
pub const URN_PREFIX: &[u8] = b"urn:uuid:";

/// Length of the hyphenated (canonical) form.
pub const HYPHENATED_LEN: usize = 36;

/// Length of the simple form.
pub const SIMPLE_LEN: usize = 32;

/// Offsets of the four hyphens in the hyphenated form.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Offset of the first digit of each byte in the hyphenated form.
const HYPHENATED_PAIRS: [usize; UUID_LEN] =
    [0, 2, 4, 6, 9, 11, 14, 16, 19, 21, 24, 26, 28, 30, 32, 34];

const HEX_LOWER: &[u8; 16] = b"0123456789abcdef";
const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

const INVALID_DIGIT: u8 = 0xff;

/// Nibble value of every ASCII byte, or [`INVALID_DIGIT`].
static HEX_VALUES: [u8; 256] = build_hex_values();

const fn build_hex_values() -> [u8; 256] {
    let mut table = [INVALID_DIGIT; 256];
    let mut i = 0;
    while i < 256 {
        let c = i as u8;
        table[i] = match c {
            b'0'..=b'9' => c - b'0',
            b'a'..=b'f' => c - b'a' + 10,
            b'A'..=b'F' => c - b'A' + 10,
            _ => INVALID_DIGIT,
        };
        i += 1;
    }
    table
}

/// One of the accepted textual layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextForm {
    Hyphenated,
    Braced,
    Urn,
    Simple,
    UrnSimple,
}

impl TextForm {
    /// Every accepted form.
    pub const ALL: [TextForm; 5] = [
        TextForm::Hyphenated,
        TextForm::Braced,
        TextForm::Urn,
        TextForm::Simple,
        TextForm::UrnSimple,
    ];

    /// Total length in bytes of this form.
    pub const fn len(self) -> usize {
        match self {
            TextForm::Hyphenated => HYPHENATED_LEN,
            TextForm::Braced => HYPHENATED_LEN + 2,
            TextForm::Urn => URN_PREFIX.len() + HYPHENATED_LEN,
            TextForm::Simple => SIMPLE_LEN,
            TextForm::UrnSimple => URN_PREFIX.len() + SIMPLE_LEN,
        }
    }

    /// Returns the only form that can have the given total length.
    pub fn from_len(len: usize) -> Option<Self> {
        TextForm::ALL.into_iter().find(|form| form.len() == len)
    }

    /// Short lowercase name, used in reports.
    pub fn name(self) -> &'static str {
        match self {
            TextForm::Hyphenated => "hyphenated",
            TextForm::Braced => "braced",
            TextForm::Urn => "urn",
            TextForm::Simple => "simple",
            TextForm::UrnSimple => "urn-simple",
        }
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Parses any accepted textual form into 16 bytes.
pub fn parse_text(input: &[u8]) -> Result<[u8; UUID_LEN], Error> {
    parse_text_form(input).map(|(bytes, _)| bytes)
}

/// Parses any accepted textual form, also reporting which form matched.
pub fn parse_text_form(input: &[u8]) -> Result<([u8; UUID_LEN], TextForm), Error> {
    let form = TextForm::from_len(input.len()).ok_or_else(|| Error::format(input, "invalid length"))?;

    let bytes = match form {
        TextForm::Hyphenated => decode_hyphenated(input, input)?,
        TextForm::Braced => {
            if input[0] != b'{' || input[input.len() - 1] != b'}' {
                return Err(Error::format(input, "expected braces"));
            }
            decode_hyphenated(&input[1..input.len() - 1], input)?
        }
        TextForm::Urn => decode_hyphenated(strip_urn(input)?, input)?,
        TextForm::Simple => decode_simple(input, input)?,
        TextForm::UrnSimple => decode_simple(strip_urn(input)?, input)?,
    };

    Ok((bytes, form))
}

fn strip_urn(input: &[u8]) -> Result<&[u8], Error> {
    input
        .strip_prefix(URN_PREFIX)
        .ok_or_else(|| Error::format(input, "expected urn:uuid: prefix"))
}

/// Decodes a 36-byte hyphenated payload. `input` is the full text, for errors.
fn decode_hyphenated(payload: &[u8], input: &[u8]) -> Result<[u8; UUID_LEN], Error> {
    debug_assert_eq!(payload.len(), HYPHENATED_LEN);

    if HYPHEN_OFFSETS.iter().any(|&offset| payload[offset] != b'-') {
        return Err(Error::format(input, "expected hyphen"));
    }

    let mut bytes = [0u8; UUID_LEN];
    for (byte, &offset) in bytes.iter_mut().zip(HYPHENATED_PAIRS.iter()) {
        *byte = decode_pair(payload[offset], payload[offset + 1])
            .ok_or_else(|| Error::format(input, "invalid hex digit"))?;
    }
    Ok(bytes)
}

/// Decodes a 32-byte simple payload. `input` is the full text, for errors.
fn decode_simple(payload: &[u8], input: &[u8]) -> Result<[u8; UUID_LEN], Error> {
    debug_assert_eq!(payload.len(), SIMPLE_LEN);

    let mut bytes = [0u8; UUID_LEN];
    for (byte, pair) in bytes.iter_mut().zip(payload.chunks_exact(2)) {
        *byte = decode_pair(pair[0], pair[1])
            .ok_or_else(|| Error::format(input, "invalid hex digit"))?;
    }
    Ok(bytes)
}

#[inline]
fn decode_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = HEX_VALUES[hi as usize];
    let lo = HEX_VALUES[lo as usize];
    if hi == INVALID_DIGIT || lo == INVALID_DIGIT {
        return None;
    }
    Some((hi << 4) | lo)
}

// =============================================================================
// ENCODING
// =============================================================================

/// Renders the hyphenated form.
pub fn encode_hyphenated(bytes: &[u8; UUID_LEN], upper: bool) -> [u8; HYPHENATED_LEN] {
    let digits = if upper { HEX_UPPER } else { HEX_LOWER };
    let mut buf = [b'-'; HYPHENATED_LEN];
    for (&byte, &offset) in bytes.iter().zip(HYPHENATED_PAIRS.iter()) {
        buf[offset] = digits[(byte >> 4) as usize];
        buf[offset + 1] = digits[(byte & 0x0f) as usize];
    }
    buf
}

/// Renders the simple form.
pub fn encode_simple(bytes: &[u8; UUID_LEN], upper: bool) -> [u8; SIMPLE_LEN] {
    let digits = if upper { HEX_UPPER } else { HEX_LOWER };
    let mut buf = [0u8; SIMPLE_LEN];
    for (&byte, pair) in bytes.iter().zip(buf.chunks_exact_mut(2)) {
        pair[0] = digits[(byte >> 4) as usize];
        pair[1] = digits[(byte & 0x0f) as usize];
    }
    buf
}
