//! Serde integration (feature `serde`).
//!
//! Human-readable formats carry the canonical string, binary formats carry the
//! 16 raw bytes. Deserialisation accepts any accepted textual form, a 16-byte
//! byte string, or a sequence of 16 integers.

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::binary::UUID_LEN;
use crate::codec::text::encode_hyphenated;
use crate::model::Uuid;

impl Serialize for Uuid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            let text = encode_hyphenated(self.as_bytes(), false);
            let text = std::str::from_utf8(&text)
                .map_err(<S::Error as serde::ser::Error>::custom)?;
            serializer.serialize_str(text)
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

struct UuidVisitor;

impl<'de> Visitor<'de> for UuidVisitor {
    type Value = Uuid;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a UUID string or 16 bytes")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Uuid, E> {
        Uuid::parse(v).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Uuid, E> {
        Uuid::from_bytes(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Uuid, A::Error> {
        let mut bytes = [0u8; UUID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(UUID_LEN + 1, &self));
        }
        Ok(Uuid::from_array(bytes))
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(UuidVisitor)
        } else {
            deserializer.deserialize_bytes(UuidVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Record {
        id: Uuid,
        parent: Option<Uuid>,
    }

    #[test]
    fn test_json_uses_canonical_string() {
        let json = serde_json::to_string(&Uuid::NAMESPACE_DNS).unwrap();
        assert_eq!(json, format!("\"{}\"", CANONICAL));
    }

    #[test]
    fn test_json_accepts_every_form() {
        for input in [
            "\"6ba7b810-9dad-11d1-80b4-00c04fd430c8\"",
            "\"{6ba7b810-9dad-11d1-80b4-00c04fd430c8}\"",
            "\"urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8\"",
            "\"6BA7B8109DAD11D180B400C04FD430C8\"",
        ] {
            let u: Uuid = serde_json::from_str(input).unwrap();
            assert_eq!(u, Uuid::NAMESPACE_DNS, "{}", input);
        }
    }

    #[test]
    fn test_json_rejects_malformed() {
        let err = serde_json::from_str::<Uuid>("\"6ba7b810-9dad-11d1-80b4\"").unwrap_err();
        assert!(err.to_string().contains("invalid UUID string"));
        assert!(serde_json::from_str::<Uuid>("42").is_err());
    }

    #[test]
    fn test_json_struct_roundtrip() {
        let record = Record {
            id: Uuid::NAMESPACE_OID,
            parent: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"id":"6ba7b812-9dad-11d1-80b4-00c04fd430c8","parent":null}"#
        );
        assert_eq!(serde_json::from_str::<Record>(&json).unwrap(), record);
    }

    #[test]
    fn test_cbor_uses_raw_bytes() {
        let mut buf = Vec::new();
        ciborium::into_writer(&Uuid::NAMESPACE_DNS, &mut buf).unwrap();
        // major type 2 (byte string), length 16, then the bytes
        assert_eq!(buf[0], 0x50);
        assert_eq!(&buf[1..], Uuid::NAMESPACE_DNS.as_bytes());

        let decoded: Uuid = ciborium::from_reader(buf.as_slice()).unwrap();
        assert_eq!(decoded, Uuid::NAMESPACE_DNS);
    }

    #[test]
    fn test_cbor_rejects_wrong_length() {
        let mut buf = Vec::new();
        ciborium::into_writer(&serde_bytes_of(&[1u8; 15]), &mut buf).unwrap();
        assert!(ciborium::from_reader::<Uuid, _>(buf.as_slice()).is_err());
    }

    #[test]
    fn test_seq_of_integers() {
        let json = serde_json::to_string(&Uuid::NAMESPACE_DNS.bytes()).unwrap();
        let u = serde::de::Deserializer::deserialize_seq(
            &mut serde_json::Deserializer::from_str(&json),
            UuidVisitor,
        )
        .unwrap();
        assert_eq!(u, Uuid::NAMESPACE_DNS);

        let short = serde_json::to_string(&[0u8; 4]).unwrap();
        assert!(
            serde::de::Deserializer::deserialize_seq(
                &mut serde_json::Deserializer::from_str(&short),
                UuidVisitor,
            )
            .is_err()
        );
    }

    fn serde_bytes_of(data: &[u8]) -> ciborium::Value {
        ciborium::Value::Bytes(data.to_vec())
    }
}
