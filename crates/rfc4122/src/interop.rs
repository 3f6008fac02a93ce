//! Conversions to and from the `uuid` crate (feature `uuid`).

use crate::model::Uuid;

impl From<uuid::Uuid> for Uuid {
    fn from(value: uuid::Uuid) -> Self {
        Uuid::from_array(value.into_bytes())
    }
}

impl From<Uuid> for uuid::Uuid {
    fn from(value: Uuid) -> Self {
        uuid::Uuid::from_bytes(value.bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Variant;

    #[test]
    fn test_conversion_roundtrip() {
        let theirs = uuid::Uuid::NAMESPACE_DNS;
        let ours = Uuid::from(theirs);
        assert_eq!(ours, Uuid::NAMESPACE_DNS);
        assert_eq!(uuid::Uuid::from(ours), theirs);
    }

    #[test]
    fn test_namespaces_agree() {
        assert_eq!(Uuid::from(uuid::Uuid::NAMESPACE_URL), Uuid::NAMESPACE_URL);
        assert_eq!(Uuid::from(uuid::Uuid::NAMESPACE_OID), Uuid::NAMESPACE_OID);
        assert_eq!(Uuid::from(uuid::Uuid::NAMESPACE_X500), Uuid::NAMESPACE_X500);
        assert_eq!(Uuid::from(uuid::Uuid::nil()), Uuid::NIL);
    }

    #[test]
    fn test_random_values_agree() {
        for _ in 0..256 {
            let theirs = uuid::Uuid::new_v4();
            let ours = Uuid::from(theirs);

            assert_eq!(ours.to_string(), theirs.hyphenated().to_string());
            assert_eq!(ours.simple().to_string(), theirs.simple().to_string());
            assert_eq!(ours.version() as usize, theirs.get_version_num());
            assert_eq!(ours.variant(), Variant::Rfc4122);
            assert_eq!(Uuid::parse(&theirs.urn().to_string()).unwrap(), ours);
            assert_eq!(Uuid::parse(&theirs.braced().to_string()).unwrap(), ours);
        }
    }
}
