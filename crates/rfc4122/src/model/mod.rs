//! Data model types: the UUID value and its variant field.

pub mod uuid;
pub mod variant;

pub use self::uuid::Uuid;
pub use self::variant::Variant;
