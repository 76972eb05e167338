//! Serde adapter that keeps a string field encrypted while it is serialized.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct UserRecord {
//!     id: u64,
//!     #[serde(with = "sarah_encrypt::obfuscated")]
//!     email: String,
//! }
//! ```
//!
//! Reading goes through the lossy [`crate::decrypt`], matching how stored records have
//! always been read back.

use serde::de::{Deserializer, Visitor};
use serde::ser::Serializer;
use std::fmt;

use crate::text::{decrypt, encrypt};

pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&encrypt(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(EncryptedStrVisitor)
}

struct EncryptedStrVisitor;

impl<'de> Visitor<'de> for EncryptedStrVisitor {
    type Value = String;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an encrypted string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(decrypt(value))
    }
}
