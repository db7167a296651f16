use crate::error::{ConfigError, ConfigResult};
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Expected key length in bytes (64 hex characters).
const KEY_BYTE_LEN: usize = 32;

/// A transaction signing key, held as a `0x`-prefixed hex string.
///
/// This type exists to keep the credential out of logs, error messages,
/// and serialized output: `Debug` and `Display` print a redaction marker,
/// and there is intentionally no `Serialize` impl. Fields holding a
/// `SigningKey` are marked `#[serde(skip_serializing)]` so saving a
/// configuration never writes key material.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(String);

impl SigningKey {
    /// Parse and validate a key sourced from the environment variable
    /// named `var`. Accepts the raw value with or without a `0x` prefix;
    /// the stored form always carries the prefix, matching what the
    /// downstream signer expects.
    ///
    /// The error references `var` only, never the value.
    pub fn from_env_value(var: &str, raw: &str) -> ConfigResult<Self> {
        let trimmed = raw.trim();
        let stripped = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = hex::decode(stripped).map_err(|_| ConfigError::InvalidSigningKey {
            var: var.to_string(),
        })?;
        if bytes.len() != KEY_BYTE_LEN {
            return Err(ConfigError::InvalidSigningKey {
                var: var.to_string(),
            });
        }
        Ok(Self(format!("0x{stripped}")))
    }

    /// Hand the raw key to the external signer boundary.
    ///
    /// Callers own the responsibility of not logging the returned value.
    pub fn reveal(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey(<redacted>)")
    }
}

impl fmt::Display for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<redacted>")
    }
}

impl<'de> Deserialize<'de> for SigningKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl Visitor<'_> for KeyVisitor {
            type Value = SigningKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 64-character hex string, optionally 0x-prefixed")
            }

            fn visit_str<E>(self, v: &str) -> Result<SigningKey, E>
            where
                E: de::Error,
            {
                SigningKey::from_env_value("signing_key", v)
                    .map_err(|_| E::custom("signing key is not 64 hex characters"))
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}
