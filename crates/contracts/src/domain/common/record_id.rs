use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::shared::lenient;

/// Identifier of a record owned by the remote API.
///
/// The API is free to use integers or strings; the client only ever needs the
/// textual form to build URLs, so both decode into the same value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient::string(deserializer).map(RecordId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_decode_alike() {
        let a: RecordId = serde_json::from_str("42").unwrap();
        let b: RecordId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "42");
    }
}
