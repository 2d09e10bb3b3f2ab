//! Tolerant decoders for scalar fields.
//!
//! The catalog API is inconsistent about scalar types: prices arrive as
//! `"9.99"` or `9.99`, stock as `"3"` or `3`, optional text as `null`.
//! Forms edit everything as text, so these helpers fold all of it into a
//! `String`, with `null`/missing becoming `""`.

use serde::de::{self, Deserializer, Visitor};
use std::fmt;

struct LenientString;

impl<'de> Visitor<'de> for LenientString {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, a number, a boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_none<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<String, E> {
        Ok(String::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<String, D::Error> {
        d.deserialize_any(LenientString)
    }
}

/// Decode a string, number, bool or null into a `String`.
///
/// Use with `#[serde(default, deserialize_with = "lenient::string")]`.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientString)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::string")]
        value: String,
    }

    fn decode(json: &str) -> String {
        serde_json::from_str::<Probe>(json).unwrap().value
    }

    #[test]
    fn test_lenient_string() {
        assert_eq!(decode(r#"{"value":"9.99"}"#), "9.99");
        assert_eq!(decode(r#"{"value":9.99}"#), "9.99");
        assert_eq!(decode(r#"{"value":3}"#), "3");
        assert_eq!(decode(r#"{"value":null}"#), "");
        assert_eq!(decode(r#"{}"#), "");
    }
}
