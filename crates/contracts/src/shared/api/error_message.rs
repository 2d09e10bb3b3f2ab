use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Message the API sends when the bearer token is no longer valid.
/// Receiving it means the local session must be dropped.
pub const TOKEN_EXPIRED_MESSAGE: &str = "Token has expired";

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<ErrorMessage>,
}

/// `message` of an error body: either one flat text or validation messages
/// keyed by form field.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorMessage {
    Text(String),
    Fields(FieldErrors),
}

impl ErrorMessage {
    pub fn is_token_expired(&self) -> bool {
        matches!(self, ErrorMessage::Text(text) if text == TOKEN_EXPIRED_MESSAGE)
    }

    fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => ErrorMessage::Text(text),
            Value::Object(map) => {
                let mut fields = FieldErrors::default();
                for (field, messages) in map {
                    // Entries that are not message lists carry no field error.
                    let Value::Array(items) = messages else {
                        continue;
                    };
                    let messages = items
                        .into_iter()
                        .map(|item| match item {
                            Value::String(s) => s,
                            other => other.to_string(),
                        })
                        .collect();
                    fields.push(field, messages);
                }
                ErrorMessage::Fields(fields)
            }
            Value::Null => ErrorMessage::Text(String::new()),
            other => ErrorMessage::Text(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ErrorMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(ErrorMessage::from_value)
    }
}

/// Validation messages per field, in the order the API listed the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, messages: Vec<String>) {
        self.0.push((field.into(), messages));
    }

    pub fn with(mut self, field: impl Into<String>, messages: &[&str]) -> Self {
        self.push(field, messages.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|(name, _)| name == field)
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// First message of every field, skipping fields whose list is empty.
    pub fn first_messages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter_map(|(name, messages)| messages.first().map(|m| (name, m.as_str())))
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> ApiErrorBody {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_flat_message() {
        let b = body(r#"{"message":"Product not found"}"#);
        assert_eq!(b.message, Some(ErrorMessage::Text("Product not found".into())));
    }

    #[test]
    fn test_token_expired_detection() {
        let b = body(r#"{"message":"Token has expired","data":null}"#);
        assert!(b.message.unwrap().is_token_expired());
        let b = body(r#"{"message":"Token has expired soon"}"#);
        assert!(!b.message.unwrap().is_token_expired());
    }

    #[test]
    fn test_field_messages_keep_api_order() {
        let b = body(
            r#"{"message":{"stock":["Stock must be a number"],"name":["Name is required","Name is too short"]}}"#,
        );
        let Some(ErrorMessage::Fields(fields)) = b.message else {
            panic!("expected field errors");
        };
        let names: Vec<&str> = fields.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["stock", "name"]);
        assert_eq!(fields.messages("name").unwrap().len(), 2);

        let firsts: Vec<(&str, &str)> = fields.first_messages().collect();
        assert_eq!(
            firsts,
            vec![("stock", "Stock must be a number"), ("name", "Name is required")]
        );
    }

    #[test]
    fn test_non_list_entries_are_skipped() {
        let b = body(r#"{"message":{"name":["Name is required"],"code":422}}"#);
        let Some(ErrorMessage::Fields(fields)) = b.message else {
            panic!("expected field errors");
        };
        assert_eq!(fields.len(), 1);
        assert!(fields.contains("name"));
        assert!(!fields.contains("code"));
    }

    #[test]
    fn test_missing_message() {
        assert_eq!(body("{}").message, None);
    }
}
