use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::service::Resource;

/// One editable input of a record form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Form key; also the key the API uses in validation messages
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub multiline: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input_type: "text",
            multiline: false,
        }
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input_type: "number",
            multiline: false,
        }
    }

    pub const fn textarea(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            input_type: "text",
            multiline: true,
        }
    }
}

/// Form values of one resource, edited as text and submitted as a form.
pub trait FormModel: Clone + Default + PartialEq + Serialize + Send + Sync + 'static {
    /// Record shape returned by `show`
    type Record: DeserializeOwned + Into<Self>;

    const RESOURCE: Resource;

    fn fields() -> &'static [FieldSpec];

    fn get(&self, field: &str) -> String;

    /// Unknown field names are ignored
    fn set(&mut self, field: &str, value: String);
}
