use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::lenient;

/// API path segment of the variant collection
pub const RESOURCE_PATH: &str = "product-variant";

/// Product variant as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(default)]
    pub id: RecordId,

    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub price: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub stock: String,

    /// Reference to the parent product
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_id: String,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Editable fields of a variant, submitted on create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVariantDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub product_id: String,
}

impl ProductVariantDto {
    pub const FIELDS: &'static [&'static str] =
        &["name", "description", "price", "stock", "product_id"];
}

impl From<ProductVariant> for ProductVariantDto {
    fn from(v: ProductVariant) -> Self {
        Self {
            id: Some(v.id.0),
            name: v.name,
            description: v.description,
            price: v.price,
            stock: v.stock,
            product_id: v.product_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_scalars_pass_through() {
        let json = r#"{"id":"42","name":"Widget","description":"","price":"9.99","stock":"3","product_id":"7"}"#;
        let dto = ProductVariantDto::from(serde_json::from_str::<ProductVariant>(json).unwrap());
        assert_eq!(
            dto,
            ProductVariantDto {
                id: Some("42".into()),
                name: "Widget".into(),
                description: "".into(),
                price: "9.99".into(),
                stock: "3".into(),
                product_id: "7".into(),
            }
        );
    }
}
