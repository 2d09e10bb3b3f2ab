use serde::{Deserialize, Serialize};

use crate::domain::a002_product_category::aggregate::ProductCategory;
use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::lenient;

/// API path segment of the product collection
pub const RESOURCE_PATH: &str = "product";

/// Product as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
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

    /// Reference to the owning category
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_category_id: String,

    /// Present when the API eager-loads the category relation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProductCategory>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Product {
    /// Category name when embedded, otherwise the raw reference
    pub fn category_label(&self) -> String {
        match &self.category {
            Some(c) if !c.name.is_empty() => c.name.clone(),
            _ if self.product_category_id.is_empty() => "-".to_string(),
            _ => format!("#{}", self.product_category_id),
        }
    }
}

/// Editable fields of a product, submitted on create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub product_category_id: String,
}

impl ProductDto {
    pub const FIELDS: &'static [&'static str] =
        &["name", "description", "price", "stock", "product_category_id"];
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        Self {
            id: Some(p.id.0),
            name: p.name,
            description: p.description,
            price: p.price,
            stock: p.stock,
            product_category_id: p.product_category_id,
        }
    }
}
