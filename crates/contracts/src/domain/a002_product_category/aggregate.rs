use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityMetadata, RecordId};
use crate::shared::lenient;

/// API path segment of the category collection
pub const RESOURCE_PATH: &str = "product-categories";

/// Product category as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCategory {
    #[serde(default)]
    pub id: RecordId,

    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient::string")]
    pub description: String,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Editable fields of a category, submitted on create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductCategoryDto {
    #[serde(skip)]
    pub id: Option<String>,
    pub name: String,
    pub description: String,
}

impl ProductCategoryDto {
    pub const FIELDS: &'static [&'static str] = &["name", "description"];
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(c: ProductCategory) -> Self {
        Self {
            id: Some(c.id.0),
            name: c.name,
            description: c.description,
        }
    }
}
