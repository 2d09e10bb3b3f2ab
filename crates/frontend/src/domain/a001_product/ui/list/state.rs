use contracts::domain::a001_product::aggregate::Product;
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_numeric, cmp_text, Searchable, Sortable};
use crate::shared::list_view_model::ListRow;
use crate::shared::service::Resource;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub category: String,
    pub created_at: String,
}

impl From<Product> for ProductRow {
    fn from(p: Product) -> Self {
        let category = p.category_label();
        Self {
            id: p.id.0,
            name: p.name,
            description: p.description,
            price: p.price,
            stock: p.stock,
            category,
            created_at: p.metadata.created_display(),
        }
    }
}

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.description.to_lowercase().contains(filter)
            || self.category.to_lowercase().contains(filter)
    }
}

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "category" => cmp_text(&self.category, &other.category),
            "price" => cmp_numeric(&self.price, &other.price),
            "stock" => cmp_numeric(&self.stock, &other.stock),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => cmp_numeric(&self.id, &other.id),
        }
    }
}

impl ListRow for ProductRow {
    type Record = Product;
    const RESOURCE: Resource = Resource::Product;
    const DEFAULT_SORT: &'static str = "name";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_uses_embedded_category_name() {
        let with: Product = serde_json::from_str(
            r#"{"id":1,"name":"Mug","product_category_id":2,"category":{"id":2,"name":"Kitchen"}}"#,
        )
        .unwrap();
        assert_eq!(ProductRow::from(with).category, "Kitchen");

        let without: Product =
            serde_json::from_str(r#"{"id":1,"name":"Mug","product_category_id":2}"#).unwrap();
        assert_eq!(ProductRow::from(without).category, "#2");
    }

    #[test]
    fn test_search_by_category() {
        let row: ProductRow = serde_json::from_str::<Product>(
            r#"{"id":1,"name":"Mug","category":{"id":2,"name":"Kitchen"}}"#,
        )
        .map(Into::into)
        .unwrap();
        assert!(row.matches_filter("kitch"));
        assert!(!row.matches_filter("garden"));
    }
}
