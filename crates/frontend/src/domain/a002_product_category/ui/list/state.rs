use contracts::domain::a002_product_category::aggregate::ProductCategory;
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_numeric, cmp_text, Searchable, Sortable};
use crate::shared::list_view_model::ListRow;
use crate::shared::service::Resource;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductCategoryRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

impl From<ProductCategory> for ProductCategoryRow {
    fn from(c: ProductCategory) -> Self {
        Self {
            id: c.id.0,
            name: c.name,
            description: c.description,
            created_at: c.metadata.created_display(),
        }
    }
}

impl Searchable for ProductCategoryRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.description.to_lowercase().contains(filter)
    }
}

impl Sortable for ProductCategoryRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "description" => cmp_text(&self.description, &other.description),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => cmp_numeric(&self.id, &other.id),
        }
    }
}

impl ListRow for ProductCategoryRow {
    type Record = ProductCategory;
    const RESOURCE: Resource = Resource::ProductCategory;
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
    use crate::shared::list_utils::ListState;

    #[test]
    fn test_created_column_sorts_by_timestamp() {
        let records: Vec<ProductCategory> = serde_json::from_str(
            r#"[{"id":1,"name":"B","created_at":"2024-05-01T00:00:00Z"},
                {"id":2,"name":"A","created_at":"2023-01-01T00:00:00Z"},
                {"id":3,"name":"C"}]"#,
        )
        .unwrap();
        let mut state = ListState::new("created_at");
        state.items = records.into_iter().map(ProductCategoryRow::from).collect();

        let names: Vec<String> = state.visible_rows().into_iter().map(|r| r.name).collect();
        // "-" (no timestamp) sorts before digits
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
