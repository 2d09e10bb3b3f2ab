use contracts::domain::a003_product_variant::aggregate::ProductVariant;
use std::cmp::Ordering;

use crate::shared::list_utils::{cmp_numeric, cmp_text, Searchable, Sortable};
use crate::shared::list_view_model::ListRow;
use crate::shared::service::Resource;

#[derive(Clone, Debug, PartialEq)]
pub struct ProductVariantRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub product_id: String,
}

impl From<ProductVariant> for ProductVariantRow {
    fn from(v: ProductVariant) -> Self {
        Self {
            id: v.id.0,
            name: v.name,
            description: v.description,
            price: v.price,
            stock: v.stock,
            product_id: v.product_id,
        }
    }
}

impl Searchable for ProductVariantRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(filter)
            || self.description.to_lowercase().contains(filter)
            || self.product_id == filter
    }
}

impl Sortable for ProductVariantRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.name, &other.name),
            "price" => cmp_numeric(&self.price, &other.price),
            "stock" => cmp_numeric(&self.stock, &other.stock),
            "product_id" => cmp_numeric(&self.product_id, &other.product_id),
            _ => cmp_numeric(&self.id, &other.id),
        }
    }
}

impl ListRow for ProductVariantRow {
    type Record = ProductVariant;
    const RESOURCE: Resource = Resource::ProductVariant;
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

    fn row(id: &str, name: &str, price: &str, product_id: &str) -> ProductVariantRow {
        ProductVariantRow {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price: price.into(),
            stock: "1".into(),
            product_id: product_id.into(),
        }
    }

    #[test]
    fn test_search_matches_parent_product_exactly() {
        let mut state = ListState::new(ProductVariantRow::DEFAULT_SORT);
        state.items = vec![row("1", "Red", "5", "7"), row("2", "Blue", "4", "17")];
        state.search_query = "7".into();
        let rows = state.visible_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "1");
    }

    #[test]
    fn test_price_sorts_numerically() {
        let mut state = ListState::new("price");
        state.items = vec![row("1", "a", "10", "1"), row("2", "b", "9.5", "1")];
        assert_eq!(state.visible_rows()[0].price, "9.5");
    }

    #[test]
    fn test_numbers_from_api_become_text() {
        let record: ProductVariant = serde_json::from_str(
            r#"{"id":5,"name":"Large","price":12.5,"stock":0,"product_id":"3"}"#,
        )
        .unwrap();
        let row = ProductVariantRow::from(record);
        assert_eq!(row.id, "5");
        assert_eq!(row.price, "12.5");
        assert_eq!(row.stock, "0");
    }
}
