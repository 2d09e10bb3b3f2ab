use contracts::domain::a001_product::aggregate::{Product, ProductDto};

use crate::shared::form::{FieldSpec, FormModel};
use crate::shared::service::Resource;

impl FormModel for ProductDto {
    type Record = Product;
    const RESOURCE: Resource = Resource::Product;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("name", "Name"),
            FieldSpec::textarea("description", "Description"),
            FieldSpec::number("price", "Price"),
            FieldSpec::number("stock", "Stock"),
            FieldSpec::text("product_category_id", "Category ID"),
        ];
        FIELDS
    }

    fn get(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "price" => self.price.clone(),
            "stock" => self.stock.clone(),
            "product_category_id" => self.product_category_id.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "description" => self.description = value,
            "price" => self.price = value,
            "stock" => self.stock = value,
            "product_category_id" => self.product_category_id = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{load_record, FormState, Notification, UiCommand};
    use crate::shared::service::testing::{block_on, FakeTransport};
    use crate::shared::service::{Method, ServiceClient};
    use crate::system::auth::storage::MemorySession;

    #[test]
    fn test_field_table_covers_dto() {
        let names: Vec<&str> = ProductDto::fields().iter().map(|f| f.name).collect();
        assert_eq!(names, ProductDto::FIELDS);

        let mut dto = ProductDto::default();
        for name in ProductDto::FIELDS {
            dto.set(name, format!("v-{}", name));
            assert_eq!(dto.get(name), format!("v-{}", name));
        }
    }

    #[test]
    fn test_load_ignores_embedded_category() {
        let transport = FakeTransport::new();
        transport.respond(
            Method::Get,
            "http://api.test/product/3",
            200,
            r#"{"data":{"id":3,"name":"Mug","description":"Blue","price":"12000","stock":10,
                "product_category_id":2,"category":{"id":2,"name":"Kitchen"},
                "created_at":"2024-03-01T10:00:00Z"}}"#,
        );
        let client = ServiceClient::new(transport, MemorySession::with_token("t"), "http://api.test");

        let mut form = FormState::<ProductDto>::for_edit("3");
        let id = form.begin_fetch().unwrap();
        form.apply_loaded(block_on(load_record::<_, _, ProductDto>(&client, &id)));
        assert_eq!(form.values.product_category_id, "2");
        assert_eq!(form.values.stock, "10");
        assert_eq!(form.values.id.as_deref(), Some("3"));
    }

    #[test]
    fn test_missing_record_offers_retry() {
        let transport = FakeTransport::new();
        transport.respond(
            Method::Get,
            "http://api.test/product/404",
            404,
            r#"{"message":"Product not found"}"#,
        );
        let client = ServiceClient::new(transport, MemorySession::with_token("t"), "http://api.test");

        let mut form = FormState::<ProductDto>::for_edit("404");
        let id = form.begin_fetch().unwrap();
        let commands = form.apply_loaded(block_on(load_record::<_, _, ProductDto>(&client, &id)));
        assert_eq!(
            commands,
            vec![UiCommand::Notify(Notification::error("Product not found"))]
        );
        assert_eq!(form.begin_fetch().as_deref(), Some("404"));
    }
}
