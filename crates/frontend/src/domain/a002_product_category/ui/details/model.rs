use contracts::domain::a002_product_category::aggregate::{ProductCategory, ProductCategoryDto};

use crate::shared::form::{FieldSpec, FormModel};
use crate::shared::service::Resource;

impl FormModel for ProductCategoryDto {
    type Record = ProductCategory;
    const RESOURCE: Resource = Resource::ProductCategory;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("name", "Name"),
            FieldSpec::textarea("description", "Description"),
        ];
        FIELDS
    }

    fn get(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "description" => self.description = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{submit_form, FormState, Notification, UiCommand};
    use crate::shared::service::testing::{block_on, FakeTransport};
    use crate::shared::service::{Method, ServiceClient};
    use crate::system::auth::storage::MemorySession;

    #[test]
    fn test_validation_keeps_server_field_order() {
        let transport = FakeTransport::new();
        transport.respond(
            Method::Post,
            "http://api.test/product-categories",
            422,
            r#"{"message":{"name":["Name is required","Name too short"],"description":["Description is required"]}}"#,
        );
        let client = ServiceClient::new(transport, MemorySession::with_token("t"), "http://api.test");

        let mut form = FormState::<ProductCategoryDto>::for_create();
        assert!(form.begin_submit());
        let result = block_on(submit_form(&client, None, &form.values));
        let commands = form.apply_submitted(result);

        assert_eq!(
            commands,
            vec![
                UiCommand::Notify(Notification::error("Name is required")),
                UiCommand::Notify(Notification::error("Description is required")),
            ]
        );
        assert!(form.has_error("name"));
        assert!(form.has_error("description"));

        form.edit("name", "Kitchen".into());
        assert!(!form.has_error("name"));
        assert!(form.has_error("description"));
    }

    #[test]
    fn test_saved_message_falls_back_to_default() {
        let transport = FakeTransport::new();
        transport.respond(
            Method::Post,
            "http://api.test/product-categories",
            200,
            r#"{"data":{"id":4,"name":"Garden"}}"#,
        );
        let client = ServiceClient::new(transport, MemorySession::with_token("t"), "http://api.test");

        let mut form = FormState::<ProductCategoryDto>::for_create();
        form.edit("name", "Garden".into());
        form.begin_submit();
        let commands = form.apply_submitted(block_on(submit_form(&client, None, &form.values)));
        assert_eq!(
            commands,
            vec![
                UiCommand::Notify(Notification::success("Data berhasil disimpan")),
                UiCommand::Navigate("/product-categories".into()),
            ]
        );
    }
}
