use contracts::domain::a003_product_variant::aggregate::{ProductVariant, ProductVariantDto};

use crate::shared::form::{FieldSpec, FormModel};
use crate::shared::service::Resource;

impl FormModel for ProductVariantDto {
    type Record = ProductVariant;
    const RESOURCE: Resource = Resource::ProductVariant;

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::text("name", "Name"),
            FieldSpec::textarea("description", "Description"),
            FieldSpec::number("price", "Price"),
            FieldSpec::number("stock", "Stock"),
            FieldSpec::text("product_id", "Product ID"),
        ];
        FIELDS
    }

    fn get(&self, field: &str) -> String {
        match field {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            "price" => self.price.clone(),
            "stock" => self.stock.clone(),
            "product_id" => self.product_id.clone(),
            _ => String::new(),
        }
    }

    fn set(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "description" => self.description = value,
            "price" => self.price = value,
            "stock" => self.stock = value,
            "product_id" => self.product_id = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::form::{
        load_record, submit_form, FormPhase, FormState, Notification, UiCommand,
    };
    use crate::shared::service::testing::{block_on, FakeTransport};
    use crate::shared::service::{Method, ServiceClient};
    use crate::system::auth::storage::MemorySession;

    const ITEM_URL: &str = "http://api.test/product-variant/42";

    fn client(transport: &FakeTransport) -> ServiceClient<FakeTransport, MemorySession> {
        ServiceClient::new(
            transport.clone(),
            MemorySession::with_token("secret"),
            "http://api.test",
        )
    }

    /// Edit form for variant 42 after a successful load
    fn loaded_form(transport: &FakeTransport) -> FormState<ProductVariantDto> {
        transport.respond(
            Method::Get,
            ITEM_URL,
            200,
            r#"{"data":{"id":42,"name":"Widget","description":null,"price":9.99,"stock":3,"product_id":7}}"#,
        );
        let mut form = FormState::<ProductVariantDto>::for_edit("42");
        let id = form.begin_fetch().unwrap();
        let result = block_on(load_record::<_, _, ProductVariantDto>(&client(transport), &id));
        let commands = form.apply_loaded(result);
        assert!(commands.is_empty());
        form
    }

    fn submit(transport: &FakeTransport, form: &mut FormState<ProductVariantDto>) -> Vec<UiCommand> {
        assert!(form.begin_submit());
        let result = block_on(submit_form(
            &client(transport),
            form.record_id.as_deref(),
            &form.values,
        ));
        form.apply_submitted(result)
    }

    #[test]
    fn test_load_populates_every_field() {
        let transport = FakeTransport::new();
        let form = loaded_form(&transport);

        assert_eq!(form.phase, FormPhase::Ready);
        assert_eq!(form.values.name, "Widget");
        assert_eq!(form.values.description, "");
        assert_eq!(form.values.price, "9.99");
        assert_eq!(form.values.stock, "3");
        assert_eq!(form.values.product_id, "7");
        assert_eq!(form.error_fields().count(), 0);

        let sent = transport.requests();
        assert_eq!(sent[0].header("Authorization"), Some("Bearer secret"));
    }

    #[test]
    fn test_field_error_flags_only_that_field() {
        let transport = FakeTransport::new();
        let mut form = loaded_form(&transport);
        transport.respond(
            Method::Put,
            ITEM_URL,
            422,
            r#"{"message":{"name":["Name is required"]}}"#,
        );

        let commands = submit(&transport, &mut form);
        assert_eq!(
            commands,
            vec![UiCommand::Notify(Notification::error("Name is required"))]
        );
        assert!(form.has_error("name"));
        for other in ["description", "price", "stock", "product_id"] {
            assert!(!form.has_error(other), "{} flagged", other);
        }
        assert_eq!(form.phase, FormPhase::Ready);
    }

    #[test]
    fn test_expired_token_logs_out() {
        let transport = FakeTransport::new();
        let mut form = loaded_form(&transport);
        transport.respond(Method::Put, ITEM_URL, 400, r#"{"message":"Token has expired"}"#);

        let commands = submit(&transport, &mut form);
        assert_eq!(
            commands,
            vec![UiCommand::ClearSession, UiCommand::Navigate("/".into())]
        );
        assert_eq!(form.error_fields().count(), 0);
    }

    #[test]
    fn test_success_toasts_and_returns_to_list() {
        let transport = FakeTransport::new();
        let mut form = loaded_form(&transport);
        form.edit("stock", "4".into());
        transport.respond(
            Method::Put,
            ITEM_URL,
            200,
            r#"{"data":{"message":"Variant updated"}}"#,
        );

        let commands = submit(&transport, &mut form);
        assert_eq!(
            commands,
            vec![
                UiCommand::Notify(Notification::success("Variant updated")),
                UiCommand::Navigate("/product-variant".into()),
            ]
        );

        let put = transport.requests().pop().unwrap();
        assert_eq!(put.method, Method::Put);
        assert_eq!(
            put.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            put.body.as_deref(),
            Some("name=Widget&description=&price=9.99&stock=4&product_id=7")
        );
    }

    #[test]
    fn test_create_posts_to_collection() {
        let transport = FakeTransport::new();
        transport.respond(
            Method::Post,
            "http://api.test/product-variant",
            201,
            r#"{"data":{"message":"Variant created","id":9}}"#,
        );
        let mut form = FormState::<ProductVariantDto>::for_create();
        form.edit("name", "Gadget".into());

        let commands = submit(&transport, &mut form);
        assert_eq!(
            commands[0],
            UiCommand::Notify(Notification::success("Variant created"))
        );
        let post = transport.requests().pop().unwrap();
        assert_eq!(post.method, Method::Post);
        assert!(post.body.unwrap().starts_with("name=Gadget&"));
    }
}
