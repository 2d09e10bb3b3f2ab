use contracts::domain::a003_product_variant::aggregate::ProductVariantDto;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::form::{FormViewModel, RecordForm};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Variant form; `id` selects edit mode
#[component]
pub fn ProductVariantDetails(#[prop(optional)] id: Option<String>) -> impl IntoView {
    let vm = FormViewModel::<ProductVariantDto>::new(id);
    vm.load();

    view! {
        <PageFrame page_id="a003_product_variant--detail" category=PAGE_CAT_DETAIL>
            <RecordForm vm=vm />
        </PageFrame>
    }
}

/// `/product-variant/create`
#[component]
pub fn ProductVariantCreate() -> impl IntoView {
    view! { <ProductVariantDetails /> }
}

/// `/product-variant/edit/:id`; a new id remounts the form
#[component]
pub fn ProductVariantEdit() -> impl IntoView {
    let params = use_params_map();
    move || {
        params
            .read()
            .get("id")
            .map(|id| view! { <ProductVariantDetails id=id /> })
    }
}
