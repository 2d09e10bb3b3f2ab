use contracts::domain::a001_product::aggregate::ProductDto;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::form::{FormViewModel, RecordForm};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Product form; `id` selects edit mode
#[component]
pub fn ProductDetails(#[prop(optional)] id: Option<String>) -> impl IntoView {
    let vm = FormViewModel::<ProductDto>::new(id);
    vm.load();

    view! {
        <PageFrame page_id="a001_product--detail" category=PAGE_CAT_DETAIL>
            <RecordForm vm=vm />
        </PageFrame>
    }
}

/// `/product/create`
#[component]
pub fn ProductCreate() -> impl IntoView {
    view! { <ProductDetails /> }
}

/// `/product/edit/:id`; a new id remounts the form
#[component]
pub fn ProductEdit() -> impl IntoView {
    let params = use_params_map();
    move || {
        params
            .read()
            .get("id")
            .map(|id| view! { <ProductDetails id=id /> })
    }
}
