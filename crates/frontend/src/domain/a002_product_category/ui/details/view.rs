use contracts::domain::a002_product_category::aggregate::ProductCategoryDto;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::shared::form::{FormViewModel, RecordForm};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;

/// Category form; `id` selects edit mode
#[component]
pub fn ProductCategoryDetails(#[prop(optional)] id: Option<String>) -> impl IntoView {
    let vm = FormViewModel::<ProductCategoryDto>::new(id);
    vm.load();

    view! {
        <PageFrame page_id="a002_product_category--detail" category=PAGE_CAT_DETAIL>
            <RecordForm vm=vm />
        </PageFrame>
    }
}

/// `/product-categories/create`
#[component]
pub fn ProductCategoryCreate() -> impl IntoView {
    view! { <ProductCategoryDetails /> }
}

/// `/product-categories/edit/:id`; a new id remounts the form
#[component]
pub fn ProductCategoryEdit() -> impl IntoView {
    let params = use_params_map();
    move || {
        params
            .read()
            .get("id")
            .map(|id| view! { <ProductCategoryDetails id=id /> })
    }
}
