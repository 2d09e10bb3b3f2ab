//! Root wrapper of every routed page.
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

/// Sets `id`, `data-page-category` and the BEM class of the page root
#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a003_product_variant--detail"`
    page_id: &'static str,
    /// One of the `PAGE_CAT_*` constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {}", page_id);

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_SYSTEM => "page page--system",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}
