use crate::dashboards::d400_catalog_summary::ui::CatalogSummaryDashboard;
use crate::domain::a001_product::ui::details::{ProductCreate, ProductEdit};
use crate::domain::a001_product::ui::list::ProductList;
use crate::domain::a002_product_category::ui::details::{
    ProductCategoryCreate, ProductCategoryEdit,
};
use crate::domain::a002_product_category::ui::list::ProductCategoryList;
use crate::domain::a003_product_variant::ui::details::{
    ProductVariantCreate, ProductVariantEdit,
};
use crate::domain::a003_product_variant::ui::list::ProductVariantList;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

/// Shell around a page that needs a session
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);

    view! {
        <RequireAuth>
            <Shell>{children.read_value()()}</Shell>
        </RequireAuth>
    }
}

/// `/`: the login form without a session, the dashboard with one
#[component]
fn Home() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show when=move || auth.is_authenticated() fallback=|| view! { <LoginPage /> }>
            <Shell>
                <CatalogSummaryDashboard />
            </Shell>
        </Show>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--custom not-found">
            <h1>"404"</h1>
            <p>"Halaman tidak ditemukan"</p>
            <A href="/">"Kembali ke dashboard"</A>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=Home />

                <Route path=path!("/product") view=|| view! { <Protected><ProductList /></Protected> } />
                <Route path=path!("/product/create") view=|| view! { <Protected><ProductCreate /></Protected> } />
                <Route path=path!("/product/edit/:id") view=|| view! { <Protected><ProductEdit /></Protected> } />

                <Route path=path!("/product-categories") view=|| view! { <Protected><ProductCategoryList /></Protected> } />
                <Route path=path!("/product-categories/create") view=|| view! { <Protected><ProductCategoryCreate /></Protected> } />
                <Route path=path!("/product-categories/edit/:id") view=|| view! { <Protected><ProductCategoryEdit /></Protected> } />

                <Route path=path!("/product-variant") view=|| view! { <Protected><ProductVariantList /></Protected> } />
                <Route path=path!("/product-variant/create") view=|| view! { <Protected><ProductVariantCreate /></Protected> } />
                <Route path=path!("/product-variant/edit/:id") view=|| view! { <Protected><ProductVariantEdit /></Protected> } />
            </Routes>
        </Router>
    }
}
