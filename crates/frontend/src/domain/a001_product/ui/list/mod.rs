pub mod state;

use leptos::prelude::*;

use self::state::ProductRow;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::ui::{Button, Input};
use crate::shared::icons::icon;
use crate::shared::list_view_model::ListViewModel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn ProductList() -> impl IntoView {
    let vm = ListViewModel::<ProductRow>::new();
    vm.fetch();

    let header = move |label: &'static str, field: &'static str, align: &'static str| {
        view! {
            <SortableHeaderCell
                label=label
                sort_field=field
                align=align
                indicator=Signal::derive(move || vm.sort_indicator(field))
                on_sort=Callback::new(move |f: String| vm.toggle_sort(&f))
            />
        }
    };

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader title="Products">
                    <Button on_click=Callback::new(move |_| vm.open_create())>
                        {icon("plus")}
                        " Tambah"
                    </Button>
                    <Button variant="secondary" on_click=Callback::new(move |_| vm.fetch())>
                        {icon("refresh")}
                        " Muat ulang"
                    </Button>
                </PageHeader>
            </div>
            <div class="page__content">
                <div class="filter-bar">
                    <Input
                        value=Signal::derive(move || vm.state.with(|s| s.search_query.clone()))
                        on_input=Callback::new(move |q| vm.set_search(q))
                        placeholder="Cari nama, deskripsi atau kategori..."
                    />
                </div>
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                {header("Name", "name", "left")}
                                {header("Category", "category", "left")}
                                {header("Price", "price", "right")}
                                {header("Stock", "stock", "right")}
                                {header("Created", "created_at", "left")}
                                <th class="table__header-cell table__header-cell--actions"></th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || vm.is_loading() && vm.rows().is_empty()>
                                <tr><td class="table__cell table__cell--empty" colspan="6">"Loading..."</td></tr>
                            </Show>
                            <For
                                each=move || vm.rows()
                                key=|row: &ProductRow| format!("{:?}", row)
                                children=move |row: ProductRow| {
                                    let edit_id = row.id.clone();
                                    let to_delete = row.clone();
                                    let id = row.id.clone();
                                    view! {
                                        <tr class="table__row" on:dblclick=move |_| vm.open_edit(&edit_id)>
                                            <td class="table__cell">
                                                <div class="table__cell-title">{row.name}</div>
                                                <div class="table__cell-subtitle">{row.description}</div>
                                            </td>
                                            <td class="table__cell">{row.category}</td>
                                            <td class="table__cell table__cell--right">{row.price}</td>
                                            <td class="table__cell table__cell--right">{row.stock}</td>
                                            <td class="table__cell">{row.created_at}</td>
                                            <td class="table__cell table__cell--actions">
                                                <Button
                                                    variant="ghost"
                                                    size="sm"
                                                    title="Edit"
                                                    on_click=Callback::new(move |_| vm.open_edit(&id))
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    variant="ghost"
                                                    size="sm"
                                                    title="Hapus"
                                                    on_click=Callback::new(move |_| vm.delete(&to_delete))
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </PageFrame>
    }
}
