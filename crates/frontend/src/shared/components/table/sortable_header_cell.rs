//! Clickable table header cell showing the sort direction.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Price"
//!     sort_field="price"
//!     indicator=Signal::derive(move || vm.sort_indicator("price"))
//!     on_sort=Callback::new(move |field: String| vm.toggle_sort(&field))
//!     align="right"
//! />
//! ```

use leptos::prelude::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Field name handed to `on_sort`
    #[prop(into)]
    sort_field: String,
    /// One of the `get_sort_indicator` glyphs
    #[prop(into)]
    indicator: Signal<&'static str>,
    on_sort: Callback<String>,
    /// "left" (default) or "right" for numeric columns
    #[prop(optional, into)]
    align: MaybeProp<String>,
) -> impl IntoView {
    let class = move || {
        if align.get().as_deref() == Some("right") {
            "table__header-cell table__header-cell--sortable table__header-cell--right"
        } else {
            "table__header-cell table__header-cell--sortable"
        }
    };

    view! {
        <th class=class on:click=move |_| on_sort.run(sort_field.clone())>
            {label}
            <span class="table__sort-indicator">{move || indicator.get()}</span>
        </th>
    }
}
