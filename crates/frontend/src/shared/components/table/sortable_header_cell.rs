//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Kcal"
//!     sort_key="kcal"
//!     sort=Signal::derive(move || state.with(|s| s.sort().clone()))
//!     on_sort=Callback::new(move |key| state.update(|s| s.toggle_sort(key)))
//!     align="right"
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::table_view::SortSpec;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,
    /// Column key passed to `on_sort`
    sort_key: &'static str,
    #[prop(into)]
    sort: Signal<SortSpec>,
    on_sort: Callback<&'static str>,
    #[prop(optional, default = 100.0)]
    min_width: f64,
    /// left or right
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_key)
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, sort_key))>
                    {move || sort.with(|s| get_sort_indicator(s, sort_key))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
