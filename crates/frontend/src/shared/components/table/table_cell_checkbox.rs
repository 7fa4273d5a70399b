//! Row selection checkbox
//!
//! ```rust,ignore
//! <TableCellCheckbox
//!     checked=Signal::derive(move || state.with(|s| s.is_selected(&id)))
//!     on_change=Callback::new(move |_| state.update(|s| { s.toggle_row_selection(&id); }))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                prop:disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableCell>
    }
}
