//! "Select all visible" checkbox for the table header
//!
//! ```rust,ignore
//! <TableHeaderCheckbox
//!     total=Signal::derive(move || state.with(|s| s.visible_rows().len()))
//!     selected=Signal::derive(move || state.with(|s| s.visible_selected_count()))
//!     on_change=Callback::new(move |all| state.update(|s| s.set_visible_selected(all)))
//! />
//! ```

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

fn checkbox_state(selected: usize, total: usize) -> CheckboxState {
    if total == 0 || selected == 0 {
        CheckboxState::Unchecked
    } else if selected >= total {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

#[component]
pub fn TableHeaderCheckbox(
    /// Rows currently visible
    #[prop(into)]
    total: Signal<usize>,
    /// Visible rows that are selected
    #[prop(into)]
    selected: Signal<usize>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// true = select all visible, false = deselect them
    on_change: Callback<bool>,
) -> impl IntoView {
    let state = Signal::derive(move || checkbox_state(selected.get(), total.get()));
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        let indeterminate = state.get() == CheckboxState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Select all"
                prop:checked=move || state.get() == CheckboxState::Checked
                prop:disabled=move || disabled.get() || total.get() == 0
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_state() {
        assert_eq!(checkbox_state(0, 0), CheckboxState::Unchecked);
        assert_eq!(checkbox_state(0, 3), CheckboxState::Unchecked);
        assert_eq!(checkbox_state(2, 3), CheckboxState::Indeterminate);
        assert_eq!(checkbox_state(3, 3), CheckboxState::Checked);
    }
}
