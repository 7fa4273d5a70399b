//! Search box, selection summary and error alert above a [`DataTable`].
//!
//! [`DataTable`]: super::DataTable

use crate::shared::list_utils::SearchInput;
use crate::shared::table_view::{TableViewState, ViewPhase, ViewRow};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableViewToolbar<R>(
    state: RwSignal<TableViewState<R>>,
    #[prop(optional, into)]
    search_placeholder: String,
) -> impl IntoView
where
    R: ViewRow,
{
    let selected_count = Signal::derive(move || state.with(|s| s.selection().len()));
    let locked = Signal::derive(move || state.with(|s| s.phase() == ViewPhase::Mutating));

    view! {
        <div class="table-toolbar">
            <Flex gap=FlexGap::Medium align=FlexAlign::Center>
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.filter().as_str().to_string()))
                    on_change=Callback::new(move |q: String| state.update(|s| s.set_filter_query(&q)))
                    placeholder=search_placeholder
                />
                <span class="table-toolbar__count">
                    {move || state.with(|s| format!("{} of {} shown", s.visible_rows().len(), s.rows().len()))}
                </span>
                <Show when=move || { selected_count.get() > 0 }>
                    <span class="table-toolbar__selection">
                        {move || format!("{} selected", selected_count.get())}
                    </span>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| state.update(|s| s.clear_selection())
                        disabled=locked
                    >
                        "Clear selection"
                    </Button>
                </Show>
                <Show when=move || locked.get()>
                    <Spinner size=SpinnerSize::Small />
                </Show>
            </Flex>
        </div>

        {move || {
            state
                .with(|s| s.error().map(str::to_string))
                .map(|err| view! { <div class="alert alert--error">{err}</div> })
        }}
        <Show when=move || state.with(|s| s.reload_pending() && !s.is_busy())>
            <div class="alert alert--warning">"The list changed while the action ran. Refresh to see the latest data."</div>
        </Show>
    }
}
