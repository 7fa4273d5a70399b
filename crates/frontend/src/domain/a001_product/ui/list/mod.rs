pub mod model;

use self::model::{AddToMyProducts, AllProductsSource};
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::table::{DataTable, TableViewToolbar};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_view::{
    bulk_action, load, BulkOutcome, SortDirection, SortSpec, TableViewState,
};
use contracts::domain::a001_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a001-product-table";

#[component]
pub fn AllProductsList() -> impl IntoView {
    let api = StoredValue::new(use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_build_env));
    let state = RwSignal::new(TableViewState::<Product>::new(SortSpec::by(
        "productName",
        SortDirection::Asc,
    )));
    let (notice, set_notice) = signal::<Option<String>>(None);

    let reload = move || {
        set_notice.set(None);
        spawn_local(async move {
            load(&state, &AllProductsSource::new(api.get_value())).await;
        });
    };

    let add_selected = move || {
        set_notice.set(None);
        spawn_local(async move {
            let config = api.get_value();
            let outcome = bulk_action(
                &state,
                &AddToMyProducts::new(config.clone()),
                &AllProductsSource::new(config),
            )
            .await;
            if let BulkOutcome::Completed { applied, .. } = outcome {
                set_notice.set(Some(format!("Added {} product(s) to My Products.", applied)));
            }
        });
    };

    reload();

    let busy = Signal::derive(move || state.with(|s| s.is_busy()));
    let nothing_selected = Signal::derive(move || state.with(|s| s.selection().is_empty()));

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"All products"</h1>
                    <Badge>{move || state.with(|s| s.rows().len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| add_selected()
                        disabled=Signal::derive(move || busy.get() || nothing_selected.get())
                    >
                        {icon("plus")}
                        {move || format!(" Add selected ({})", state.with(|s| s.selection().len()))}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| reload()
                        disabled=busy
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <TableViewToolbar state=state search_placeholder="Search products..." />
                {move || notice.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
                <DataTable state=state table_id=TABLE_ID empty_text="The catalog is empty." />
            </div>
        </PageFrame>
    }
}
