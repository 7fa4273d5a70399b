pub mod model;

use self::model::{DeleteUserProduct, UserProductsSource};
use crate::domain::a002_user_product::ui::add_form::AddUserProductForm;
use crate::domain::a002_user_product::ui::edit_form::EditUserProductForm;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::table::{DataTable, TableViewToolbar};
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm_action;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_view::{
    bulk_action, load, reload, BulkOutcome, SortDirection, SortSpec, TableViewState,
};
use contracts::domain::a002_user_product::aggregate::UserProduct;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a002-user-product-table";

#[component]
pub fn MyProductsList() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_build_env);
    let api = StoredValue::new(config.clone());
    let state = RwSignal::new(TableViewState::<UserProduct>::new(SortSpec::by(
        "productName",
        SortDirection::Asc,
    )));
    let (notice, set_notice) = signal::<Option<String>>(None);
    let editing = RwSignal::new(None::<UserProduct>);

    let refresh = move || {
        spawn_local(async move {
            load(&state, &UserProductsSource::new(api.get_value())).await;
        });
    };

    // After a product was added the table must not keep an older response.
    let reload_changed = move || {
        spawn_local(async move {
            reload(&state, &UserProductsSource::new(api.get_value())).await;
        });
    };

    let delete_selected = move || {
        let count = state.with_untracked(|s| s.selection().len());
        if count == 0 || !confirm_action(&format!("Delete {} selected product(s)?", count)) {
            return;
        }
        set_notice.set(None);
        spawn_local(async move {
            let config = api.get_value();
            let outcome = bulk_action(
                &state,
                &DeleteUserProduct::new(config.clone()),
                &UserProductsSource::new(config),
            )
            .await;
            if let BulkOutcome::Completed { applied, .. } = outcome {
                set_notice.set(Some(format!("Deleted {} product(s).", applied)));
            }
        });
    };

    let edit_selected = move || {
        set_notice.set(None);
        editing.set(state.with_untracked(|s| s.single_selected().cloned()));
    };

    let edit_saved = Callback::new(move |_: ()| {
        editing.set(None);
        state.update(|s| s.clear_selection());
        set_notice.set(Some("Product updated.".to_string()));
        reload_changed();
    });

    refresh();

    let busy = Signal::derive(move || state.with(|s| s.is_busy()));
    let nothing_selected = Signal::derive(move || state.with(|s| s.selection().is_empty()));

    view! {
        <PageFrame page_id="a002_user_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"My products"</h1>
                    <Badge>{move || state.with(|s| s.rows().len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| edit_selected()
                        disabled=Signal::derive(move || {
                            busy.get()
                                || editing.with(Option::is_some)
                                || state.with(|s| s.single_selected().is_none())
                        })
                    >
                        {icon("edit")}
                        " Edit selected"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| delete_selected()
                        disabled=Signal::derive(move || busy.get() || nothing_selected.get())
                    >
                        {icon("trash")}
                        {move || format!(" Delete selected ({})", state.with(|s| s.selection().len()))}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refresh()
                        disabled=busy
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <AddUserProductForm
                    config=config
                    on_added=Callback::new(move |_| {
                        set_notice.set(None);
                        reload_changed();
                    })
                />
                {
                    let config = api.get_value();
                    move || {
                        editing.get().map(|product| {
                            view! {
                                <EditUserProductForm
                                    config=config.clone()
                                    product=product
                                    on_saved=edit_saved
                                    on_cancel=Callback::new(move |_| editing.set(None))
                                />
                            }
                        })
                    }
                }
                <TableViewToolbar state=state search_placeholder="Search my products..." />
                {move || notice.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
                <DataTable state=state table_id=TABLE_ID empty_text="You have not added any products yet." />
            </div>
        </PageFrame>
    }
}
