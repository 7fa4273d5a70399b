pub mod model;

use self::model::{ConsumedProductsSource, DeleteConsumedProduct};
use crate::domain::a003_consumed_product::ui::log_form::LogConsumedProductForm;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::table::{DataTable, TableViewToolbar};
use crate::shared::date_utils::{format_input_date, parse_input_date, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm_action;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::table_view::{
    bulk_action, load, reload, BulkOutcome, SortDirection, SortSpec, TableViewState,
};
use contracts::domain::a003_consumed_product::aggregate::ConsumedProduct;
use contracts::domain::a003_consumed_product::request::ConsumedRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const TABLE_ID: &str = "a003-consumed-product-table";

fn entries(count: usize) -> String {
    if count == 1 {
        "1 entry".to_string()
    } else {
        format!("{} entries", count)
    }
}

/// Turn the two date inputs into a range. Empty or reversed input is an error.
fn custom_range(start: &str, end: &str) -> Result<ConsumedRange, String> {
    let (Some(start), Some(end)) = (parse_input_date(start), parse_input_date(end)) else {
        return Err("Please pick both a start and an end date.".to_string());
    };
    ConsumedRange::between(start, end)
        .ok_or_else(|| "Start date must not be after end date.".to_string())
}

#[component]
pub fn ConsumedProductsList() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_build_env);
    let api = StoredValue::new(config.clone());
    let state = RwSignal::new(TableViewState::<ConsumedProduct>::new(SortSpec::by(
        "createdAt",
        SortDirection::Desc,
    )));
    let range = RwSignal::new(ConsumedRange::default());
    let start_date = RwSignal::new(format_input_date(today()));
    let end_date = RwSignal::new(format_input_date(today()));
    let range_error = RwSignal::new(None::<String>);
    let (notice, set_notice) = signal::<Option<String>>(None);

    let source = move || ConsumedProductsSource::new(api.get_value(), range.get_untracked());

    let refresh = move || {
        let source = source();
        spawn_local(async move {
            load(&state, &source).await;
        });
    };

    // Runs after the range or the data changed, so it must not be skipped.
    let reload_changed = move || {
        let source = source();
        spawn_local(async move {
            reload(&state, &source).await;
        });
    };

    let select_range = move |next: ConsumedRange| {
        range_error.set(None);
        set_notice.set(None);
        range.set(next);
        reload_changed();
    };

    let apply_custom = move || {
        match custom_range(&start_date.get_untracked(), &end_date.get_untracked()) {
            Ok(next) => select_range(next),
            Err(e) => range_error.set(Some(e)),
        }
    };

    let delete_selected = move || {
        let count = state.with_untracked(|s| s.selection().len());
        if count == 0 || !confirm_action(&format!("Delete {} selected?", entries(count))) {
            return;
        }
        set_notice.set(None);
        spawn_local(async move {
            let outcome = bulk_action(
                &state,
                &DeleteConsumedProduct::new(api.get_value()),
                &source(),
            )
            .await;
            if let BulkOutcome::Completed { applied, .. } = outcome {
                set_notice.set(Some(format!("Deleted {}.", entries(applied))));
            }
        });
    };

    refresh();

    let busy = Signal::derive(move || state.with(|s| s.is_busy()));
    let nothing_selected = Signal::derive(move || state.with(|s| s.selection().is_empty()));

    view! {
        <PageFrame page_id="a003_consumed_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Consumed products"</h1>
                    <Badge>{move || range.get().label()}</Badge>
                </div>
                <div class="page__header-right">
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
                <LogConsumedProductForm
                    config=config
                    on_saved=Callback::new(move |_| {
                        set_notice.set(None);
                        reload_changed();
                    })
                />

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small>
                        {ConsumedRange::PRESETS
                            .into_iter()
                            .map(|preset| {
                                view! {
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=move || {
                                            if range.get() == preset {
                                                ButtonAppearance::Primary
                                            } else {
                                                ButtonAppearance::Subtle
                                            }
                                        }
                                        on_click=move |_| select_range(preset)
                                        disabled=busy
                                    >
                                        {preset.label()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                    </Flex>
                    <Flex gap=FlexGap::Small>
                        <div class="form-group form-group--inline">
                            <label for="consumed-range-start">"From"</label>
                            <input
                                id="consumed-range-start"
                                type="date"
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group form-group--inline">
                            <label for="consumed-range-end">"To"</label>
                            <input
                                id="consumed-range-end"
                                type="date"
                                prop:value=move || end_date.get()
                                on:input=move |ev| end_date.set(event_target_value(&ev))
                            />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| apply_custom()
                            disabled=busy
                        >
                            "Apply"
                        </Button>
                    </Flex>
                    {move || range_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                </div>

                <TableViewToolbar state=state search_placeholder="Search consumed products..." />
                {move || notice.get().map(|msg| view! { <div class="alert alert--success">{msg}</div> })}
                <DataTable state=state table_id=TABLE_ID empty_text="Nothing logged for this period." />
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_custom_range_accepts_ordered_dates() {
        let range = custom_range("2025-03-01", "2025-03-04").unwrap();
        assert_eq!(
            range,
            ConsumedRange::Between {
                start: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                end: NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(),
            }
        );
        assert!(custom_range("2025-03-04", "2025-03-04").is_ok());
    }

    #[test]
    fn test_entries_pluralized() {
        assert_eq!(entries(1), "1 entry");
        assert_eq!(entries(0), "0 entries");
        assert_eq!(entries(3), "3 entries");
    }

    #[test]
    fn test_custom_range_rejects_reversed_or_missing() {
        assert_eq!(
            custom_range("2025-03-05", "2025-03-04"),
            Err("Start date must not be after end date.".to_string())
        );
        assert!(custom_range("", "2025-03-04").is_err());
    }
}
