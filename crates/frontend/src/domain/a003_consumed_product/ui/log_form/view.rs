use super::view_model::LogFormViewModel;
use crate::shared::api_utils::ApiConfig;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LogConsumedProductForm(
    config: ApiConfig,
    /// Runs after an entry was saved
    on_saved: Callback<()>,
) -> impl IntoView {
    let vm = LogFormViewModel::new();
    vm.load_names(config.clone());
    let config = StoredValue::new(config);

    view! {
        <Card class="log-form">
            <h2 class="card__title">"Log consumed product"</h2>
            <div class="form-grid">
                <div class="form-group form-group--autocomplete">
                    <label for="consumed-product-name">"Product"</label>
                    <input
                        id="consumed-product-name"
                        type="text"
                        autocomplete="off"
                        placeholder="Start typing a product name"
                        prop:value=move || vm.form.with(|f| f.product_name.clone())
                        on:input=move |ev| vm.set_product_name(event_target_value(&ev))
                    />
                    <Show when=move || vm.show_suggestions.get() && !vm.current_suggestions().is_empty()>
                        <ul class="autocomplete__list">
                            {move || {
                                vm.current_suggestions()
                                    .into_iter()
                                    .map(|name| {
                                        let picked = name.clone();
                                        view! {
                                            <li
                                                class="autocomplete__item"
                                                on:mousedown=move |ev| {
                                                    ev.prevent_default();
                                                    vm.pick_suggestion(picked.clone());
                                                }
                                            >
                                                {name}
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                </div>

                <div class="form-group">
                    <label for="consumed-amount">"Amount, g"</label>
                    <input
                        id="consumed-amount"
                        type="number"
                        min="0"
                        step="any"
                        prop:value=move || vm.form.with(|f| f.amount.clone())
                        on:input=move |ev| vm.form.update(|f| f.amount = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="consumed-date">"Date"</label>
                    <input
                        id="consumed-date"
                        type="date"
                        prop:value=move || vm.form.with(|f| f.date.clone())
                        on:input=move |ev| vm.form.update(|f| f.date = event_target_value(&ev))
                    />
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || {
                vm.success
                    .with(|m| m.text().map(str::to_string))
                    .map(|m| view! { <div class="alert alert--success">{m}</div> })
            }}

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(config.get_value(), on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {icon("plus")}
                    {move || if vm.saving.get() { " Saving..." } else { " Add" }}
                </Button>
            </div>
        </Card>
    }
}
