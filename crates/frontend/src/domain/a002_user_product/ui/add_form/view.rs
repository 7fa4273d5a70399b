use super::validation::ProductFlags;
use super::view_model::{AddProductTab, AddProductViewModel, FormMessage};
use crate::shared::api_utils::ApiConfig;
use crate::shared::icons::icon;
use contracts::domain::a002_user_product::request::ProteinType;
use leptos::prelude::*;
use thaw::*;

/// Labelled text input bound to one field of a form struct
#[component]
pub(crate) fn TextField(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)]
    placeholder: &'static str,
    #[prop(optional)]
    numeric: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="text"
                inputmode=if numeric { "decimal" } else { "text" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Protein type buttons and dietary checkboxes
#[component]
fn FlagsEditor(
    #[prop(into)]
    flags: Signal<ProductFlags>,
    on_change: Callback<ProductFlags>,
) -> impl IntoView {
    let protein_buttons = ProteinType::ALL
        .into_iter()
        .map(|protein| {
            view! {
                <Button
                    size=ButtonSize::Small
                    appearance=Signal::derive(move || {
                        if flags.get().protein == Some(protein) {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Secondary
                        }
                    })
                    on_click=move |_| {
                        let mut f = flags.get_untracked();
                        f.protein = Some(protein);
                        on_change.run(f);
                    }
                >
                    {protein.label()}
                </Button>
            }
        })
        .collect_view();

    let checkbox = move |label: &'static str, get: fn(&ProductFlags) -> bool, set: fn(&mut ProductFlags, bool)| {
        view! {
            <label class="form-check">
                <input
                    type="checkbox"
                    prop:checked=move || get(&flags.get())
                    on:change=move |ev| {
                        let mut f = flags.get_untracked();
                        set(&mut f, event_target_checked(&ev));
                        on_change.run(f);
                    }
                />
                {label}
            </label>
        }
    };

    view! {
        <div class="form-group">
            <label>"Protein type"</label>
            <Flex gap=FlexGap::Small>{protein_buttons}</Flex>
        </div>
        <Flex gap=FlexGap::Medium>
            {checkbox("Vegan", |f| f.vegan, |f, v| f.vegan = v)}
            {checkbox("Vegetarian", |f| f.vegetarian, |f, v| f.vegetarian = v)}
            {checkbox("Dairy free", |f| f.dairy_free, |f, v| f.dairy_free = v)}
        </Flex>
    }
}

#[component]
fn ManualTab(vm: AddProductViewModel) -> impl IntoView {
    let m = vm.manual;
    macro_rules! field {
        ($label:expr, $field:ident) => {
            view! {
                <TextField
                    label=$label
                    value=Signal::derive(move || m.with(|f| f.$field.clone()))
                    on_input=Callback::new(move |v: String| m.update(|f| f.$field = v))
                    numeric=true
                />
            }
        };
    }

    view! {
        <TextField
            label="Product name"
            value=Signal::derive(move || m.with(|f| f.product_name.clone()))
            on_input=Callback::new(move |v: String| m.update(|f| f.product_name = v))
        />
        <div class="form-grid">
            {field!("Kcal", kcal)}
            {field!("Fat", fat)}
            {field!("Saturated fat", sat_fat)}
            {field!("Carbs", carbs)}
            {field!("Sugars", sugars)}
            {field!("Protein", protein)}
            {field!("Salt", salt)}
            {field!("Price per kg", price1kg)}
        </div>
        <FlagsEditor
            flags=Signal::derive(move || m.with(|f| f.flags))
            on_change=Callback::new(move |flags| m.update(|f| f.flags = flags))
        />
    }
}

#[component]
fn RimiTab(vm: AddProductViewModel) -> impl IntoView {
    let r = vm.rimi;
    view! {
        <TextField
            label="Rimi product URL"
            placeholder="https://www.rimi.lv/e-veikals/..."
            value=Signal::derive(move || r.with(|f| f.url.clone()))
            on_input=Callback::new(move |v: String| r.update(|f| f.url = v))
        />
        <TextField
            label="Product name (optional)"
            value=Signal::derive(move || r.with(|f| f.product_name.clone()))
            on_input=Callback::new(move |v: String| r.update(|f| f.product_name = v))
        />
        <TextField
            label="Mass, g (optional)"
            numeric=true
            value=Signal::derive(move || r.with(|f| f.mass_g.clone()))
            on_input=Callback::new(move |v: String| r.update(|f| f.mass_g = v))
        />
        <FlagsEditor
            flags=Signal::derive(move || r.with(|f| f.flags))
            on_change=Callback::new(move |flags| r.update(|f| f.flags = flags))
        />
    }
}

#[component]
fn NutritionValueTab(vm: AddProductViewModel) -> impl IntoView {
    let n = vm.nutrition_value;
    view! {
        <TextField
            label="NutritionValue URL"
            placeholder="https://www.nutritionvalue.org/..."
            value=Signal::derive(move || n.with(|f| f.url.clone()))
            on_input=Callback::new(move |v: String| n.update(|f| f.url = v))
        />
        <TextField
            label="Product name (optional)"
            value=Signal::derive(move || n.with(|f| f.product_name.clone()))
            on_input=Callback::new(move |v: String| n.update(|f| f.product_name = v))
        />
        <div class="form-grid">
            <TextField
                label="Price per kg"
                numeric=true
                value=Signal::derive(move || n.with(|f| f.price1kg.clone()))
                on_input=Callback::new(move |v: String| n.update(|f| f.price1kg = v))
            />
            <TextField
                label="Price per unit"
                numeric=true
                value=Signal::derive(move || n.with(|f| f.price_per_unit.clone()))
                on_input=Callback::new(move |v: String| n.update(|f| f.price_per_unit = v))
            />
            <TextField
                label="Mass per unit, g"
                numeric=true
                value=Signal::derive(move || n.with(|f| f.mass_per_unit.clone()))
                on_input=Callback::new(move |v: String| n.update(|f| f.mass_per_unit = v))
            />
        </div>
        <FlagsEditor
            flags=Signal::derive(move || n.with(|f| f.flags))
            on_change=Callback::new(move |flags| n.update(|f| f.flags = flags))
        />
    }
}

#[component]
pub fn AddUserProductForm(
    config: ApiConfig,
    /// Runs after a product was added
    on_added: Callback<()>,
) -> impl IntoView {
    let vm = AddProductViewModel::new();
    let config = StoredValue::new(config);

    view! {
        <Card class="add-product-form">
            <h2 class="card__title">"Add product"</h2>
            <TabList selected_value=vm.tab>
                {AddProductTab::ALL
                    .into_iter()
                    .map(|tab| view! { <Tab value=tab.as_str()>{tab.label()}</Tab> })
                    .collect_view()}
            </TabList>

            <div class="tab-content">
                {move || match vm.active_tab() {
                    AddProductTab::Manual => view! { <ManualTab vm=vm /> }.into_any(),
                    AddProductTab::RimiUrl => view! { <RimiTab vm=vm /> }.into_any(),
                    AddProductTab::NutritionValueUrl => view! { <NutritionValueTab vm=vm /> }.into_any(),
                }}
            </div>

            {move || {
                vm.message.get().map(|msg| match msg {
                    FormMessage::Success(text) => view! { <div class="alert alert--success">{text}</div> }.into_any(),
                    FormMessage::Error(text) => view! { <div class="alert alert--error">{text}</div> }.into_any(),
                })
            }}

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit_command(config.get_value(), on_added)
                    disabled=Signal::derive(move || vm.submitting.get())
                >
                    {icon("plus")}
                    {move || if vm.submitting.get() { " Adding..." } else { " Add product" }}
                </Button>
            </div>
        </Card>
    }
}
