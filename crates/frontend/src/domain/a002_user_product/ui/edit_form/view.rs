use super::view_model::EditProductViewModel;
use crate::domain::a002_user_product::ui::add_form::TextField;
use crate::shared::api_utils::ApiConfig;
use contracts::domain::a002_user_product::aggregate::UserProduct;
use contracts::domain::a002_user_product::request::ProteinType;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EditUserProductForm(
    config: ApiConfig,
    product: UserProduct,
    /// Runs after the update was accepted
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = EditProductViewModel::new(&product);
    let config = StoredValue::new(config);
    let input = vm.input;
    let current_name = product.product_name.clone().unwrap_or_default();

    macro_rules! field {
        ($label:expr, $field:ident) => {
            view! {
                <TextField
                    label=$label
                    value=Signal::derive(move || input.with(|f| f.$field.clone()))
                    on_input=Callback::new(move |v: String| input.update(|f| f.$field = v))
                    numeric=true
                />
            }
        };
    }

    let protein_buttons = ProteinType::ALL
        .into_iter()
        .map(|protein| {
            view! {
                <Button
                    size=ButtonSize::Small
                    appearance=move || {
                        if input.with(|f| f.protein_type) == Some(protein) {
                            ButtonAppearance::Primary
                        } else {
                            ButtonAppearance::Secondary
                        }
                    }
                    on_click=move |_| input.update(|f| f.protein_type = Some(protein))
                >
                    {protein.label()}
                </Button>
            }
        })
        .collect_view();

    view! {
        <Card class="edit-product-form">
            <h2 class="card__title">"Edit product"</h2>
            <div class="form-hint">"Current product: " <strong>{current_name}</strong></div>

            <TextField
                label="New name"
                value=Signal::derive(move || input.with(|f| f.product_name.clone()))
                on_input=Callback::new(move |v: String| input.update(|f| f.product_name = v))
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
            <div class="form-group">
                <label>"Protein type"</label>
                <Flex gap=FlexGap::Small>{protein_buttons}</Flex>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command(config.get_value(), on_saved)
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {move || if vm.saving.get() { "Saving..." } else { "Save" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    "Cancel"
                </Button>
            </div>
        </Card>
    }
}
