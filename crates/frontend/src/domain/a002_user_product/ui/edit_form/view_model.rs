use super::validation::EditInput;
use crate::domain::a002_user_product::ui::list::model;
use crate::shared::api_utils::ApiConfig;
use contracts::domain::a002_user_product::aggregate::UserProduct;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel for editing one user product
#[derive(Clone, Copy)]
pub struct EditProductViewModel {
    pub input: RwSignal<EditInput>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl EditProductViewModel {
    pub fn new(product: &UserProduct) -> Self {
        Self {
            input: RwSignal::new(EditInput::from_row(product)),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Validate and PUT the update. `on_saved` runs on success only.
    pub fn save_command(&self, config: ApiConfig, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let request = match self.input.with_untracked(|f| f.validate()) {
            Ok(request) => request,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };
        self.error.set(None);
        self.saving.set(true);

        let vm = *self;
        spawn_local(async move {
            let result = model::update_user_product(&config, &request).await;
            vm.saving.try_set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::warn!("Failed to update product: {}", e);
                    vm.error.try_set(Some(e.user_message()));
                }
            }
        });
    }
}
