use super::validation::{ManualInput, NutritionValueUrlInput, RimiUrlInput};
use crate::domain::a002_user_product::ui::list::model;
use crate::shared::api_utils::{ApiConfig, ApiError};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddProductTab {
    Manual,
    RimiUrl,
    NutritionValueUrl,
}

impl AddProductTab {
    pub const ALL: [AddProductTab; 3] = [Self::Manual, Self::RimiUrl, Self::NutritionValueUrl];

    /// Value used by the tab list
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::RimiUrl => "rimi",
            Self::NutritionValueUrl => "nutrition_value",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::RimiUrl => "Rimi URL",
            Self::NutritionValueUrl => "NutritionValue URL",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .unwrap_or(Self::Manual)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

/// ViewModel for the add-product form
#[derive(Clone, Copy)]
pub struct AddProductViewModel {
    pub tab: RwSignal<String>,
    pub manual: RwSignal<ManualInput>,
    pub rimi: RwSignal<RimiUrlInput>,
    pub nutrition_value: RwSignal<NutritionValueUrlInput>,
    pub message: RwSignal<Option<FormMessage>>,
    pub submitting: RwSignal<bool>,
}

impl AddProductViewModel {
    pub fn new() -> Self {
        Self {
            tab: RwSignal::new(AddProductTab::Manual.as_str().to_string()),
            manual: RwSignal::new(ManualInput::default()),
            rimi: RwSignal::new(RimiUrlInput::default()),
            nutrition_value: RwSignal::new(NutritionValueUrlInput::default()),
            message: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub fn active_tab(&self) -> AddProductTab {
        AddProductTab::parse(&self.tab.get())
    }

    /// Validate the active tab and post it. `on_added` runs after a successful
    /// save, once the tab's fields have been cleared.
    pub fn submit_command(&self, config: ApiConfig, on_added: Callback<()>) {
        if self.submitting.get_untracked() {
            return;
        }
        self.message.set(None);
        let vm = *self;

        match AddProductTab::parse(&self.tab.get_untracked()) {
            AddProductTab::Manual => {
                let Some(request) = vm.validated(self.manual.with_untracked(|f| f.validate())) else {
                    return;
                };
                spawn_local(async move {
                    let result = model::add_product(&config, &request).await;
                    vm.finish(result, "Product added successfully.", on_added, || {
                        vm.manual.set(ManualInput::default())
                    });
                });
            }
            AddProductTab::RimiUrl => {
                let Some(request) = vm.validated(self.rimi.with_untracked(|f| f.validate())) else {
                    return;
                };
                spawn_local(async move {
                    let result = model::add_product_by_rimi_url(&config, &request).await;
                    vm.finish(result, "Product added from Rimi.", on_added, || {
                        vm.rimi.set(RimiUrlInput::default())
                    });
                });
            }
            AddProductTab::NutritionValueUrl => {
                let Some(request) =
                    vm.validated(self.nutrition_value.with_untracked(|f| f.validate()))
                else {
                    return;
                };
                spawn_local(async move {
                    let result = model::add_product_by_nutrition_value_url(&config, &request).await;
                    vm.finish(result, "Product added from NutritionValue.", on_added, || {
                        vm.nutrition_value.set(NutritionValueUrlInput::default())
                    });
                });
            }
        }
    }

    fn validated<T>(&self, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(request) => {
                self.submitting.set(true);
                Some(request)
            }
            Err(e) => {
                self.message.set(Some(FormMessage::Error(e)));
                None
            }
        }
    }

    fn finish(
        &self,
        result: Result<(), ApiError>,
        success: &str,
        on_added: Callback<()>,
        clear: impl FnOnce(),
    ) {
        self.submitting.set(false);
        match result {
            Ok(()) => {
                clear();
                self.message.set(Some(FormMessage::Success(success.to_string())));
                on_added.run(());
            }
            Err(e) => {
                log::warn!("Failed to add product: {}", e);
                self.message.set(Some(FormMessage::Error(e.user_message())));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_values() {
        for tab in AddProductTab::ALL {
            assert_eq!(AddProductTab::parse(tab.as_str()), tab);
        }
        assert_eq!(AddProductTab::parse("unknown"), AddProductTab::Manual);
    }
}
