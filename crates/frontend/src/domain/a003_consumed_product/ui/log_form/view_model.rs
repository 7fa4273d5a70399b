use super::validation::{merge_names, suggestions, LogInput};
use crate::domain::a001_product::ui::list::model::fetch_product_names;
use crate::domain::a002_user_product::ui::list::model::fetch_user_product_names;
use crate::domain::a003_consumed_product::ui::list::model::save_consumed_product;
use crate::shared::api_utils::ApiConfig;
use crate::shared::date_utils::{format_input_date, today};
use chrono::Local;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const SUCCESS_VISIBLE_MS: u32 = 5_000;

/// Success message that hides itself after a delay. Each `show` gets a new
/// sequence number so an older timer cannot hide a newer message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flash {
    text: Option<String>,
    seq: u64,
}

impl Flash {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.seq += 1;
        self.text = Some(text.into());
        self.seq
    }

    /// Hide the message if it is still the one shown as `seq`
    pub fn expire(&mut self, seq: u64) {
        if self.seq == seq {
            self.text = None;
        }
    }
}

/// ViewModel for the consumed-product log form
#[derive(Clone, Copy)]
pub struct LogFormViewModel {
    pub form: RwSignal<LogInput>,
    /// Catalog and user product names for autocomplete
    pub names: RwSignal<Vec<String>>,
    pub show_suggestions: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub success: RwSignal<Flash>,
    pub saving: RwSignal<bool>,
}

impl LogFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(LogInput {
                date: format_input_date(today()),
                ..Default::default()
            }),
            names: RwSignal::new(Vec::new()),
            show_suggestions: RwSignal::new(false),
            error: RwSignal::new(None),
            success: RwSignal::new(Flash::default()),
            saving: RwSignal::new(false),
        }
    }

    /// Fetch both name lists. A failed list is logged and left out.
    pub fn load_names(&self, config: ApiConfig) {
        let names = self.names;
        spawn_local(async move {
            let catalog = fetch_product_names(&config).await.unwrap_or_else(|e| {
                log::warn!("Failed to load catalog names: {}", e);
                Vec::new()
            });
            let user = fetch_user_product_names(&config).await.unwrap_or_else(|e| {
                log::warn!("Failed to load user product names: {}", e);
                Vec::new()
            });
            names.try_set(merge_names(catalog, user));
        });
    }

    pub fn current_suggestions(&self) -> Vec<String> {
        let input = self.form.with(|f| f.product_name.clone());
        self.names.with(|names| {
            suggestions(names, &input)
                .into_iter()
                .map(str::to_string)
                .collect()
        })
    }

    pub fn set_product_name(&self, value: String) {
        self.form.update(|f| f.product_name = value);
        self.show_suggestions.set(true);
    }

    pub fn pick_suggestion(&self, value: String) {
        self.form.update(|f| f.product_name = value);
        self.show_suggestions.set(false);
    }

    /// Validate and save. On success the name and amount are cleared, the
    /// message is shown for five seconds and `on_saved` runs.
    pub fn save_command(&self, config: ApiConfig, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        self.error.set(None);
        let request = match self.form.with_untracked(|f| f.validate(Local::now().time())) {
            Ok(request) => request,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            let result = save_consumed_product(&config, &request).await;
            vm.saving.try_set(false);
            match result {
                Ok(()) => {
                    vm.form.try_update(|f| {
                        f.product_name.clear();
                        f.amount.clear();
                    });
                    vm.show_suggestions.try_set(false);
                    let Some(seq) = vm.success.try_update(|m| m.show("Product added successfully")) else {
                        return;
                    };
                    on_saved.run(());

                    TimeoutFuture::new(SUCCESS_VISIBLE_MS).await;
                    vm.success.try_update(|m| m.expire(seq));
                }
                Err(e) => {
                    log::warn!("Failed to save consumed product: {}", e);
                    vm.error.try_set(Some(e.user_message()));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_older_timer_keeps_newer_message() {
        let mut flash = Flash::default();
        let first = flash.show("Product added successfully");
        let second = flash.show("Product added successfully");
        flash.expire(first);
        assert_eq!(flash.text(), Some("Product added successfully"));
        flash.expire(second);
        assert_eq!(flash.text(), None);
    }
}
