use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_build_env();
    log::info!("NutriMax API at {}", config.base_url());
    provide_context(config);
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
