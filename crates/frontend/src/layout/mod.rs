pub mod global_context;
pub mod left;

use crate::shared::icons::icon;
use global_context::AppGlobalContext;
use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------+
/// |          top header          |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// +------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <div class="app-layout">
            <header class="top-header">
                <button class="top-header__toggle" on:click=move |_| ctx.toggle_left()>
                    {icon("menu")}
                </button>
                <span class="top-header__title">"NutriMax"</span>
            </header>

            <div class="app-body">
                <left::Left>
                    {left()}
                </left::Left>
                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
