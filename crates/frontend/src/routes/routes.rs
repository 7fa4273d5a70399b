use crate::domain::a001_product::ui::list::AllProductsList;
use crate::domain::a002_user_product::ui::list::MyProductsList;
use crate::domain::a003_consumed_product::ui::list::ConsumedProductsList;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

fn page_view(page: AppPage) -> AnyView {
    match page {
        AppPage::AllProducts => view! { <AllProductsList /> }.into_any(),
        AppPage::MyProducts => view! { <MyProductsList /> }.into_any(),
        AppPage::ConsumedProducts => view! { <ConsumedProductsList /> }.into_any(),
    }
}

/// Content area: swaps the mounted page when the active page changes.
/// Leaving a page disposes its state, so a pending load resolves into nothing.
#[component]
fn PageHost() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let page = ctx.current_page();

    view! {
        <div class="page-host">
            {move || page_view(page.get())}
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <PageHost /> }.into_any()
        />
    }
}
