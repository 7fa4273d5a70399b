//! PageFrame: root wrapper for every routed page.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");
    debug_assert!(is_known_category(category), "unknown page category {category}");

    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };
    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
