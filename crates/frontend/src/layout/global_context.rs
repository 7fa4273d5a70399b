use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pages reachable from the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    AllProducts,
    MyProducts,
    ConsumedProducts,
}

impl AppPage {
    pub const ALL: [AppPage; 3] = [Self::AllProducts, Self::MyProducts, Self::ConsumedProducts];

    pub fn key(&self) -> &'static str {
        match self {
            Self::AllProducts => "a001_product",
            Self::MyProducts => "a002_user_product",
            Self::ConsumedProducts => "a003_consumed_product",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AllProducts => "All products",
            Self::MyProducts => "My products",
            Self::ConsumedProducts => "Consumed products",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::AllProducts => "products",
            Self::MyProducts => "my-products",
            Self::ConsumedProducts => "consumed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PageQuery {
    active: Option<String>,
}

/// Read `?active=<key>` from a location search string.
fn page_from_search(search: &str) -> Option<AppPage> {
    let query: PageQuery = serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    query.active.as_deref().and_then(AppPage::from_key)
}

fn search_for(page: AppPage) -> String {
    let query = HashMap::from([("active", page.key())]);
    format!("?{}", serde_qs::to_string(&query).unwrap_or_default())
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppPage>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppPage::default()),
            left_open: RwSignal::new(true),
        }
    }

    /// Keep the active page in sync with `?active=` in the address bar.
    pub fn init_router_integration(&self) {
        let search = window().location().search().unwrap_or_default();
        if let Some(page) = page_from_search(&search) {
            self.active.set(page);
        }

        let active = self.active;
        Effect::new(move |_| {
            let new_search = search_for(active.get());
            let location = window().location();
            if location.search().unwrap_or_default() == new_search {
                return;
            }
            if let Ok(history) = window().history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_search),
                );
            }
        });
    }

    /// Active page, notifying only when it actually changes
    pub fn current_page(&self) -> Memo<AppPage> {
        let active = self.active;
        Memo::new(move |_| active.get())
    }

    pub fn open_page(&self, page: AppPage) {
        log::debug!("Opening page {}", page.key());
        self.active.set(page);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_round_trip() {
        for page in AppPage::ALL {
            assert_eq!(AppPage::from_key(page.key()), Some(page));
        }
        assert_eq!(AppPage::from_key("a999_unknown"), None);
    }

    #[test]
    fn test_current_page_follows_sidebar() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppGlobalContext::new();
            let page = ctx.current_page();
            assert_eq!(page.get_untracked(), AppPage::AllProducts);

            ctx.open_page(AppPage::MyProducts);
            assert_eq!(page.get_untracked(), AppPage::MyProducts);

            ctx.open_page(AppPage::ConsumedProducts);
            assert_eq!(page.get_untracked(), AppPage::ConsumedProducts);
        });
    }

    #[test]
    fn test_page_from_search() {
        assert_eq!(
            page_from_search("?active=a003_consumed_product"),
            Some(AppPage::ConsumedProducts)
        );
        assert_eq!(page_from_search(""), None);
        assert_eq!(page_from_search("?active=nope"), None);
        assert_eq!(search_for(AppPage::MyProducts), "?active=a002_user_product");
    }
}
