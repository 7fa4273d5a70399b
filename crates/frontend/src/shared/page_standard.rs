//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_product--list"`) and a `data-page-category` with one of the
//! constants below.

/// Table of records with search, sorting and bulk actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Form for creating a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DETAIL];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}
