//! Add-product form for My Products
//!
//! - validation.rs: raw input and its conversion into request bodies
//! - view_model.rs: form state and the submit command
//! - view.rs: Leptos component

pub mod validation;
mod view;
mod view_model;

pub use view::AddUserProductForm;
pub(crate) use view::TextField;
pub use view_model::{AddProductTab, AddProductViewModel, FormMessage};
