//! Edit form for the one selected user product
//!
//! - validation.rs: prefilled input and the update request
//! - view_model.rs: form state and the save command
//! - view.rs: Leptos component

pub mod validation;
mod view;
mod view_model;

pub use view::EditUserProductForm;
pub use view_model::EditProductViewModel;
