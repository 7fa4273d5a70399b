//! Form for logging a consumed product
//!
//! - validation.rs: raw input, request building, name suggestions
//! - view_model.rs: form state and the save command
//! - view.rs: Leptos component

pub mod validation;
mod view;
mod view_model;

pub use view::LogConsumedProductForm;
pub use view_model::LogFormViewModel;
