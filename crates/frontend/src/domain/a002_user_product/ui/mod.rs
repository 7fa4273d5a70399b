pub mod add_form;
pub mod edit_form;
pub mod list;
