pub mod list;
pub mod log_form;
