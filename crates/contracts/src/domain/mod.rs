pub mod a001_product;
pub mod a002_user_product;
pub mod a003_consumed_product;
pub mod common;
