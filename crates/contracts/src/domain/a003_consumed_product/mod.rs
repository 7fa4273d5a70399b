pub mod aggregate;
pub mod columns;
pub mod request;
