pub mod api_error;
pub mod datetime;
pub mod envelope;
pub mod table_schema;
