pub mod data_table;
pub mod number_format;
pub mod sortable_header_cell;
pub mod table_cell_checkbox;
pub mod table_header_checkbox;
pub mod table_view_toolbar;

pub use data_table::DataTable;
pub use number_format::*;
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header_checkbox::TableHeaderCheckbox;
pub use table_view_toolbar::TableViewToolbar;
