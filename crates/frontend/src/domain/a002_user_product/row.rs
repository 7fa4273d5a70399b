use crate::shared::table_view::{CellValue, ViewRow};
use contracts::domain::a002_user_product::aggregate::UserProduct;
use contracts::domain::a002_user_product::columns::USER_PRODUCT_COLUMNS;
use contracts::shared::table_schema::ColumnDef;

impl ViewRow for UserProduct {
    type Id = i64;

    fn columns() -> &'static [ColumnDef] {
        USER_PRODUCT_COLUMNS
    }

    fn row_id(&self) -> i64 {
        self.id
    }

    fn search_text(&self) -> Option<&str> {
        self.product_name.as_deref()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "productName" => self.product_name.as_deref().into(),
            other => self.nutrition.get(other).into(),
        }
    }
}
