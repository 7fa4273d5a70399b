use crate::shared::table_view::{CellValue, ViewRow};
use contracts::domain::a003_consumed_product::aggregate::ConsumedProduct;
use contracts::domain::a003_consumed_product::columns::CONSUMED_PRODUCT_COLUMNS;
use contracts::shared::table_schema::ColumnDef;

impl ViewRow for ConsumedProduct {
    type Id = i64;

    fn columns() -> &'static [ColumnDef] {
        CONSUMED_PRODUCT_COLUMNS
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
            "amount" => self.amount.into(),
            "kcal" => self.kcal.into(),
            "protein" => self.protein.into(),
            "carbs" => self.carbs.into(),
            "fat" => self.fat.into(),
            "satFat" => self.sat_fat.into(),
            "sugar" => self.sugar.into(),
            "salt" => self.salt.into(),
            "cost" => self.cost.into(),
            "createdAt" => self.created_at.into(),
            _ => CellValue::Null,
        }
    }
}
