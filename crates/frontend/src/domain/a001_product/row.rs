use crate::shared::table_view::{CellValue, ViewRow};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::columns::PRODUCT_COLUMNS;
use contracts::shared::table_schema::ColumnDef;

impl ViewRow for Product {
    type Id = i64;

    fn columns() -> &'static [ColumnDef] {
        PRODUCT_COLUMNS
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

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::NutritionFacts;
    use contracts::shared::table_schema::FieldKind;

    fn product() -> Product {
        Product {
            id: 7,
            product_name: Some("Skyr".into()),
            nutrition: NutritionFacts {
                kcal: Some(63.0),
                dairy_prot: Some(1.0),
                price1kg: None,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_cells_match_column_kinds() {
        let p = product();
        for col in Product::columns() {
            match p.cell(col.key) {
                CellValue::Null => {}
                value => assert_eq!(value.kind(), Some(col.kind), "column {}", col.key),
            }
        }
        assert_eq!(Product::columns()[0].kind, FieldKind::Text);
    }

    #[test]
    fn test_cells() {
        let p = product();
        assert_eq!(p.cell("productName"), CellValue::Text("Skyr".into()));
        assert_eq!(p.cell("kcal"), CellValue::Number(63.0));
        assert_eq!(p.cell("price1kg"), CellValue::Null);
        assert_eq!(p.label(), "Skyr");
        assert_eq!(Product { product_name: None, ..p }.label(), "#7");
    }
}
