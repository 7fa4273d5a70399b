use crate::shared::table_schema::ColumnDef;

pub const USER_PRODUCT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("productName", "Product"),
    ColumnDef::number("kcal", "Kcal"),
    ColumnDef::number("fat", "Fat"),
    ColumnDef::number("carbs", "Carbs"),
    ColumnDef::number("protein", "Protein"),
    ColumnDef::number("price1kg", "€/kg"),
];
