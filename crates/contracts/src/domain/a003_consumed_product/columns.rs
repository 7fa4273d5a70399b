use crate::shared::table_schema::ColumnDef;

pub const CONSUMED_PRODUCT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("productName", "Product"),
    ColumnDef::number("amount", "Amount"),
    ColumnDef::number("kcal", "Kcal"),
    ColumnDef::number("protein", "Protein"),
    ColumnDef::number("carbs", "Carbs"),
    ColumnDef::number("fat", "Fat"),
    ColumnDef::date("createdAt", "Date"),
];
