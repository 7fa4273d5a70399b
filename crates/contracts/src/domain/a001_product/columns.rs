use crate::shared::table_schema::ColumnDef;

pub const PRODUCT_COLUMNS: &[ColumnDef] = &[
    ColumnDef::text("productName", "Product"),
    ColumnDef::number("kcal", "Kcal"),
    ColumnDef::number("fat", "Fat"),
    ColumnDef::number("satFat", "Saturated fat"),
    ColumnDef::number("carbs", "Carbs"),
    ColumnDef::number("sugars", "Sugars"),
    ColumnDef::number("protein", "Protein"),
    ColumnDef::number("dairyProt", "Dairy"),
    ColumnDef::number("animalProt", "Animal"),
    ColumnDef::number("plantProt", "Plant"),
    ColumnDef::number("salt", "Salt"),
    ColumnDef::number("price1kg", "€/kg"),
    ColumnDef::number("price100g", "€/100g"),
];
