use crate::domain::common::NutritionFacts;
use serde::{Deserialize, Serialize};

/// Catalog product returned by `GET /products/getAllProducts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
}
