use crate::domain::common::NutritionFacts;
use serde::{Deserialize, Serialize};

/// Entry of the user's personal product list (`GET /userProducts/getUserProducts`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProduct {
    pub id: i64,
    #[serde(default)]
    pub user_uuid: Option<i64>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(flatten)]
    pub nutrition: NutritionFacts,
}
