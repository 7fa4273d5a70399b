use serde::{Deserialize, Serialize};

/// Nutrition values per 100 g together with price.
///
/// Every field is optional: catalog entries scraped from shops often lack
/// some of them. The protein-source fields hold the share of protein coming
/// from dairy, animal or plant sources; a non-zero value marks the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionFacts {
    #[serde(default)]
    pub kcal: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub sat_fat: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub sugars: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub dairy_prot: Option<f64>,
    #[serde(default)]
    pub animal_prot: Option<f64>,
    #[serde(default)]
    pub plant_prot: Option<f64>,
    #[serde(default)]
    pub salt: Option<f64>,
    #[serde(default)]
    pub price1kg: Option<f64>,
    #[serde(default)]
    pub price100g: Option<f64>,
}

impl NutritionFacts {
    /// Value of a numeric field by its wire name
    pub fn get(&self, key: &str) -> Option<f64> {
        match key {
            "kcal" => self.kcal,
            "fat" => self.fat,
            "satFat" => self.sat_fat,
            "carbs" => self.carbs,
            "sugars" => self.sugars,
            "protein" => self.protein,
            "dairyProt" => self.dairy_prot,
            "animalProt" => self.animal_prot,
            "plantProt" => self.plant_prot,
            "salt" => self.salt,
            "price1kg" => self.price1kg,
            "price100g" => self.price100g,
            _ => None,
        }
    }
}

/// Present and non-zero
pub fn is_set(value: Option<f64>) -> bool {
    value.is_some_and(|v| v != 0.0)
}
