use crate::domain::a001_product::aggregate::Product;
use crate::domain::common::nutrition::is_set;
use crate::domain::common::NutritionFacts;
use serde::{Deserialize, Serialize};

/// Dominant protein source the user picks when adding a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProteinType {
    Dairy,
    Animal,
    Plant,
}

impl ProteinType {
    pub const ALL: [ProteinType; 3] = [Self::Dairy, Self::Animal, Self::Plant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dairy => "dairy",
            Self::Animal => "animal",
            Self::Plant => "plant",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Animal => "Animal",
            Self::Plant => "Plant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    /// First protein source with a non-zero share, checked dairy, animal, plant
    pub fn of(nutrition: &NutritionFacts) -> Option<Self> {
        [
            (Self::Dairy, nutrition.dairy_prot),
            (Self::Animal, nutrition.animal_prot),
            (Self::Plant, nutrition.plant_prot),
        ]
        .into_iter()
        .find(|(_, share)| is_set(*share))
        .map(|(protein, _)| protein)
    }
}

/// `POST /userProducts/addUserProduct`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserProductRequest {
    pub product_name: String,
    pub kcal: f64,
    pub fat: f64,
    pub sat_fat: f64,
    pub carbs: f64,
    pub sugars: f64,
    pub protein: f64,
    pub salt: f64,
    pub price1kg: f64,
    pub dairy_prot: bool,
    pub animal_prot: bool,
    pub plant_prot: bool,
    pub vegan: bool,
    pub vegetarian: bool,
    pub dairy_free: bool,
}

impl AddUserProductRequest {
    /// Copy a catalog product into the user's list. Missing values are sent as 0.
    pub fn from_catalog(product: &Product) -> Self {
        let n = &product.nutrition;
        Self {
            product_name: product.product_name.clone().unwrap_or_default(),
            kcal: n.kcal.unwrap_or(0.0),
            fat: n.fat.unwrap_or(0.0),
            sat_fat: n.sat_fat.unwrap_or(0.0),
            carbs: n.carbs.unwrap_or(0.0),
            sugars: n.sugars.unwrap_or(0.0),
            protein: n.protein.unwrap_or(0.0),
            salt: n.salt.unwrap_or(0.0),
            price1kg: n.price1kg.unwrap_or(0.0),
            dairy_prot: is_set(n.dairy_prot),
            animal_prot: is_set(n.animal_prot),
            plant_prot: is_set(n.plant_prot),
            ..Default::default()
        }
    }

    pub fn set_protein_type(&mut self, protein: ProteinType) {
        self.dairy_prot = protein == ProteinType::Dairy;
        self.animal_prot = protein == ProteinType::Animal;
        self.plant_prot = protein == ProteinType::Plant;
    }
}

/// `POST /userProducts/addUserProductUrlRimi`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserProductByRimiUrlRequest {
    pub url: String,
    pub product_name: String,
    /// Weight of one unit in grams, used for price normalization
    #[serde(rename = "mass_g", skip_serializing_if = "Option::is_none")]
    pub mass_g: Option<f64>,
    pub vegan: bool,
    pub vegetarian: bool,
    pub dairy_free: bool,
    pub dairy_protein: bool,
    pub animal_protein: bool,
    pub plant_protein: bool,
}

/// `POST /userProducts/addUserProductUrlNutritionValue`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserProductByNutritionValueUrlRequest {
    pub url: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price1kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mass_per_unit: Option<f64>,
    pub vegan: bool,
    pub vegetarian: bool,
    pub dairy_free: bool,
    pub dairy_protein: bool,
    pub animal_protein: bool,
    pub plant_protein: bool,
}

/// Protein source sent with an update: the chosen one is `true`, the others `null`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinUpdate {
    pub dairy_protein: Option<bool>,
    pub animal_protein: Option<bool>,
    pub plant_protein: Option<bool>,
}

impl From<ProteinType> for ProteinUpdate {
    fn from(protein: ProteinType) -> Self {
        let chosen = |t: ProteinType| (protein == t).then_some(true);
        Self {
            dairy_protein: chosen(ProteinType::Dairy),
            animal_protein: chosen(ProteinType::Animal),
            plant_protein: chosen(ProteinType::Plant),
        }
    }
}

/// `PUT /userProducts/updateUserProduct`
///
/// The product is found by `old_product_name`. `None` values leave the stored
/// value unchanged; without `protein` the protein source is not touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProductRequest {
    pub old_product_name: Option<String>,
    pub product_name: Option<String>,
    pub kcal: Option<f64>,
    pub fat: Option<f64>,
    pub sat_fat: Option<f64>,
    pub carbs: Option<f64>,
    pub sugars: Option<f64>,
    pub protein: Option<f64>,
    pub salt: Option<f64>,
    pub price1kg: Option<f64>,
    #[serde(flatten, default, skip_serializing_if = "Option::is_none")]
    pub protein_source: Option<ProteinUpdate>,
}

/// `DELETE /userProducts/deleteUserProduct`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserProductRequest {
    pub product_name: String,
}
