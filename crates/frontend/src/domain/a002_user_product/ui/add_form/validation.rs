//! Add-product form input and its validation into request bodies.
//!
//! Inputs hold raw text as typed. Blank numeric fields mean "not given";
//! anything else has to parse as a number.

use contracts::domain::a002_user_product::request::{
    AddUserProductByNutritionValueUrlRequest, AddUserProductByRimiUrlRequest,
    AddUserProductRequest, ProteinType,
};

/// Checkboxes and protein type shared by all three tabs
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductFlags {
    pub protein: Option<ProteinType>,
    pub vegan: bool,
    pub vegetarian: bool,
    pub dairy_free: bool,
}

impl ProductFlags {
    fn protein_flags(&self) -> (bool, bool, bool) {
        (
            self.protein == Some(ProteinType::Dairy),
            self.protein == Some(ProteinType::Animal),
            self.protein == Some(ProteinType::Plant),
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualInput {
    pub product_name: String,
    pub kcal: String,
    pub fat: String,
    pub sat_fat: String,
    pub carbs: String,
    pub sugars: String,
    pub protein: String,
    pub salt: String,
    pub price1kg: String,
    pub flags: ProductFlags,
}

impl ManualInput {
    pub fn validate(&self) -> Result<AddUserProductRequest, String> {
        let product_name = self.product_name.trim();
        let mut missing = Vec::new();
        if product_name.is_empty() {
            missing.push("product name");
        }
        if self.flags.protein.is_none() {
            missing.push("protein type");
        }
        if !missing.is_empty() {
            return Err(format!("Please fill required fields: {}", missing.join(", ")));
        }

        let (dairy_prot, animal_prot, plant_prot) = self.flags.protein_flags();
        Ok(AddUserProductRequest {
            product_name: product_name.to_string(),
            kcal: number_or_zero("Kcal", &self.kcal)?,
            fat: number_or_zero("Fat", &self.fat)?,
            sat_fat: number_or_zero("Saturated fat", &self.sat_fat)?,
            carbs: number_or_zero("Carbs", &self.carbs)?,
            sugars: number_or_zero("Sugars", &self.sugars)?,
            protein: number_or_zero("Protein", &self.protein)?,
            salt: number_or_zero("Salt", &self.salt)?,
            price1kg: number_or_zero("Price per kg", &self.price1kg)?,
            dairy_prot,
            animal_prot,
            plant_prot,
            vegan: self.flags.vegan,
            vegetarian: self.flags.vegetarian,
            dairy_free: self.flags.dairy_free,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RimiUrlInput {
    pub url: String,
    pub product_name: String,
    pub mass_g: String,
    pub flags: ProductFlags,
}

impl RimiUrlInput {
    pub fn validate(&self) -> Result<AddUserProductByRimiUrlRequest, String> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err("Rimi product URL is required.".to_string());
        }
        if self.flags.protein.is_none() {
            return Err("Please select protein type.".to_string());
        }

        let (dairy_protein, animal_protein, plant_protein) = self.flags.protein_flags();
        Ok(AddUserProductByRimiUrlRequest {
            url: url.to_string(),
            product_name: self.product_name.trim().to_string(),
            mass_g: optional_number("Mass (g)", &self.mass_g)?,
            vegan: self.flags.vegan,
            vegetarian: self.flags.vegetarian,
            dairy_free: self.flags.dairy_free,
            dairy_protein,
            animal_protein,
            plant_protein,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NutritionValueUrlInput {
    pub url: String,
    pub product_name: String,
    pub price1kg: String,
    pub price_per_unit: String,
    pub mass_per_unit: String,
    pub flags: ProductFlags,
}

impl NutritionValueUrlInput {
    pub fn validate(&self) -> Result<AddUserProductByNutritionValueUrlRequest, String> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err("NutritionValue URL is required.".to_string());
        }
        if self.flags.protein.is_none() {
            return Err("Please select protein type.".to_string());
        }

        let (dairy_protein, animal_protein, plant_protein) = self.flags.protein_flags();
        Ok(AddUserProductByNutritionValueUrlRequest {
            url: url.to_string(),
            product_name: self.product_name.trim().to_string(),
            price1kg: optional_number("Price per kg", &self.price1kg)?,
            price_per_unit: optional_number("Price per unit", &self.price_per_unit)?,
            mass_per_unit: optional_number("Mass per unit", &self.mass_per_unit)?,
            vegan: self.flags.vegan,
            vegetarian: self.flags.vegetarian,
            dairy_free: self.flags.dairy_free,
            dairy_protein,
            animal_protein,
            plant_protein,
        })
    }
}

/// Blank is `None`; a decimal comma is accepted
pub(crate) fn optional_number(label: &str, raw: &str) -> Result<Option<f64>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(format!("{} must be a number.", label)),
    }
}

fn number_or_zero(label: &str, raw: &str) -> Result<f64, String> {
    Ok(optional_number(label, raw)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dairy() -> ProductFlags {
        ProductFlags {
            protein: Some(ProteinType::Dairy),
            ..Default::default()
        }
    }

    #[test]
    fn test_manual_blank_numbers_become_zero() {
        let input = ManualInput {
            product_name: "  Cottage cheese ".into(),
            kcal: "98".into(),
            protein: "11,1".into(),
            flags: ProductFlags {
                vegetarian: true,
                ..dairy()
            },
            ..Default::default()
        };
        let request = input.validate().unwrap();
        assert_eq!(request.product_name, "Cottage cheese");
        assert_eq!(request.kcal, 98.0);
        assert_eq!(request.protein, 11.1);
        assert_eq!(request.fat, 0.0);
        assert_eq!(request.price1kg, 0.0);
        assert!(request.dairy_prot && !request.animal_prot && !request.plant_prot);
        assert!(request.vegetarian && !request.vegan);
    }

    #[test]
    fn test_manual_required_fields() {
        let err = ManualInput::default().validate().unwrap_err();
        assert_eq!(err, "Please fill required fields: product name, protein type");

        let err = ManualInput {
            product_name: "Tofu".into(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, "Please fill required fields: protein type");
    }

    #[test]
    fn test_manual_non_numeric_names_field() {
        let input = ManualInput {
            product_name: "Tofu".into(),
            sat_fat: "lots".into(),
            flags: dairy(),
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err(), "Saturated fat must be a number.");
    }

    #[test]
    fn test_rimi_url() {
        assert_eq!(
            RimiUrlInput::default().validate().unwrap_err(),
            "Rimi product URL is required."
        );
        let mut input = RimiUrlInput {
            url: "https://www.rimi.lv/e-veikals/lv/produkti/p/123".into(),
            ..Default::default()
        };
        assert_eq!(input.validate().unwrap_err(), "Please select protein type.");

        input.flags.protein = Some(ProteinType::Plant);
        let request = input.validate().unwrap();
        assert_eq!(request.mass_g, None);
        assert!(request.plant_protein && !request.dairy_protein);

        input.mass_g = "400".into();
        assert_eq!(input.validate().unwrap().mass_g, Some(400.0));
        input.mass_g = "400g".into();
        assert_eq!(input.validate().unwrap_err(), "Mass (g) must be a number.");
    }

    #[test]
    fn test_nutrition_value_url() {
        let input = NutritionValueUrlInput {
            url: " https://www.nutritionvalue.org/Egg_nutritional_value.html ".into(),
            price_per_unit: "2.49".into(),
            mass_per_unit: "600".into(),
            flags: ProductFlags {
                protein: Some(ProteinType::Animal),
                ..Default::default()
            },
            ..Default::default()
        };
        let request = input.validate().unwrap();
        assert_eq!(request.url, "https://www.nutritionvalue.org/Egg_nutritional_value.html");
        assert_eq!(request.price1kg, None);
        assert_eq!(request.price_per_unit, Some(2.49));
        assert_eq!(request.mass_per_unit, Some(600.0));
        assert!(request.animal_protein);

        let err = NutritionValueUrlInput {
            price1kg: "NaN".into(),
            ..input
        }
        .validate()
        .unwrap_err();
        assert_eq!(err, "Price per kg must be a number.");
    }
}
