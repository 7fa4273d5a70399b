use crate::domain::a002_user_product::ui::add_form::validation::optional_number;
use contracts::domain::a002_user_product::aggregate::UserProduct;
use contracts::domain::a002_user_product::request::{ProteinType, UpdateUserProductRequest};

/// Edit form input, prefilled from the stored product
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditInput {
    /// Name the product is stored under
    pub old_product_name: Option<String>,
    pub product_name: String,
    pub kcal: String,
    pub fat: String,
    pub sat_fat: String,
    pub carbs: String,
    pub sugars: String,
    pub protein: String,
    pub salt: String,
    pub price1kg: String,
    pub protein_type: Option<ProteinType>,
}

fn prefill(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl EditInput {
    pub fn from_row(row: &UserProduct) -> Self {
        let n = &row.nutrition;
        Self {
            old_product_name: row.product_name.clone(),
            product_name: row.product_name.clone().unwrap_or_default(),
            kcal: prefill(n.kcal),
            fat: prefill(n.fat),
            sat_fat: prefill(n.sat_fat),
            carbs: prefill(n.carbs),
            sugars: prefill(n.sugars),
            protein: prefill(n.protein),
            salt: prefill(n.salt),
            price1kg: prefill(n.price1kg),
            protein_type: ProteinType::of(n),
        }
    }

    /// Blank fields are sent as `null` and leave the stored value alone.
    pub fn validate(&self) -> Result<UpdateUserProductRequest, String> {
        let product_name = self.product_name.trim();
        Ok(UpdateUserProductRequest {
            old_product_name: self.old_product_name.clone(),
            product_name: (!product_name.is_empty()).then(|| product_name.to_string()),
            kcal: optional_number("Kcal", &self.kcal)?,
            fat: optional_number("Fat", &self.fat)?,
            sat_fat: optional_number("Saturated fat", &self.sat_fat)?,
            carbs: optional_number("Carbs", &self.carbs)?,
            sugars: optional_number("Sugars", &self.sugars)?,
            protein: optional_number("Protein", &self.protein)?,
            salt: optional_number("Salt", &self.salt)?,
            price1kg: optional_number("Price per kg", &self.price1kg)?,
            protein_source: self.protein_type.map(Into::into),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::NutritionFacts;

    fn kefir() -> UserProduct {
        UserProduct {
            id: 4,
            user_uuid: None,
            product_name: Some("Kefir".into()),
            nutrition: NutritionFacts {
                kcal: Some(52.0),
                fat: Some(2.5),
                dairy_prot: Some(2.9),
                price1kg: Some(1.89),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_prefill_from_row() {
        let input = EditInput::from_row(&kefir());
        assert_eq!(input.old_product_name.as_deref(), Some("Kefir"));
        assert_eq!(input.product_name, "Kefir");
        assert_eq!(input.kcal, "52");
        assert_eq!(input.fat, "2.5");
        assert_eq!(input.salt, "");
        assert_eq!(input.protein_type, Some(ProteinType::Dairy));
    }

    #[test]
    fn test_unchanged_form_resends_stored_values() {
        let request = EditInput::from_row(&kefir()).validate().unwrap();
        assert_eq!(request.old_product_name.as_deref(), Some("Kefir"));
        assert_eq!(request.product_name.as_deref(), Some("Kefir"));
        assert_eq!(request.kcal, Some(52.0));
        assert_eq!(request.salt, None);
        assert_eq!(request.protein_source, Some(ProteinType::Dairy.into()));
    }

    #[test]
    fn test_rename_and_clear() {
        let mut input = EditInput::from_row(&kefir());
        input.product_name = "  Kefir 1% ".into();
        input.fat = "1,0".into();
        input.kcal = String::new();
        let request = input.validate().unwrap();
        assert_eq!(request.product_name.as_deref(), Some("Kefir 1%"));
        assert_eq!(request.fat, Some(1.0));
        assert_eq!(request.kcal, None);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let mut input = EditInput::from_row(&kefir());
        input.salt = "a pinch".into();
        assert_eq!(input.validate(), Err("Salt must be a number.".to_string()));
    }
}
