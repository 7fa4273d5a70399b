use crate::shared::datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Consumed-product log entry.
///
/// Nutrition values are absolute for the logged amount, not per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumedProduct {
    pub id: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    /// Grams
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub kcal: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbs: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
    #[serde(default)]
    pub sat_fat: Option<f64>,
    #[serde(default)]
    pub sugar: Option<f64>,
    #[serde(default)]
    pub salt: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(
        default,
        deserialize_with = "datetime::deserialize_optional",
        serialize_with = "datetime::serialize_optional"
    )]
    pub created_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_log_entry() {
        let json = r#"{
            "id": 12,
            "productName": "Oats",
            "amount": 60,
            "kcal": 233.4,
            "protein": 8.1,
            "createdAt": "2025-01-20T08:15:00"
        }"#;
        let entry: ConsumedProduct = serde_json::from_str(json).unwrap();
        assert_eq!(entry.amount, Some(60.0));
        assert_eq!(entry.fat, None);
        assert_eq!(
            entry.created_at.map(|d| d.to_string()).as_deref(),
            Some("2025-01-20 08:15:00")
        );
    }

    #[test]
    fn test_bad_timestamp_does_not_fail_row() {
        let json = r#"{"id": 1, "createdAt": "not a date"}"#;
        let entry: ConsumedProduct = serde_json::from_str(json).unwrap();
        assert_eq!(entry.created_at, None);
    }
}
