use crate::shared::date_utils::{at_time, parse_input_date};
use chrono::NaiveTime;
use contracts::domain::a003_consumed_product::request::SaveConsumedProductRequest;
use indexmap::IndexSet;

pub const MAX_SUGGESTIONS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogInput {
    pub product_name: String,
    /// Grams, as typed
    pub amount: String,
    /// `YYYY-MM-DD` from the date input
    pub date: String,
}

impl LogInput {
    /// Build the save request, stamping the chosen day with `time`
    pub fn validate(&self, time: NaiveTime) -> Result<SaveConsumedProductRequest, String> {
        let product_name = self.product_name.trim();
        if product_name.is_empty() {
            return Err("Please enter a product name.".to_string());
        }
        let amount = match self.amount.trim().replace(',', ".").parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => v,
            _ => return Err("Amount must be a number of grams greater than 0.".to_string()),
        };
        let Some(day) = parse_input_date(&self.date) else {
            return Err("Please pick a date.".to_string());
        };
        Ok(SaveConsumedProductRequest::new(product_name, amount, at_time(day, time)))
    }
}

/// Catalog names followed by user names; a repeated name keeps its first position
pub fn merge_names(catalog: Vec<String>, user: Vec<String>) -> Vec<String> {
    catalog
        .into_iter()
        .chain(user)
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}

/// Names containing `input` case-insensitively, at most [`MAX_SUGGESTIONS`].
/// Blank input suggests nothing.
pub fn suggestions<'a>(names: &'a [String], input: &str) -> Vec<&'a str> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(String::as_str)
        .take(MAX_SUGGESTIONS)
        .collect()
}
