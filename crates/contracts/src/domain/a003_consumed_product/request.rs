use crate::shared::datetime::WIRE_FORMAT;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// `POST /consumedProducts/saveConsumedProduct`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveConsumedProductRequest {
    pub product_name: String,
    /// Grams
    pub amount: f64,
    /// `YYYY-MM-DD HH:MM:SS`
    pub date: String,
}

impl SaveConsumedProductRequest {
    pub fn new(product_name: impl Into<String>, amount: f64, at: NaiveDateTime) -> Self {
        Self {
            product_name: product_name.into(),
            amount,
            date: at.format(WIRE_FORMAT).to_string(),
        }
    }
}

/// `DELETE /consumedProducts/deleteProduct`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConsumedProductRequest {
    pub product_id: i64,
}

/// `POST /consumedProducts/byDate`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumedByDateRequest {
    pub start_date: String,
    pub end_date: String,
}

impl ConsumedByDateRequest {
    /// Whole days, both ends inclusive
    pub fn for_days(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: format!("{} 00:00:00", start.format("%Y-%m-%d")),
            end_date: format!("{} 23:59:59", end.format("%Y-%m-%d")),
        }
    }
}

/// Period the consumed-products list is loaded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsumedRange {
    #[default]
    All,
    Today,
    Last7Days,
    Last30Days,
    Between { start: NaiveDate, end: NaiveDate },
}

impl ConsumedRange {
    /// Presets shown as buttons, in display order
    pub const PRESETS: [ConsumedRange; 4] =
        [Self::All, Self::Today, Self::Last7Days, Self::Last30Days];

    /// Custom range; `None` when `start` is after `end`
    pub fn between(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self::Between { start, end })
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::All => "/consumedProducts/list",
            Self::Today => "/consumedProducts/today",
            Self::Last7Days => "/consumedProducts/last7days",
            Self::Last30Days => "/consumedProducts/last30days",
            Self::Between { .. } => "/consumedProducts/byDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Today => "Today",
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Between { .. } => "By date",
        }
    }

    /// Request body for the date-range endpoint; presets have none
    pub fn by_date_request(&self) -> Option<ConsumedByDateRequest> {
        match self {
            Self::Between { start, end } => Some(ConsumedByDateRequest::for_days(*start, *end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_by_date_body() {
        let range = ConsumedRange::between(day(2025, 1, 1), day(2025, 1, 31)).unwrap();
        assert_eq!(range.path(), "/consumedProducts/byDate");
        let body = serde_json::to_value(range.by_date_request().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({"startDate": "2025-01-01 00:00:00", "endDate": "2025-01-31 23:59:59"})
        );
    }

    #[test]
    fn test_inverted_range_rejected() {
        assert!(ConsumedRange::between(day(2025, 2, 1), day(2025, 1, 1)).is_none());
        assert!(ConsumedRange::between(day(2025, 2, 1), day(2025, 2, 1)).is_some());
    }

    #[test]
    fn test_presets_have_no_body() {
        for preset in ConsumedRange::PRESETS {
            assert!(preset.by_date_request().is_none());
        }
        assert_eq!(ConsumedRange::Last7Days.path(), "/consumedProducts/last7days");
    }

    #[test]
    fn test_save_request_wire_shape() {
        let at = day(2025, 3, 4).and_hms_opt(12, 30, 5).unwrap();
        let body = serde_json::to_value(SaveConsumedProductRequest::new("Rice", 150.0, at)).unwrap();
        assert_eq!(
            body,
            json!({"productName": "Rice", "amount": 150.0, "date": "2025-03-04 12:30:05"})
        );
        let del = serde_json::to_value(DeleteConsumedProductRequest { product_id: 9 }).unwrap();
        assert_eq!(del, json!({"productId": 9}));
    }
}
