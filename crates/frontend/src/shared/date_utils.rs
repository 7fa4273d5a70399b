/// Date helpers for form inputs and table cells
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Value format of `<input type="date">`
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a timestamp as DD/MM/YYYY
/// Example: 2024-03-15 14:02:26 -> "15/03/2024"
pub fn format_date(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y").to_string()
}

/// Format a timestamp as DD/MM/YYYY HH:MM
pub fn format_datetime(value: &NaiveDateTime) -> String {
    value.format("%d/%m/%Y %H:%M").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse the value of a date input; blank or malformed input gives `None`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_DATE_FORMAT).ok()
}

pub fn format_input_date(date: NaiveDate) -> String {
    date.format(INPUT_DATE_FORMAT).to_string()
}

/// The chosen day combined with a time of day, seconds kept
pub fn at_time(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// The chosen day at the current local time
pub fn at_current_time(date: NaiveDate) -> NaiveDateTime {
    at_time(date, Local::now().time())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&ts("2024-03-15 14:02:26")), "15/03/2024");
        assert_eq!(format_datetime(&ts("2024-12-31 23:59:59")), "31/12/2024 23:59");
    }

    #[test]
    fn test_input_date_round_trip() {
        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(format_input_date(day), "2024-02-29");
        assert_eq!(parse_input_date(" 2024-02-29 "), Some(day));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("29.02.2024"), None);
    }

    #[test]
    fn test_at_time() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let time = NaiveTime::from_hms_opt(8, 30, 5).unwrap();
        assert_eq!(at_time(day, time), ts("2024-03-15 08:30:05"));
    }
}
