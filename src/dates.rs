use chrono::{Local, NaiveDate};

pub const DISPLAY_FORMAT: &str = "%d.%m.%Y";

/// Comparable key for a display-date string. Unparseable dates all map to
/// `None`, which orders before every valid date, so the comparator stays
/// total no matter what the backend hands us.
pub type DateKey = Option<NaiveDate>;

pub fn parse_display_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str, DISPLAY_FORMAT).ok()
}

pub fn date_sort_key(date_str: &str) -> DateKey {
    parse_display_date(date_str)
}

pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Today's date in display format, for stamping newly created notes.
pub fn today_display() -> String {
    format_display_date(Local::now().date_naive())
}
