use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Every date from `start` through `end`, inclusive. An inverted range is
/// empty, matching how an empty selection is reported downstream.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
