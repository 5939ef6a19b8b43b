use chrono::{Datelike, Duration, NaiveDate};

/// Maps a source date onto the date in `target_year` that falls on the same
/// day of the week, at most a few days away from the same calendar position.
pub fn align_to_year(source: NaiveDate, target_year: i32) -> NaiveDate {
    let source_dow = i64::from(source.weekday().num_days_from_sunday());
    let candidate = same_month_day(source, target_year);
    let candidate_dow = i64::from(candidate.weekday().num_days_from_sunday());

    let mut diff = source_dow - candidate_dow;
    if diff > 3 {
        diff -= 7;
    } else if diff < -3 {
        diff += 7;
    }

    let mut aligned = candidate + Duration::days(diff);

    // The nearest match for the first or last days of a year can fall in the
    // neighbouring year; a full week keeps the weekday and restores the year.
    if aligned.year() < target_year {
        aligned += Duration::days(7);
    } else if aligned.year() > target_year {
        aligned -= Duration::days(7);
    }

    aligned
}

// Same month and day in `year`; an overflowing day (Feb 29 into a non-leap
// year) clamps to the last valid day of the month.
fn same_month_day(source: NaiveDate, year: i32) -> NaiveDate {
    (1..=source.day())
        .rev()
        .find_map(|day| NaiveDate::from_ymd_opt(year, source.month(), day))
        .expect("every month has a first day")
}

#[cfg(test)]
mod align_to_year_tests {
    use super::*;
    use chrono::Weekday;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    fn it_should_align_a_saturday_three_days_back() {
        // 2024-06-15 is a Saturday; the 2027 candidate lands on a Tuesday,
        // so the wraparound picks the Saturday three days earlier.
        let aligned = align_to_year(date(2024, 6, 15), 2027);
        assert_eq!(aligned, date(2027, 6, 12));
        assert_eq!(aligned.weekday(), Weekday::Sat);
    }

    #[rstest]
    #[case(date(2024, 1, 8), 2026)]
    #[case(date(2024, 3, 31), 2028)]
    #[case(date(2024, 7, 4), 2029)]
    #[case(date(2025, 11, 30), 2027)]
    #[case(date(2024, 12, 25), 2026)]
    fn it_should_preserve_the_weekday_and_the_target_year(
        #[case] source: NaiveDate,
        #[case] year: i32,
    ) {
        let aligned = align_to_year(source, year);
        assert_eq!(aligned.weekday(), source.weekday());
        assert_eq!(aligned.year(), year);
    }

    #[rstest]
    #[case(date(2024, 5, 10), 2026)]
    #[case(date(2024, 9, 17), 2027)]
    #[case(date(2025, 6, 2), 2028)]
    fn it_should_stay_within_three_days_of_the_candidate(
        #[case] source: NaiveDate,
        #[case] year: i32,
    ) {
        let candidate = date(year, source.month(), source.day());
        let offset = (align_to_year(source, year) - candidate).num_days();
        assert!((-3..=3).contains(&offset), "offset {offset} out of range");
    }

    #[rstest]
    fn it_should_clamp_a_leap_day_to_the_end_of_february() {
        // 2024-02-29 is a Thursday; the clamped 2026-02-28 candidate is a
        // Saturday, two days ahead of the nearest Thursday.
        let aligned = align_to_year(date(2024, 2, 29), 2026);
        assert_eq!(aligned, date(2026, 2, 26));
        assert_eq!(aligned.weekday(), Weekday::Thu);
    }

    #[rstest]
    fn it_should_not_leak_into_the_previous_year() {
        // 2024-01-01 is a Monday; the nearest Monday to 2026-01-01 is
        // 2025-12-29, which the year guard pushes a week forward.
        let aligned = align_to_year(date(2024, 1, 1), 2026);
        assert_eq!(aligned, date(2026, 1, 5));
        assert_eq!(aligned.weekday(), Weekday::Mon);
        assert_eq!(aligned.year(), 2026);
    }

    #[rstest]
    fn it_should_not_leak_into_the_next_year() {
        // 2025-12-31 is a Wednesday, 2027-12-31 a Friday; the nearest
        // Wednesday is 2027-12-29, safely inside the year.
        let aligned = align_to_year(date(2025, 12, 31), 2027);
        assert_eq!(aligned, date(2027, 12, 29));
        assert_eq!(aligned.weekday(), Weekday::Wed);
    }
}
