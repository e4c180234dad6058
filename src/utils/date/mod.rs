// Date utility functions
// Pure calendar math for the month grid: month lengths, grid padding,
// day keys, and month paging.

use chrono::{Datelike, NaiveDate};

/// Number of days in the given month, via the first-of-next-month trick.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}

/// Day numbers `1..=N` for the month, in grid order.
pub fn day_numbers(year: i32, month: u32) -> Vec<u32> {
    (1..=days_in_month(year, month)).collect()
}

/// Weekday of the 1st of the month, Sunday-first (0 = Sunday .. 6 = Saturday).
/// The grid is left-padded with this many empty cells.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("valid first of month")
        .weekday()
        .num_days_from_sunday()
}

/// Canonical key for one calendar day: `"{year}-{month}-{day}"` with a
/// 1-based month and no zero padding (e.g. `2024-1-5`). Derived from local
/// calendar fields only; keys round-trip via [`parse_date_key`] within a
/// session.
pub fn date_key(date: NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// Inverse of [`date_key`]. Returns `None` for anything that is not a key
/// this module produced.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let mut parts = key.splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u32>().ok()?;
    let day = parts.next()?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Move `date` by `delta` whole months, rolling over year boundaries and
/// clamping the day-of-month to the target month's length. Returns a new
/// value; the input is never mutated.
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let total_months = (date.year() * 12) + (date.month() as i32 - 1) + delta;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    clamp_day(new_year, new_month, date.day())
}

fn clamp_day(year: i32, month: u32, desired_day: u32) -> NaiveDate {
    let day = desired_day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(2023, 1, 31; "january")]
    #[test_case(2023, 2, 28; "february non leap")]
    #[test_case(2024, 2, 29; "february leap")]
    #[test_case(2023, 3, 31; "march")]
    #[test_case(2023, 4, 30; "april")]
    #[test_case(2023, 5, 31; "may")]
    #[test_case(2023, 6, 30; "june")]
    #[test_case(2023, 7, 31; "july")]
    #[test_case(2023, 8, 31; "august")]
    #[test_case(2023, 9, 30; "september")]
    #[test_case(2023, 10, 31; "october")]
    #[test_case(2023, 11, 30; "november")]
    #[test_case(2023, 12, 31; "december")]
    fn days_in_month_matches_calendar(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(year, month), expected);
    }

    #[test]
    fn day_numbers_cover_whole_month() {
        let days = day_numbers(2024, 2);
        assert_eq!(days.first(), Some(&1));
        assert_eq!(days.last(), Some(&29));
        assert_eq!(days.len(), 29);
    }

    #[test]
    fn first_weekday_is_sunday_based() {
        // 2024-09-01 was a Sunday, 2024-10-01 a Tuesday.
        assert_eq!(first_weekday_of_month(2024, 9), 0);
        assert_eq!(first_weekday_of_month(2024, 10), 2);
    }

    #[test]
    fn date_key_is_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(date_key(date), "2024-1-5");

        let date = NaiveDate::from_ymd_opt(2024, 11, 25).unwrap();
        assert_eq!(date_key(date), "2024-11-25");
    }

    #[test]
    fn date_key_round_trips() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(parse_date_key(&date_key(date)), Some(date));
    }

    #[test]
    fn parse_date_key_rejects_garbage() {
        assert_eq!(parse_date_key(""), None);
        assert_eq!(parse_date_key("2024-13-1"), None);
        assert_eq!(parse_date_key("not-a-key"), None);
    }

    #[test]
    fn shift_month_rolls_over_year_boundaries() {
        let january = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            shift_month(january, -1),
            NaiveDate::from_ymd_opt(2023, 12, 15).unwrap()
        );

        let december = NaiveDate::from_ymd_opt(2023, 12, 15).unwrap();
        assert_eq!(
            shift_month(december, 1),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn shift_month_clamps_day_to_target_length() {
        let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(
            shift_month(jan31, 1),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );

        let jan31 = NaiveDate::from_ymd_opt(2023, 1, 31).unwrap();
        assert_eq!(
            shift_month(jan31, 1),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    mod properties {
        use super::*;
        use chrono::Datelike;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn distinct_days_have_distinct_keys(
                year in 1970i32..2100,
                month_a in 1u32..=12,
                day_a in 1u32..=28,
                month_b in 1u32..=12,
                day_b in 1u32..=28,
            ) {
                let a = NaiveDate::from_ymd_opt(year, month_a, day_a).unwrap();
                let b = NaiveDate::from_ymd_opt(year, month_b, day_b).unwrap();
                prop_assert_eq!(date_key(a) == date_key(b), a == b);
            }

            #[test]
            fn twelve_pages_forward_is_one_year(
                year in 1970i32..2099,
                month in 1u32..=12,
                day in 1u32..=28,
            ) {
                let start = NaiveDate::from_ymd_opt(year, month, day).unwrap();
                let mut date = start;
                for _ in 0..12 {
                    date = shift_month(date, 1);
                }
                prop_assert_eq!(date.year(), start.year() + 1);
                prop_assert_eq!(date.month(), start.month());
                prop_assert_eq!(date.day(), start.day());
            }

            #[test]
            fn paging_never_panics_and_moves_one_month(
                year in 1970i32..2099,
                month in 1u32..=12,
                day in 1u32..=31,
                delta in -24i32..=24,
            ) {
                prop_assume!(day <= days_in_month(year, month));
                let start = NaiveDate::from_ymd_opt(year, month, day).unwrap();
                let shifted = shift_month(start, delta);
                let months = (shifted.year() * 12 + shifted.month() as i32)
                    - (start.year() * 12 + start.month() as i32);
                prop_assert_eq!(months, delta);
            }
        }
    }
}
