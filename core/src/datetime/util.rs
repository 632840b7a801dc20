// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Primitive calendar-day and wall-clock arithmetic with the fixed display formats.

use chrono::{
    DateTime, Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike,
};

/// `09:05`
pub const FORMAT_TIME: &str = "%H:%M";

/// `March 5, 2024`
pub const FORMAT_DATE: &str = "%B %-d, %Y";

/// `March 5, 2024 at 9:05 AM`
pub const FORMAT_DATETIME: &str = "%B %-d, %Y at %-I:%M %p";

/// `2024-03-05T09:05`, the value format of datetime-local form fields.
pub const FORMAT_DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";

/// `2024-03-05`, the key used for calendar-cell lookups.
pub const FORMAT_DAY_KEY: &str = "%Y-%m-%d";

/// `March 2024`
pub const FORMAT_MONTH_YEAR: &str = "%B %Y";

const FORMAT_DATETIME_LOCAL_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

pub const fn start_of_day_time() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 must exist in NaiveTime")
}

/// The 23:59:00 threshold that marks the displayed end of a day.
pub const fn end_of_day_time() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 59, 0).expect("23:59:00 must exist in NaiveTime")
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + TimeDelta::days(days)
}

/// Adds whole months, clamping to the last day of the target month.
/// Saturates at the supported calendar range instead of overflowing.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
            .unwrap_or(date)
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
            .unwrap_or(date)
    }
}

pub fn add_hours<Tz: TimeZone>(dt: DateTime<Tz>, hours: i64) -> DateTime<Tz> {
    dt + TimeDelta::hours(hours)
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// The start of the day (00:00:00) as a wall-clock value.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, start_of_day_time())
}

/// The displayed end of the day (23:59:00) as a wall-clock value.
pub fn end_of_day_threshold(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, end_of_day_time())
}

/// The wall-clock value at `hour:minute` on `date`, or `None` for an
/// out-of-range hour or minute.
pub fn time_at_hour(date: NaiveDate, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveTime::from_hms_opt(hour, minute, 0).map(|t| NaiveDateTime::new(date, t))
}

/// The Sunday on or before `date`; `date` itself when it is a Sunday.
pub fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - TimeDelta::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// The first cell of the month grid for the month containing `selected`.
pub fn calendar_start_date(selected: NaiveDate) -> NaiveDate {
    sunday_on_or_before(start_of_month(selected))
}

pub fn same_day<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.date_naive() == b.date_naive()
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn is_midnight(t: NaiveTime) -> bool {
    t.hour() == 0 && t.minute() == 0 && t.second() == 0
}

/// Whether `t` is exactly the 23:59:00 end-of-day mark.
pub fn is_end_of_day(t: NaiveTime) -> bool {
    t.hour() == 23 && t.minute() == 59 && t.second() == 0
}

pub fn format_time(dt: &NaiveDateTime) -> String {
    dt.format(FORMAT_TIME).to_string()
}

pub fn format_date_only(date: NaiveDate) -> String {
    date.format(FORMAT_DATE).to_string()
}

pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(FORMAT_DATETIME).to_string()
}

pub fn format_datetime_local(dt: &NaiveDateTime) -> String {
    dt.format(FORMAT_DATETIME_LOCAL).to_string()
}

pub fn format_month_year(date: NaiveDate) -> String {
    date.format(FORMAT_MONTH_YEAR).to_string()
}

pub fn day_key(date: NaiveDate) -> String {
    date.format(FORMAT_DAY_KEY).to_string()
}

/// Parses a datetime-local form value, with or without seconds.
/// `None` signals an invalid date; downstream code skips rather than fails.
pub fn parse_datetime_local(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, FORMAT_DATETIME_LOCAL_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(s, FORMAT_DATETIME_LOCAL))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, mi, 0).unwrap()
    }

    #[test]
    fn sunday_on_or_before_weekday() {
        // 2024-03-01 is a Friday
        assert_eq!(date(2024, 3, 1).weekday(), Weekday::Fri);
        assert_eq!(sunday_on_or_before(date(2024, 3, 1)), date(2024, 2, 25));
    }

    #[test]
    fn sunday_on_or_before_is_identity_on_sundays() {
        // 2024-09-01 is a Sunday
        assert_eq!(date(2024, 9, 1).weekday(), Weekday::Sun);
        assert_eq!(sunday_on_or_before(date(2024, 9, 1)), date(2024, 9, 1));
    }

    #[test]
    fn calendar_start_date_ignores_the_day_of_month() {
        assert_eq!(calendar_start_date(date(2024, 3, 15)), date(2024, 2, 25));
        assert_eq!(calendar_start_date(date(2024, 3, 1)), date(2024, 2, 25));
    }

    #[test]
    fn calendar_start_date_when_month_starts_on_sunday() {
        assert_eq!(calendar_start_date(date(2024, 9, 20)), date(2024, 9, 1));
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2024, 3, 31), -1), date(2024, 2, 29));
    }

    #[test]
    fn add_months_crosses_year_boundaries() {
        assert_eq!(add_months(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(add_months(date(2024, 1, 15), -1), date(2023, 12, 15));
    }

    #[test]
    fn add_days_is_signed() {
        assert_eq!(add_days(date(2024, 2, 28), 2), date(2024, 3, 1));
        assert_eq!(add_days(date(2024, 3, 1), -1), date(2024, 2, 29));
    }

    #[test]
    fn day_boundary_predicates() {
        assert!(is_midnight(NaiveTime::from_hms_opt(0, 0, 0).unwrap()));
        assert!(!is_midnight(NaiveTime::from_hms_opt(0, 0, 1).unwrap()));
        assert!(is_end_of_day(NaiveTime::from_hms_opt(23, 59, 0).unwrap()));
        assert!(!is_end_of_day(NaiveTime::from_hms_opt(23, 58, 0).unwrap()));
        assert!(!is_end_of_day(NaiveTime::from_hms_opt(23, 59, 59).unwrap()));
    }

    #[test]
    fn same_month_compares_year_and_month() {
        assert!(same_month(date(2024, 3, 1), date(2024, 3, 31)));
        assert!(!same_month(date(2024, 3, 1), date(2023, 3, 1)));
        assert!(!same_month(date(2024, 3, 1), date(2024, 4, 1)));
    }

    #[test]
    fn fixed_display_formats() {
        let dt = datetime(2024, 3, 5, 9, 5);
        assert_eq!(format_time(&dt), "09:05");
        assert_eq!(format_date_only(dt.date()), "March 5, 2024");
        assert_eq!(format_date_time(&dt), "March 5, 2024 at 9:05 AM");
        assert_eq!(format_datetime_local(&dt), "2024-03-05T09:05");
        assert_eq!(format_month_year(dt.date()), "March 2024");
        assert_eq!(day_key(dt.date()), "2024-03-05");
    }

    #[test]
    fn format_date_time_afternoon() {
        let dt = datetime(2024, 12, 25, 14, 30);
        assert_eq!(format_date_time(&dt), "December 25, 2024 at 2:30 PM");
    }

    #[test]
    fn parse_datetime_local_accepts_both_precisions() {
        assert_eq!(
            parse_datetime_local("2024-03-05T09:05"),
            Some(datetime(2024, 3, 5, 9, 5))
        );
        assert_eq!(
            parse_datetime_local("2024-03-05T09:05:30"),
            date(2024, 3, 5).and_hms_opt(9, 5, 30)
        );
    }

    #[test]
    fn parse_datetime_local_rejects_garbage() {
        assert_eq!(parse_datetime_local(""), None);
        assert_eq!(parse_datetime_local("not a date"), None);
        assert_eq!(parse_datetime_local("2024-13-05T09:05"), None);
        assert_eq!(parse_datetime_local("2024-03-05"), None);
    }

    #[test]
    fn day_boundaries() {
        let d = date(2024, 3, 10);
        assert_eq!(start_of_day(d), datetime(2024, 3, 10, 0, 0));
        assert_eq!(end_of_day_threshold(d), datetime(2024, 3, 10, 23, 59));
    }

    #[test]
    fn time_at_hour_validates_input() {
        let d = date(2024, 3, 10);
        assert_eq!(time_at_hour(d, 9, 0), Some(datetime(2024, 3, 10, 9, 0)));
        assert_eq!(time_at_hour(d, 24, 0), None);
        assert_eq!(time_at_hour(d, 9, 60), None);
    }
}
