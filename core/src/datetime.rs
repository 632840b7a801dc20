// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

mod util;
mod zone;

pub use util::{
    FORMAT_DATE, FORMAT_DATETIME, FORMAT_DATETIME_LOCAL, FORMAT_DAY_KEY, FORMAT_MONTH_YEAR,
    FORMAT_TIME, add_days, add_hours, add_months, calendar_start_date, day_key,
    end_of_day_threshold, format_date_only, format_date_time, format_datetime_local,
    format_month_year, format_time, is_end_of_day, is_midnight, parse_datetime_local, same_day,
    same_month, start_of_day, start_of_month, sunday_on_or_before, time_at_hour,
};
pub use zone::{resolve_wall_clock, to_reference_zone, to_viewer_zone, viewer_zone};
