// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::datetime::{
    add_hours, end_of_day_threshold, format_date_only, format_date_time, format_datetime_local,
    format_time, is_end_of_day, is_midnight, resolve_wall_clock, same_day, start_of_day,
    time_at_hour, to_reference_zone, to_viewer_zone,
};

/// Identifier assigned by the event store.
pub type EventId = i64;

/// Title truncation cap inside a grid cell.
pub const TITLE_CELL_CHARS: usize = 16;

/// Title truncation cap in the day-overflow modal.
pub const TITLE_MODAL_CHARS: usize = 40;

/// Default start hour for a new timed event.
pub const DEFAULT_START_HOUR: u32 = 9;

/// Default duration in hours for a new timed event.
pub const DEFAULT_DURATION_HOURS: i64 = 1;

/// An event as the store holds it, with instants in the reference zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
}

impl Event {
    /// Converts both instants into the viewer's zone. This is the only place
    /// an event crosses the UI boundary.
    pub fn into_zone(self, tz: Tz) -> LocalEvent {
        LocalEvent {
            id: self.id,
            title: self.title,
            description: self.description,
            start: to_viewer_zone(self.start, tz),
            end: to_viewer_zone(self.end, tz),
            location: self.location,
        }
    }
}

/// Payload for creating or updating an event, instants in the reference zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
}

/// An event converted into the viewer's zone, ready for display logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalEvent {
    pub id: EventId,
    pub title: String,
    pub description: Option<String>,
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub location: Option<String>,
}

impl LocalEvent {
    /// Converts back to reference-zone instants for submission.
    pub fn into_reference(self) -> Event {
        Event {
            id: self.id,
            title: self.title,
            description: self.description,
            start: to_reference_zone(self.start),
            end: to_reference_zone(self.end),
            location: self.location,
        }
    }

    /// Whether the event is a full-day event: it starts exactly at midnight
    /// and ends exactly at 23:59:00. A structural check, not a duration one,
    /// so 00:00 through 23:58 does not qualify.
    pub fn is_full_day(&self) -> bool {
        is_midnight(self.start.time()) && is_end_of_day(self.end.time())
    }

    /// Whether start and end fall on different calendar days.
    pub fn is_multi_day(&self) -> bool {
        !same_day(&self.start, &self.end)
    }

    /// Whether the event fully spans `date`: it starts at or before that
    /// day's 00:00 and ends at or after its 23:59:00 mark. A long timed event
    /// crossing midnight counts on its fully covered middle days even though
    /// the event as a whole is not full-day.
    pub fn is_full_day_on(&self, date: NaiveDate) -> bool {
        self.start.naive_local() <= start_of_day(date)
            && self.end.naive_local() >= end_of_day_threshold(date)
    }

    /// Calendar days spanned beyond the start day; a same-day event spans 0.
    pub fn duration_days(&self) -> i64 {
        (self.end.date_naive() - self.start.date_naive()).num_days()
    }

    /// Rewrites the event to full-day form: start at 00:00 of the start day,
    /// end at 23:59:00 of the end day.
    pub fn into_full_day(self) -> Self {
        let tz = self.start.timezone();
        Self {
            start: resolve_wall_clock(tz, start_of_day(self.start.date_naive())),
            end: resolve_wall_clock(tz, end_of_day_threshold(self.end.date_naive())),
            ..self
        }
    }

    pub fn start_time_label(&self) -> String {
        format_time(&self.start.naive_local())
    }

    pub fn start_date_label(&self) -> String {
        format_date_only(self.start.date_naive())
    }

    pub fn start_date_time_label(&self) -> String {
        format_date_time(&self.start.naive_local())
    }

    /// Start instant as a datetime-local form value.
    pub fn start_field_value(&self) -> String {
        format_datetime_local(&self.start.naive_local())
    }

    /// End instant as a datetime-local form value.
    pub fn end_field_value(&self) -> String {
        format_datetime_local(&self.end.naive_local())
    }
}

/// The 00:00 through 23:59 span of `date`, for initializing a full-day event.
pub fn full_day_times(date: NaiveDate, tz: Tz) -> (DateTime<Tz>, DateTime<Tz>) {
    (
        resolve_wall_clock(tz, start_of_day(date)),
        resolve_wall_clock(tz, end_of_day_threshold(date)),
    )
}

/// A timed span on `date` starting at `start_hour` o'clock, for initializing
/// a timed event. `None` when the hour is out of range.
pub fn timed_times(
    date: NaiveDate,
    start_hour: u32,
    duration_hours: i64,
    tz: Tz,
) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
    let start = resolve_wall_clock(tz, time_at_hour(date, start_hour, 0)?);
    let end = add_hours(start, duration_hours);
    Some((start, end))
}

/// Caps a title at `max_chars` characters, appending an ellipsis when cut.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    if title.chars().count() <= max_chars {
        title.to_string()
    } else {
        let mut truncated: String = title.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    }
}
