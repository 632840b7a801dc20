// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Month-grid calendar engine: date/time normalization, event semantics,
//! 35-cell grid construction and event distribution, plus the store trait and
//! notification plumbing around them. Instants live in the reference zone
//! (UTC) everywhere except across the UI boundary, where they are converted
//! into the viewer's zone.

mod calendar;
pub mod datetime;
mod event;
mod grid;
mod notify;
mod store;
mod validate;

pub use crate::calendar::Calendar;
pub use crate::event::{
    DEFAULT_DURATION_HOURS, DEFAULT_START_HOUR, Event, EventDraft, EventId, LocalEvent,
    TITLE_CELL_CHARS, TITLE_MODAL_CHARS, full_day_times, timed_times, truncate_title,
};
pub use crate::grid::{CalendarCell, GRID_CELLS, MAX_VISIBLE_EVENTS, MonthGrid, Occurrence};
pub use crate::notify::{
    ERROR_DURATION, INFO_DURATION, Notification, NotificationId, Notifications, SUCCESS_DURATION,
    Severity, WARNING_DURATION,
};
pub use crate::store::{EventStore, StoreError};
pub use crate::validate::{
    EventForm, Field, FieldError, TITLE_MAX_CHARS, ValidationReport, validate,
};
