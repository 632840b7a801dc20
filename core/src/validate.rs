// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Validation of a candidate event as a pure function over the whole record,
//! so cross-field rules need no shared mutable form state.

use chrono::DateTime;
use chrono_tz::Tz;

use crate::datetime::{end_of_day_threshold, resolve_wall_clock, start_of_day, to_reference_zone};
use crate::event::EventDraft;

/// Longest accepted title, in characters.
pub const TITLE_MAX_CHARS: usize = 255;

/// A candidate event as entered in the form, in the viewer's zone.
/// Missing instants mean the field was empty or unparseable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub start: Option<DateTime<Tz>>,
    pub end: Option<DateTime<Tz>>,
    pub location: String,
    pub full_day: bool,
}

/// The field a validation message is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Validation result keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Messages attached to `field`, in rule order.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &'static str> + '_ {
        self.errors
            .iter()
            .filter(move |e| e.field == field)
            .map(|e| e.message)
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }
}

/// Validates a candidate event. `end == start` is accepted; only an end
/// strictly before the start is rejected.
pub fn validate(form: &EventForm) -> ValidationReport {
    let mut report = ValidationReport::default();

    let title = form.title.trim();
    if title.is_empty() {
        report.push(Field::Title, "Event title is required");
    } else if title.chars().count() > TITLE_MAX_CHARS {
        report.push(Field::Title, "Event title must be at most 255 characters");
    }

    if form.start.is_none() {
        report.push(Field::Start, "Start date and time is required");
    }
    if form.end.is_none() {
        report.push(Field::End, "End date and time is required");
    }

    if let (Some(start), Some(end)) = (&form.start, &form.end)
        && end < start
    {
        report.push(
            Field::End,
            "End date and time must be after start date and time",
        );
    }

    report
}

impl EventForm {
    /// Builds the reference-zone submission payload, applying full-day
    /// normalization when the flag is set. `None` when either instant is
    /// missing; run [`validate`] first.
    pub fn into_draft(self) -> Option<EventDraft> {
        let (mut start, mut end) = (self.start?, self.end?);

        if self.full_day {
            let tz = start.timezone();
            start = resolve_wall_clock(tz, start_of_day(start.date_naive()));
            end = resolve_wall_clock(tz, end_of_day_threshold(end.date_naive()));
        }

        let description = self.description.trim();
        let location = self.location.trim();
        Some(EventDraft {
            title: self.title.trim().to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            start: to_reference_zone(start),
            end: to_reference_zone(end),
            location: (!location.is_empty()).then(|| location.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;

    fn local(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Tz> {
        New_York.with_ymd_and_hms(y, m, d, h, mi, 0).unwrap()
    }

    fn valid_form() -> EventForm {
        EventForm {
            title: "Planning".into(),
            description: String::new(),
            start: Some(local(2024, 3, 10, 9, 0)),
            end: Some(local(2024, 3, 10, 10, 0)),
            location: String::new(),
            full_day: false,
        }
    }

    #[test]
    fn accepts_a_valid_form() {
        assert!(validate(&valid_form()).is_ok());
    }

    #[test]
    fn title_is_required() {
        let form = EventForm {
            title: "   ".into(),
            ..valid_form()
        };
        let report = validate(&form);
        assert_eq!(
            report.for_field(Field::Title).collect::<Vec<_>>(),
            vec!["Event title is required"]
        );
    }

    #[test]
    fn title_length_is_capped() {
        let form = EventForm {
            title: "x".repeat(TITLE_MAX_CHARS + 1),
            ..valid_form()
        };
        let report = validate(&form);
        assert_eq!(
            report.for_field(Field::Title).collect::<Vec<_>>(),
            vec!["Event title must be at most 255 characters"]
        );

        let form = EventForm {
            title: "x".repeat(TITLE_MAX_CHARS),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn missing_instants_are_reported_per_field() {
        let form = EventForm {
            start: None,
            end: None,
            ..valid_form()
        };
        let report = validate(&form);
        assert!(!report.is_ok());
        assert_eq!(report.for_field(Field::Start).count(), 1);
        assert_eq!(report.for_field(Field::End).count(), 1);
    }

    #[test]
    fn end_before_start_is_rejected() {
        let form = EventForm {
            start: Some(local(2024, 3, 10, 10, 0)),
            end: Some(local(2024, 3, 10, 9, 0)),
            ..valid_form()
        };
        let report = validate(&form);
        assert_eq!(
            report.for_field(Field::End).collect::<Vec<_>>(),
            vec!["End date and time must be after start date and time"]
        );
    }

    #[test]
    fn end_equal_to_start_is_accepted() {
        let instant = local(2024, 3, 10, 9, 0);
        let form = EventForm {
            start: Some(instant),
            end: Some(instant),
            ..valid_form()
        };
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn into_draft_trims_and_drops_empty_optionals() {
        let form = EventForm {
            title: "  Planning  ".into(),
            description: "  agenda attached  ".into(),
            location: "   ".into(),
            ..valid_form()
        };

        let draft = form.into_draft().unwrap();
        assert_eq!(draft.title, "Planning");
        assert_eq!(draft.description.as_deref(), Some("agenda attached"));
        assert_eq!(draft.location, None);
    }

    #[test]
    fn into_draft_applies_full_day_normalization() {
        let form = EventForm {
            start: Some(local(2024, 3, 11, 10, 30)),
            end: Some(local(2024, 3, 12, 16, 45)),
            full_day: true,
            ..valid_form()
        };

        let draft = form.into_draft().unwrap();
        assert_eq!(draft.start, to_reference_zone(local(2024, 3, 11, 0, 0)));
        assert_eq!(draft.end, to_reference_zone(local(2024, 3, 12, 23, 59)));
    }

    #[test]
    fn into_draft_requires_both_instants() {
        let form = EventForm {
            end: None,
            ..valid_form()
        };
        assert!(form.into_draft().is_none());
    }
}
