// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The 35-cell month grid and the distribution of events across its days.

use std::collections::HashMap;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::datetime::{add_days, calendar_start_date, day_key, same_month};
use crate::event::{Event, LocalEvent};

/// The grid always shows 5 full weeks.
pub const GRID_CELLS: usize = 35;

/// At most this many occurrences are rendered inside a cell; the rest are
/// reported via [`CalendarCell::hidden_count`].
pub const MAX_VISIBLE_EVENTS: usize = 4;

/// One rendering of an event on a specific day it spans.
#[derive(Debug, Clone)]
pub struct Occurrence {
    pub event: LocalEvent,

    /// Whether the event fully spans this cell's day.
    pub full_day: bool,
}

/// One date slot of the grid.
#[derive(Debug, Clone)]
pub struct CalendarCell {
    date: NaiveDate,
    another_month: bool,
    occurrences: Vec<Occurrence>,
}

impl CalendarCell {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// True when the date belongs to a month other than the viewed one.
    /// Such cells are dimmed, never excluded.
    pub fn another_month(&self) -> bool {
        self.another_month
    }

    /// All occurrences on this day, full-day first, then by ascending start.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// The leading occurrences up to [`MAX_VISIBLE_EVENTS`].
    pub fn visible(&self) -> &[Occurrence] {
        self.visible_capped(MAX_VISIBLE_EVENTS)
    }

    pub fn visible_capped(&self, cap: usize) -> &[Occurrence] {
        &self.occurrences[..self.occurrences.len().min(cap)]
    }

    /// How many occurrences the default cap hides.
    pub fn hidden_count(&self) -> usize {
        self.occurrences.len().saturating_sub(MAX_VISIBLE_EVENTS)
    }

    pub fn has_more(&self) -> bool {
        self.occurrences.len() > MAX_VISIBLE_EVENTS
    }
}

/// A month view: 35 consecutive days starting at the Sunday on or before the
/// 1st of the viewed month, with events bucketed per day.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    selected: NaiveDate,
    cells: Vec<CalendarCell>,
    index: HashMap<String, usize>,
}

impl MonthGrid {
    /// Builds the initialized, eventless grid for the month of `selected`.
    pub fn new(selected: NaiveDate) -> Self {
        let start = calendar_start_date(selected);

        let mut cells = Vec::with_capacity(GRID_CELLS);
        let mut index = HashMap::with_capacity(GRID_CELLS);
        for offset in 0..GRID_CELLS {
            let date = add_days(start, offset as i64);
            index.insert(day_key(date), cells.len());
            cells.push(CalendarCell {
                date,
                another_month: !same_month(selected, date),
                occurrences: Vec::new(),
            });
        }

        Self {
            selected,
            cells,
            index,
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn cells(&self) -> &[CalendarCell] {
        &self.cells
    }

    /// Keyed lookup of the cell for `date`, `None` when outside the window.
    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.index.get(&day_key(date)).map(|&i| &self.cells[i])
    }

    /// Converts each event into the viewer's zone, attaches an occurrence to
    /// every cell its span covers, and sorts each cell's occurrences.
    pub fn distribute(&mut self, events: Vec<Event>, tz: Tz) {
        for event in events {
            self.distribute_event(event.into_zone(tz));
        }
        self.sort_cells();
    }

    fn distribute_event(&mut self, event: LocalEvent) {
        let first_day = event.start.date_naive();
        let mut placed = false;

        for offset in 0..=event.duration_days().max(0) {
            let date = add_days(first_day, offset);
            if let Some(&i) = self.index.get(&day_key(date)) {
                let full_day = event.is_full_day_on(date);
                self.cells[i].occurrences.push(Occurrence {
                    event: event.clone(),
                    full_day,
                });
                placed = true;
            }
        }

        // A span entirely outside the window is a capacity boundary, not an error.
        if !placed {
            tracing::debug!(id = event.id, "event falls outside the visible grid");
        }
    }

    fn sort_cells(&mut self) {
        for cell in &mut self.cells {
            // Stable sort keeps equal starts in arrival order.
            cell.occurrences.sort_by(|a, b| {
                b.full_day
                    .cmp(&a.full_day)
                    .then_with(|| a.event.start.cmp(&b.event.start))
            });
        }
    }
}
