// SPDX-FileCopyrightText: 2026 calgrid contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::datetime::{add_months, format_month_year};
use crate::event::Event;
use crate::grid::MonthGrid;
use crate::store::{EventStore, StoreError};

/// Month-view controller. Owns the visible grid and fences event fetches with
/// a generation counter so a superseded fetch can never populate a newer grid.
#[derive(Debug, Clone)]
pub struct Calendar {
    tz: Tz,
    selected: NaiveDate,
    grid: MonthGrid,
    generation: u64,
}

impl Calendar {
    /// Creates the view for the month of `today`, with an initialized,
    /// eventless grid.
    pub fn new(today: NaiveDate, tz: Tz) -> Self {
        Self {
            tz,
            selected: today,
            grid: MonthGrid::new(today),
            generation: 0,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The `March 2024` style header for the viewed month.
    pub fn month_title(&self) -> String {
        format_month_year(self.selected)
    }

    pub fn next_month(&mut self) -> u64 {
        self.select(add_months(self.selected, 1))
    }

    pub fn previous_month(&mut self) -> u64 {
        self.select(add_months(self.selected, -1))
    }

    /// Moves the view to the month of `date` and starts a new generation.
    /// The returned generation must accompany the fetch result handed to
    /// [`Calendar::apply_events`].
    pub fn select(&mut self, date: NaiveDate) -> u64 {
        self.selected = date;
        self.begin_rebuild()
    }

    /// Replaces the grid with a fresh, eventless one and bumps the generation.
    pub fn begin_rebuild(&mut self) -> u64 {
        self.generation += 1;
        self.grid = MonthGrid::new(self.selected);
        self.generation
    }

    /// Populates the current grid from a fetch result. Results for a stale
    /// generation are discarded; on fetch failure the grid keeps its
    /// initialized, eventless cells.
    pub fn apply_events(&mut self, generation: u64, result: Result<Vec<Event>, StoreError>) {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "discarding stale event fetch"
            );
            return;
        }

        match result {
            Ok(events) => self.grid.distribute(events, self.tz),
            Err(e) => tracing::warn!("event fetch failed, showing empty calendar: {e}"),
        }
    }

    /// Single-shot rebuild: fetch all events and populate the grid.
    pub async fn refresh<S: EventStore + ?Sized>(&mut self, store: &S) {
        let generation = self.begin_rebuild();
        let result = store.list_events().await;
        self.apply_events(generation, result);
    }
}
