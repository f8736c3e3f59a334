//! Month grid construction.
//!
//! A month is always shown as 6 weeks of 7 days starting on Sunday: the
//! tail of the previous month, every day of the reference month, then the
//! head of the next month until 42 cells are filled.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::event::Event;
use crate::month::YearMonth;

/// Number of cells in every grid.
pub const GRID_CELLS: usize = 42;

/// Days per grid row.
pub const GRID_COLUMNS: usize = 7;

/// Events shown individually in a cell; the rest are summarized as a count.
pub const MAX_VISIBLE_EVENTS: usize = 2;

/// Column headings, Sunday first.
pub const WEEKDAY_HEADERS: [&str; GRID_COLUMNS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One day slot of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<'a> {
    pub date: NaiveDate,
    /// False for the padding days borrowed from adjacent months.
    pub in_month: bool,
    pub is_today: bool,
    /// Every event on this date, in stored order.
    pub events: Vec<&'a Event>,
}

impl<'a> GridCell<'a> {
    /// Events drawn individually in the cell.
    pub fn visible_events(&self) -> &[&'a Event] {
        let shown = self.events.len().min(MAX_VISIBLE_EVENTS);
        &self.events[..shown]
    }

    pub fn hidden_count(&self) -> usize {
        self.events.len().saturating_sub(MAX_VISIBLE_EVENTS)
    }

    /// `+N more` when some events are not drawn.
    pub fn overflow_label(&self) -> Option<String> {
        match self.hidden_count() {
            0 => None,
            n => Some(format!("+{n} more")),
        }
    }
}

/// The 42 cells of a month view.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid<'a> {
    pub month: YearMonth,
    pub cells: Vec<GridCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Rows of 7 cells, Sunday to Saturday.
    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell<'a>]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&GridCell<'a>> {
        self.cells.iter().find(|c| c.date == date)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.cells.first().map(|c| c.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.cells.last().map(|c| c.date)
    }
}

/// Lay out `month` and place `events` on the cells whose date they fall on.
///
/// `today` is passed in rather than read from the clock so the highlight is
/// reproducible.
pub fn build_month_grid<'a>(month: YearMonth, events: &'a [Event], today: NaiveDate) -> MonthGrid<'a> {
    let first = month.first_day();
    let leading = i64::from(first.weekday().num_days_from_sunday());
    let grid_start = first - Duration::days(leading);

    let mut by_date: BTreeMap<NaiveDate, Vec<&'a Event>> = BTreeMap::new();
    for event in events {
        by_date.entry(event.date).or_default().push(event);
    }

    let cells = grid_start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| GridCell {
            date,
            in_month: month.contains(date),
            is_today: date == today,
            events: by_date.remove(&date).unwrap_or_default(),
        })
        .collect();

    MonthGrid { month, cells }
}
