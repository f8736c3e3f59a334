//! Calendar month arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::error::DayleeError;
use crate::grid::GRID_CELLS;

/// A calendar month: the reference month of the grid view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// `None` for invalid months and for months too close to chrono's date
    /// range to lay out a full grid around.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).and_then(Self::from_first)
    }

    fn from_first(first: NaiveDate) -> Option<Self> {
        // The grid starts up to 6 days before the 1st and runs 42 days
        let before = first.checked_sub_days(Days::new(6));
        let after = first.checked_add_days(Days::new(GRID_CELLS as u64 - 1));
        (before.is_some() && after.is_some()).then_some(YearMonth { first })
    }

    /// The month `date` falls in, or its inner neighbour for the two
    /// outermost months chrono can represent.
    pub fn containing(date: NaiveDate) -> Self {
        let first = date - chrono::Duration::days(i64::from(date.day0()));
        Self::from_first(first).unwrap_or_else(|| {
            let inward = if date.year() < 0 {
                first.checked_add_months(Months::new(1))
            } else {
                first.checked_sub_months(Months::new(1))
            };
            YearMonth {
                first: inward.unwrap_or(first),
            }
        })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(self.first)
    }

    pub fn day_count(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn next(&self) -> Self {
        self.offset(1)
    }

    pub fn prev(&self) -> Self {
        self.offset(-1)
    }

    /// Move by `months` (negative goes back). Stays put when the target
    /// month could not be laid out as a grid.
    pub fn offset(&self, months: i32) -> Self {
        let shift = Months::new(months.unsigned_abs());
        let first = if months >= 0 {
            self.first.checked_add_months(shift)
        } else {
            self.first.checked_sub_months(shift)
        };
        first.and_then(Self::from_first).unwrap_or(*self)
    }

    /// Heading shown above the grid, e.g. "March 2026".
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first.format("%Y-%m"))
    }
}

impl FromStr for YearMonth {
    type Err = DayleeError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DayleeError::Config(format!("Invalid month '{s}'. Expected YYYY-MM"));

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_counts_follow_the_calendar() {
        assert_eq!(YearMonth::new(2026, 1).unwrap().day_count(), 31);
        assert_eq!(YearMonth::new(2026, 2).unwrap().day_count(), 28);
        assert_eq!(YearMonth::new(2028, 2).unwrap().day_count(), 29);
        assert_eq!(YearMonth::new(2026, 4).unwrap().day_count(), 30);
        assert_eq!(YearMonth::new(2026, 12).unwrap().day_count(), 31);
    }

    #[test]
    fn navigation_crosses_year_boundaries() {
        let december = YearMonth::new(2026, 12).unwrap();
        assert_eq!(december.next(), YearMonth::new(2027, 1).unwrap());
        assert_eq!(december.next().prev(), december);
        assert_eq!(
            YearMonth::new(2026, 1).unwrap().prev(),
            YearMonth::new(2025, 12).unwrap()
        );
        assert_eq!(december.offset(-13), YearMonth::new(2025, 11).unwrap());
    }

    #[test]
    fn containing_finds_the_month() {
        let month = YearMonth::containing(date(2026, 3, 17));
        assert_eq!(month.first_day(), date(2026, 3, 1));
        assert!(month.contains(date(2026, 3, 31)));
        assert!(!month.contains(date(2026, 4, 1)));
    }

    #[test]
    fn parses_and_displays_year_month() {
        let month: YearMonth = "2026-03".parse().unwrap();
        assert_eq!(month.to_string(), "2026-03");
        assert_eq!(month.title(), "March 2026");
        assert!("2026-13".parse::<YearMonth>().is_err());
        assert!("march".parse::<YearMonth>().is_err());
    }

    #[test]
    fn months_at_the_edge_of_the_date_range_are_rejected() {
        let max = NaiveDate::MAX;
        let min = NaiveDate::MIN;
        assert!(YearMonth::new(max.year(), max.month()).is_none());
        assert!(YearMonth::new(min.year(), min.month()).is_none());
        assert!(format!("{}-{}", max.year(), max.month()).parse::<YearMonth>().is_err());

        let inner = YearMonth::containing(max);
        assert!(inner.first_day() < max);
        assert_eq!(inner.next(), inner);
        assert_eq!(inner.last_day().succ_opt().map(|d| d.day()), Some(1));
    }

    #[test]
    fn every_representable_month_has_a_full_grid() {
        let month = YearMonth::containing(NaiveDate::MAX);
        let grid = crate::grid::build_month_grid(month, &[], NaiveDate::MAX);
        assert_eq!(grid.cells.len(), GRID_CELLS);
        assert_eq!(
            grid.cells.iter().filter(|c| c.in_month).count() as u32,
            month.day_count()
        );
    }
}
