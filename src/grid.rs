//! Day layout for a single month page.

use serde::Serialize;

use crate::{CalendarDate, DAYS_PER_WEEK, ParseError, YearMonth};

/// One slot in a Monday-first month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    /// Blank slot before the 1st of the month.
    Placeholder,
    Day(CalendarDate),
}

impl Cell {
    pub const fn date(&self) -> Option<CalendarDate> {
        match self {
            Self::Placeholder => None,
            Self::Day(date) => Some(*date),
        }
    }
}

/// The cells of one month: leading placeholders, then every day in order.
///
/// Built purely from the month, so equal months always give equal grids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<Cell>,
}

impl MonthGrid {
    pub fn new(month: YearMonth) -> Self {
        let offset = usize::from(month.first_weekday_offset());
        let mut cells = Vec::with_capacity(offset + usize::from(month.days_in_month()));
        cells.resize(offset, Cell::Placeholder);
        cells.extend(month.days().map(Cell::Day));
        Self { month, cells }
    }

    /// Grid for a year and a 0-based month index (January = 0).
    ///
    /// # Errors
    /// Returns `ParseError` if the year or month index is out of range.
    pub fn from_index(year: u16, month_index: u8) -> Result<Self, ParseError> {
        YearMonth::from_index(year, month_index).map(Self::new)
    }

    pub const fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of leading placeholders.
    pub fn offset(&self) -> usize {
        self.cells.iter().take_while(|cell| matches!(cell, Cell::Placeholder)).count()
    }

    pub fn days(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.cells.iter().filter_map(Cell::date)
    }

    /// Rows of seven cells; the last row may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, year_month};

    #[test]
    fn test_leap_february_layout() {
        let grid = MonthGrid::from_index(2024, 1).expect("February 2024");
        assert_eq!(grid.month(), year_month(2024, 2));
        // 2024-02-01 is a Thursday
        assert_eq!(grid.offset(), 3);
        assert_eq!(grid.days().count(), 29);
        assert_eq!(grid.cells().len(), 32);
        assert_eq!(grid.cells()[3], Cell::Day(date(2024, 2, 1)));
        assert_eq!(grid.cells().last(), Some(&Cell::Day(date(2024, 2, 29))));
    }

    #[test]
    fn test_month_starting_on_monday_has_no_placeholders() {
        let grid = MonthGrid::new(year_month(2025, 9));
        assert_eq!(grid.offset(), 0);
        assert_eq!(grid.cells()[0], Cell::Day(date(2025, 9, 1)));
    }

    #[test]
    fn test_month_starting_on_sunday_has_six_placeholders() {
        let grid = MonthGrid::new(year_month(2025, 6));
        assert_eq!(grid.offset(), 6);
        assert_eq!(grid.days().count(), 30);
    }

    #[test]
    fn test_days_are_consecutive() {
        let grid = MonthGrid::new(year_month(2025, 12));
        let days: Vec<_> = grid.days().collect();
        for pair in days.windows(2) {
            assert_eq!(pair[0].add_days(1), Some(pair[1]));
        }
        assert_eq!(days.first(), Some(&date(2025, 12, 1)));
        assert_eq!(days.last(), Some(&date(2025, 12, 31)));
    }

    #[test]
    fn test_weekday_columns_line_up() {
        let grid = MonthGrid::new(year_month(2025, 3));
        for week in grid.weeks() {
            for (column, cell) in week.iter().enumerate() {
                if let Cell::Day(day) = cell {
                    assert_eq!(usize::from(day.weekday_offset()), column, "{day}");
                }
            }
        }
    }

    #[test]
    fn test_same_month_same_grid() {
        assert_eq!(MonthGrid::new(year_month(2025, 3)), MonthGrid::new(year_month(2025, 3)));
    }

    #[test]
    fn test_invalid_month_index() {
        assert!(matches!(MonthGrid::from_index(2024, 12), Err(ParseError::InvalidMonth(13))));
        assert!(matches!(MonthGrid::from_index(0, 0), Err(ParseError::InvalidYear(0))));
    }
}
