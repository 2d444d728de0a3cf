use log::{debug, trace};

use crate::{CalendarDate, VISIBLE_MONTHS, YearMonth};

/// Pages the visible month window, never before the month containing today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationGuard {
    base:  YearMonth,
    floor: YearMonth,
}

impl NavigationGuard {
    /// Starts on the month containing `today`, which is also the floor.
    pub const fn new(today: CalendarDate) -> Self {
        let floor = today.year_month();
        Self { base: floor, floor }
    }

    /// Starts on `base`, raised to the floor if it lies before it.
    pub fn starting_at(today: CalendarDate, base: YearMonth) -> Self {
        let floor = today.year_month();
        Self {
            base: base.max(floor),
            floor,
        }
    }

    /// Month shown in the left pane.
    pub const fn base(&self) -> YearMonth {
        self.base
    }

    /// Earliest month the left pane may show.
    pub const fn floor(&self) -> YearMonth {
        self.floor
    }

    pub fn can_go_prev(&self) -> bool {
        self.base > self.floor
    }

    /// Only false on the last representable month.
    pub fn can_go_next(&self) -> bool {
        self.base.next().is_some()
    }

    /// Moves back one month; returns whether the window moved.
    pub fn go_prev(&mut self) -> bool {
        match self.base.prev().filter(|_| self.can_go_prev()) {
            Some(prev) => {
                debug!("calendar window moved back to {prev}");
                self.base = prev;
                true
            },
            None => {
                trace!("calendar window already at floor {}", self.floor);
                false
            },
        }
    }

    /// Moves forward one month; returns whether the window moved.
    pub fn go_next(&mut self) -> bool {
        match self.base.next() {
            Some(next) => {
                debug!("calendar window moved forward to {next}");
                self.base = next;
                true
            },
            None => {
                trace!("calendar window at last representable month {}", self.base);
                false
            },
        }
    }

    /// The base month followed by the months shown beside it.
    pub fn visible_months(&self) -> Vec<YearMonth> {
        std::iter::successors(Some(self.base), YearMonth::next).take(VISIBLE_MONTHS).collect()
    }
}
