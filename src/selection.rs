//! Click handling for check-in/check-out selection.
//!
//! The range moves through three states: empty, partial (check-in only) and
//! full. A click on a past day is ignored. An empty or full range takes the
//! click as a new check-in. A partial range takes a later day as check-out
//! and any other day as a replacement check-in. There is no terminal state;
//! clicking into a full range starts over.

use log::{debug, trace};
use serde::Serialize;

use crate::{CalendarConfig, CalendarDate, DateRange, SelectionState, StayRange};

/// What a click did to the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickOutcome {
    /// The day is in the past; the range is unchanged.
    Rejected,
    /// The day became the check-in; check-out is cleared.
    Anchored(CalendarDate),
    /// The day became the check-out of a complete stay.
    Completed(StayRange),
}

impl ClickOutcome {
    /// Returns `true` if the click changed the committed range.
    pub const fn is_committed(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

fn transition(range: DateRange, clicked: CalendarDate, today: CalendarDate) -> ClickOutcome {
    if clicked < today {
        return ClickOutcome::Rejected;
    }
    match range {
        DateRange::Empty | DateRange::Full(_) => ClickOutcome::Anchored(clicked),
        // new() only fails when clicked <= checkin, which re-anchors
        DateRange::Partial(checkin) => match StayRange::new(checkin, clicked) {
            Ok(stay) => ClickOutcome::Completed(stay),
            Err(_) => ClickOutcome::Anchored(clicked),
        },
    }
}

/// The range after clicking `clicked`, given the current `range` and `today`.
pub fn on_click(range: DateRange, clicked: CalendarDate, today: CalendarDate) -> DateRange {
    match transition(range, clicked, today) {
        ClickOutcome::Rejected => range,
        ClickOutcome::Anchored(checkin) => DateRange::Partial(checkin),
        ClickOutcome::Completed(stay) => DateRange::Full(stay),
    }
}

/// Highlight flags for one day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct CellStatus {
    pub past:     bool,
    pub selected: bool,
    pub in_range: bool,
}

impl CellStatus {
    /// CSS class names for the set flags, in a stable order.
    pub fn class_names(&self) -> Vec<&'static str> {
        [(self.past, "past-date"), (self.selected, "selected"), (self.in_range, "in-range")]
            .into_iter()
            .filter_map(|(set, name)| set.then_some(name))
            .collect()
    }
}

/// Owns the committed range of one calendar view and its fixed "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEngine {
    range: DateRange,
    today: CalendarDate,
}

impl SelectionEngine {
    pub const fn new(today: CalendarDate) -> Self {
        Self::with_range(DateRange::Empty, today)
    }

    /// Resumes from a range supplied by the surrounding booking flow.
    pub const fn with_range(range: DateRange, today: CalendarDate) -> Self {
        Self { range, today }
    }

    pub const fn range(&self) -> DateRange {
        self.range
    }

    pub const fn today(&self) -> CalendarDate {
        self.today
    }

    pub const fn state(&self) -> SelectionState {
        self.range.state()
    }

    pub fn click(&mut self, date: CalendarDate) -> ClickOutcome {
        let outcome = transition(self.range, date, self.today);
        match outcome {
            ClickOutcome::Rejected => {
                trace!("ignored click on past date {date} (today is {})", self.today);
            },
            ClickOutcome::Anchored(checkin) => {
                debug!("check-in set to {checkin}");
                self.range = DateRange::Partial(checkin);
            },
            ClickOutcome::Completed(stay) => {
                debug!("stay selected: {stay} ({} nights)", stay.nights());
                self.range = DateRange::Full(stay);
            },
        }
        outcome
    }

    pub fn clear(&mut self) {
        debug!("selection cleared (was {})", self.range.state());
        self.range = DateRange::Empty;
    }

    pub fn is_past(&self, date: CalendarDate) -> bool {
        date < self.today
    }

    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.range.checkin() == Some(date) || self.range.checkout() == Some(date)
    }

    /// Check-in itself is not filled; check-out is.
    pub fn is_in_range(&self, date: CalendarDate) -> bool {
        self.range.stay().is_some_and(|stay| stay.fills(date))
    }

    pub fn classify(&self, date: CalendarDate) -> CellStatus {
        CellStatus {
            past:     self.is_past(date),
            selected: self.is_selected(date),
            in_range: self.is_in_range(date),
        }
    }

    pub fn prompt<'a>(&self, config: &'a CalendarConfig) -> &'a str {
        config.prompt(self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, stay};

    fn today() -> CalendarDate {
        date(2025, 6, 1)
    }

    fn reachable_ranges() -> Vec<DateRange> {
        vec![
            DateRange::Empty,
            DateRange::Partial(date(2025, 6, 10)),
            DateRange::from(stay(date(2025, 6, 10), date(2025, 6, 13))),
        ]
    }

    #[test]
    fn test_forward_selection() {
        let d1 = date(2025, 6, 10);
        let d2 = date(2025, 6, 13);

        let range = on_click(DateRange::Empty, d1, today());
        assert_eq!(range, DateRange::Partial(d1));

        let range = on_click(range, d2, today());
        assert_eq!(range.state(), SelectionState::Full);
        assert_eq!((range.checkin(), range.checkout()), (Some(d1), Some(d2)));
    }

    #[test]
    fn test_backward_click_re_anchors() {
        struct TestCase {
            clicked:     CalendarDate,
            description: &'static str,
        }

        let checkin = date(2025, 6, 10);
        let cases = [
            TestCase {
                clicked:     date(2025, 6, 5),
                description: "before check-in",
            },
            TestCase {
                clicked:     checkin,
                description: "on check-in",
            },
            TestCase {
                clicked:     today(),
                description: "today, before check-in",
            },
        ];

        for case in &cases {
            let range = on_click(DateRange::Partial(checkin), case.clicked, today());
            assert_eq!(range, DateRange::Partial(case.clicked), "{}", case.description);
        }
    }

    #[test]
    fn test_click_on_full_range_restarts() {
        let full = DateRange::from(stay(date(2025, 6, 10), date(2025, 6, 13)));
        for clicked in [date(2025, 6, 2), date(2025, 6, 11), date(2025, 6, 13), date(2025, 9, 1)] {
            assert_eq!(on_click(full, clicked, today()), DateRange::Partial(clicked));
        }
    }

    #[test]
    fn test_past_dates_rejected_from_every_state() {
        for range in reachable_ranges() {
            for past in [date(2025, 5, 31), date(2024, 12, 25), date(1, 1, 1)] {
                assert_eq!(on_click(range, past, today()), range, "{past} from {}", range.state());
            }
        }
    }

    #[test]
    fn test_today_is_selectable() {
        assert_eq!(on_click(DateRange::Empty, today(), today()), DateRange::Partial(today()));
    }

    #[test]
    fn test_invariant_holds_over_click_sequences() {
        // Every click order over a small window, including past days.
        let days: Vec<_> = (0..6).filter_map(|offset| date(2025, 5, 30).add_days(offset)).collect();
        for first in &days {
            for second in &days {
                for third in &days {
                    let mut engine = SelectionEngine::new(today());
                    for clicked in [*first, *second, *third] {
                        engine.click(clicked);
                        if let (Some(checkin), Some(checkout)) = (engine.range().checkin(), engine.range().checkout()) {
                            assert!(checkout > checkin, "{checkin} / {checkout}");
                        }
                        if let Some(checkin) = engine.range().checkin() {
                            assert!(checkin >= today());
                        }
                    }
                    engine.clear();
                    assert_eq!(engine.range(), DateRange::Empty);
                }
            }
        }
    }

    #[test]
    fn test_clear_from_any_state() {
        for range in reachable_ranges() {
            let mut engine = SelectionEngine::with_range(range, today());
            engine.clear();
            assert_eq!(engine.state(), SelectionState::Empty);
            assert_eq!((engine.range().checkin(), engine.range().checkout()), (None, None));
        }
    }

    #[test]
    fn test_click_outcomes() {
        let mut engine = SelectionEngine::new(today());
        assert_eq!(engine.click(date(2025, 5, 1)), ClickOutcome::Rejected);
        assert!(!ClickOutcome::Rejected.is_committed());

        let anchored = engine.click(date(2025, 6, 10));
        assert_eq!(anchored, ClickOutcome::Anchored(date(2025, 6, 10)));
        assert!(anchored.is_committed());

        assert_eq!(
            engine.click(date(2025, 6, 13)),
            ClickOutcome::Completed(stay(date(2025, 6, 10), date(2025, 6, 13)))
        );
        assert_eq!(engine.today(), today());
    }

    #[test]
    fn test_in_range_boundary() {
        let engine = SelectionEngine::with_range(
            DateRange::from(stay(date(2025, 6, 10), date(2025, 6, 13))),
            today(),
        );

        assert!(!engine.is_in_range(date(2025, 6, 10)));
        assert!(engine.is_in_range(date(2025, 6, 11)));
        assert!(engine.is_in_range(date(2025, 6, 13)));
        assert!(!engine.is_in_range(date(2025, 6, 14)));

        assert!(engine.is_selected(date(2025, 6, 10)));
        assert!(engine.is_selected(date(2025, 6, 13)));
        assert!(!engine.is_selected(date(2025, 6, 11)));
    }

    #[test]
    fn test_partial_range_has_no_fill() {
        let engine = SelectionEngine::with_range(DateRange::Partial(date(2025, 6, 10)), today());
        assert!(engine.is_selected(date(2025, 6, 10)));
        assert!(!engine.is_in_range(date(2025, 6, 11)));
    }

    #[test]
    fn test_is_past() {
        let engine = SelectionEngine::new(today());
        assert!(engine.is_past(date(2025, 5, 31)));
        assert!(!engine.is_past(today()));
        assert!(!engine.is_past(date(2025, 6, 2)));
    }

    #[test]
    fn test_classify_and_class_names() {
        let engine = SelectionEngine::with_range(
            DateRange::from(stay(date(2025, 6, 10), date(2025, 6, 13))),
            today(),
        );

        let checkout = engine.classify(date(2025, 6, 13));
        assert_eq!(
            checkout,
            CellStatus {
                past:     false,
                selected: true,
                in_range: true,
            }
        );
        assert_eq!(checkout.class_names(), vec!["selected", "in-range"]);

        let past = engine.classify(date(2025, 5, 20));
        assert_eq!(past.class_names(), vec!["past-date"]);
        assert!(engine.classify(date(2025, 7, 1)).class_names().is_empty());
    }

    #[test]
    fn test_prompt_cycles_with_state() {
        let config = CalendarConfig::default();
        let mut engine = SelectionEngine::new(today());
        assert_eq!(engine.prompt(&config), config.checkin_prompt);

        engine.click(date(2025, 6, 10));
        assert_eq!(engine.prompt(&config), config.checkout_prompt);

        engine.click(date(2025, 6, 12));
        assert_eq!(engine.prompt(&config), config.checkin_prompt);
    }
}
