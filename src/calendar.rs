//! Two-pane booking calendar: wires navigation, selection and the shared
//! range holder together and produces a render model.

use log::debug;
use serde::Serialize;

use crate::{
    CalendarConfig, CalendarDate, Cell, CellStatus, ClickOutcome, DateRange, MonthGrid, NavigationGuard,
    RangeError, RangeHolder, RangeUpdate, SelectionEngine, StayRange, YearMonth,
};

/// One calendar view instance.
///
/// `today` is fixed when the view is mounted; remount to pick up a new day.
#[derive(Debug)]
pub struct BookingCalendar<H> {
    engine:     SelectionEngine,
    navigation: NavigationGuard,
    holder:     H,
    config:     CalendarConfig,
}

/// A day cell ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewCell {
    Placeholder,
    Day { date: CalendarDate, status: CellStatus },
}

impl ViewCell {
    /// Past days do not take clicks.
    pub const fn is_clickable(&self) -> bool {
        matches!(self, Self::Day { status, .. } if !status.past)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthPane {
    pub month:        YearMonth,
    pub title:        String,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub cells:        Vec<ViewCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub title:          String,
    pub clear_label:    String,
    pub weekday_labels: Vec<String>,
    pub panes:          Vec<MonthPane>,
}

impl<H: RangeHolder> BookingCalendar<H> {
    /// Mounts a view over `holder`, resuming whatever range it already holds.
    ///
    /// # Errors
    /// Returns `RangeError` if the holder's strings are not a valid range.
    pub fn mount(holder: H, today: CalendarDate, config: CalendarConfig) -> Result<Self, RangeError> {
        let range = holder.range()?;
        debug!("booking calendar mounted on {today} with {} selection", range.state());
        Ok(Self {
            engine: SelectionEngine::with_range(range, today),
            navigation: NavigationGuard::new(today),
            holder,
            config,
        })
    }

    /// Handles a click on a day cell and publishes any committed change.
    pub fn click(&mut self, date: CalendarDate) -> ClickOutcome {
        let outcome = self.engine.click(date);
        if outcome.is_committed() {
            self.publish();
        }
        outcome
    }

    /// The "clear dates" action.
    pub fn clear(&mut self) {
        self.engine.clear();
        self.publish();
    }

    pub fn go_prev(&mut self) -> bool {
        self.navigation.go_prev()
    }

    pub fn go_next(&mut self) -> bool {
        self.navigation.go_next()
    }

    pub const fn range(&self) -> DateRange {
        self.engine.range()
    }

    /// The complete stay, for nights and price summaries.
    pub const fn stay(&self) -> Option<StayRange> {
        self.engine.range().stay()
    }

    pub fn title(&self) -> &str {
        self.engine.prompt(&self.config)
    }

    pub const fn engine(&self) -> &SelectionEngine {
        &self.engine
    }

    pub const fn navigation(&self) -> &NavigationGuard {
        &self.navigation
    }

    pub const fn holder(&self) -> &H {
        &self.holder
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Unmounts the view, handing back the holder.
    pub fn into_holder(self) -> H {
        self.holder
    }

    /// Render model: the prompt and one pane per visible month. The first
    /// pane carries the back control and the last one the forward control.
    pub fn view(&self) -> CalendarView {
        let months = self.navigation.visible_months();
        let last = months.len().saturating_sub(1);
        let panes = months
            .into_iter()
            .enumerate()
            .map(|(index, month)| MonthPane {
                month,
                title: self.config.month_title(month),
                prev_enabled: index == 0 && self.navigation.can_go_prev(),
                next_enabled: index == last && self.navigation.can_go_next(),
                cells: self.view_cells(&MonthGrid::new(month)),
            })
            .collect();

        CalendarView {
            title: self.title().to_owned(),
            clear_label: self.config.clear_label.clone(),
            weekday_labels: self.config.weekday_labels.to_vec(),
            panes,
        }
    }

    fn view_cells(&self, grid: &MonthGrid) -> Vec<ViewCell> {
        grid.cells()
            .iter()
            .map(|cell| match *cell {
                Cell::Placeholder => ViewCell::Placeholder,
                Cell::Day(date) => ViewCell::Day {
                    date,
                    status: self.engine.classify(date),
                },
            })
            .collect()
    }

    fn publish(&mut self) {
        let update = RangeUpdate::from_range(&self.engine.range());
        debug!("publishing selection {update:?}");
        self.holder.set_range(update);
    }
}
