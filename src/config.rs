//! User-facing labels for a booking calendar.
//!
//! Deserializes with defaults, so hosts only spell out what they change:
//!
//! ```
//! let config: stay_calendar::CalendarConfig =
//!     serde_json::from_str(r#"{"clear_label": "Reset"}"#).unwrap();
//! assert_eq!(config.clear_label, "Reset");
//! assert_eq!(config.checkin_prompt, "Choose check-in");
//! ```

use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_WEEK, SelectionState, YearMonth};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Heading while the next click picks a check-in date.
    pub checkin_prompt:  String,
    /// Heading while the next click picks a check-out date.
    pub checkout_prompt: String,
    pub clear_label:     String,
    /// Column headers, Monday first.
    pub weekday_labels:  [String; DAYS_PER_WEEK],
    /// Month heading; `{month}` and `{year}` are substituted.
    pub month_title:     String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            checkin_prompt:  "Choose check-in".to_owned(),
            checkout_prompt: "Choose check-out".to_owned(),
            clear_label:     "Clear dates".to_owned(),
            weekday_labels:  ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].map(str::to_owned),
            month_title:     "{month}/{year}".to_owned(),
        }
    }
}

impl CalendarConfig {
    /// Vietnamese labels.
    pub fn vietnamese() -> Self {
        Self {
            checkin_prompt:  "Chọn ngày nhận phòng".to_owned(),
            checkout_prompt: "Chọn ngày trả phòng".to_owned(),
            clear_label:     "Xóa ngày".to_owned(),
            weekday_labels:  ["T2", "T3", "T4", "T5", "T6", "T7", "CN"].map(str::to_owned),
            month_title:     "Tháng {month} năm {year}".to_owned(),
        }
    }

    /// Empty and full ranges ask for check-in; a partial one asks for check-out.
    pub fn prompt(&self, state: SelectionState) -> &str {
        match state {
            SelectionState::Empty | SelectionState::Full => &self.checkin_prompt,
            SelectionState::Partial => &self.checkout_prompt,
        }
    }

    pub fn month_title(&self, month: YearMonth) -> String {
        self.month_title
            .replace("{month}", &month.month().get().to_string())
            .replace("{year}", &month.year().get().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::year_month;

    #[test]
    fn test_prompt_follows_state() {
        let config = CalendarConfig::default();
        assert_eq!(config.prompt(SelectionState::Empty), "Choose check-in");
        assert_eq!(config.prompt(SelectionState::Partial), "Choose check-out");
        assert_eq!(config.prompt(SelectionState::Full), "Choose check-in");
    }

    #[test]
    fn test_month_title() {
        assert_eq!(CalendarConfig::default().month_title(year_month(2025, 3)), "3/2025");
        assert_eq!(
            CalendarConfig::vietnamese().month_title(year_month(2025, 12)),
            "Tháng 12 năm 2025"
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: CalendarConfig =
            serde_json::from_str(r#"{"checkout_prompt": "Pick departure"}"#).expect("partial config");
        assert_eq!(config.checkout_prompt, "Pick departure");
        assert_eq!(config.checkin_prompt, CalendarConfig::default().checkin_prompt);
        assert_eq!(config.weekday_labels[6], "Sun");
    }

    #[test]
    fn test_weekday_labels_head_grid_columns() {
        let config = CalendarConfig::default();
        let grid = crate::MonthGrid::new(year_month(2025, 6));
        for week in grid.weeks() {
            assert!(week.len() <= config.weekday_labels.len());
            for (column, cell) in week.iter().enumerate() {
                if let Some(date) = cell.date() {
                    assert_eq!(usize::from(date.weekday_offset()), column, "{date}");
                }
            }
        }
        // 2025-06-01 is a Sunday
        assert_eq!(config.weekday_labels[grid.offset()], "Sun");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = CalendarConfig::vietnamese();
        let json = serde_json::to_string(&config).expect("serialize config");
        let parsed: CalendarConfig = serde_json::from_str(&json).expect("deserialize config");
        assert_eq!(parsed, config);
    }
}
