use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date range presets offered by the reports screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Today,
    Yesterday,
    /// Monday of the current week up to today
    CurrentWeek,
    /// Today and the six days before it
    LastSevenDays,
    /// Inclusive range
    Custom { start: NaiveDate, end: NaiveDate },
}

impl Period {
    /// First and last day of the period relative to `today`.
    pub fn bounds(self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Period::Today => (today, today),
            Period::Yesterday => {
                let y = today.pred_opt().unwrap_or(today);
                (y, y)
            }
            Period::CurrentWeek => {
                let back = u64::from(today.weekday().num_days_from_monday());
                (today.checked_sub_days(Days::new(back)).unwrap_or(today), today)
            }
            Period::LastSevenDays => (
                today.checked_sub_days(Days::new(6)).unwrap_or(today),
                today,
            ),
            Period::Custom { start, end } => (start, end),
        }
    }

    /// Every day of the period in ascending order. Empty when a custom range
    /// ends before it starts.
    pub fn dates(self, today: NaiveDate) -> Vec<NaiveDate> {
        let (start, end) = self.bounds(today);
        start.iter_days().take_while(|d| *d <= end).collect()
    }
}
