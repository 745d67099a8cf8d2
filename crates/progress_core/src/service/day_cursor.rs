//! Current-day navigation state for the journal view.
//!
//! # Responsibility
//! - Track which calendar day is open.
//! - Move by one day, jump to today, or jump to typed input.
//!
//! # Invariants
//! - Failed jumps leave the current day unchanged.
//! - Moves never leave years 0000..=9999, so every day has a storable key.

use crate::calendar::{display_date, parse_date_input, weekday_short};
use crate::model::date_key::{has_key_year, DateKey};
use chrono::{Days, Local, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCursor {
    current: NaiveDate,
}

impl DayCursor {
    /// Cursor on the current local day.
    pub fn today() -> Self {
        Self::at(Local::now().date_naive())
    }

    pub fn at(date: NaiveDate) -> Self {
        Self { current: date }
    }

    pub fn current(&self) -> NaiveDate {
        self.current
    }

    pub fn date_key(&self) -> DateKey {
        DateKey::from_date(self.current)
    }

    /// Header line for the open day, e.g. `On Tue, Jul 29, 2025`.
    pub fn title(&self) -> String {
        format!("On {}", display_date(&self.date_key().to_string()))
    }

    pub fn previous_day(&mut self) {
        if let Some(date) = self.day_before() {
            self.current = date;
        }
    }

    pub fn next_day(&mut self) {
        if let Some(date) = self.day_after() {
            self.current = date;
        }
    }

    pub fn reset_to_today(&mut self) {
        self.current = Local::now().date_naive();
    }

    /// Jumps to a typed date. Returns `false` and stays put on bad input.
    pub fn go_to(&mut self, input: &str) -> bool {
        match parse_date_input(input) {
            Some(date) => {
                self.current = date;
                true
            }
            None => false,
        }
    }

    /// Weekday hint for the previous-day control.
    pub fn previous_weekday_hint(&self) -> String {
        weekday_short(self.day_before().unwrap_or(self.current))
    }

    /// Weekday hint for the next-day control.
    pub fn next_weekday_hint(&self) -> String {
        weekday_short(self.day_after().unwrap_or(self.current))
    }

    fn day_before(&self) -> Option<NaiveDate> {
        self.current
            .checked_sub_days(Days::new(1))
            .filter(|date| has_key_year(*date))
    }

    fn day_after(&self) -> Option<NaiveDate> {
        self.current
            .checked_add_days(Days::new(1))
            .filter(|date| has_key_year(*date))
    }
}

#[cfg(test)]
mod tests {
    use super::DayCursor;
    use crate::calendar::weekday_short;
    use chrono::NaiveDate;

    fn cursor(y: i32, m: u32, d: u32) -> DayCursor {
        DayCursor::at(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
    }

    #[test]
    fn moves_cross_month_and_year_boundaries() {
        let mut c = cursor(2024, 12, 31);
        c.next_day();
        assert_eq!(c.date_key().to_string(), "2025-01-01");
        c.previous_day();
        c.previous_day();
        assert_eq!(c.date_key().to_string(), "2024-12-30");
    }

    #[test]
    fn moves_stay_within_four_digit_years() {
        let last = NaiveDate::from_ymd_opt(9999, 12, 31).expect("valid date");
        let mut c = DayCursor::at(last);
        c.next_day();
        assert_eq!(c.current(), last);
        assert_eq!(c.next_weekday_hint(), weekday_short(last));

        let mut c = cursor(0, 1, 1);
        c.previous_day();
        assert_eq!(c.date_key().to_string(), "0000-01-01");
    }

    #[test]
    fn title_and_hints_follow_current_day() {
        let c = cursor(2025, 7, 29);
        assert_eq!(c.title(), "On Tue, Jul 29, 2025");
        assert_eq!(c.previous_weekday_hint(), "Mon");
        assert_eq!(c.next_weekday_hint(), "Wed");
    }
}
