//! Month grid math for the mini calendar

use chrono::{Datelike, NaiveDate};

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Layout of one displayed month, weeks starting on Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1 in the first week row
    pub leading_blanks: u32,
    pub days: u32,
}

impl MonthGrid {
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

/// Grid for the month containing `cursor`
pub fn month_grid(cursor: NaiveDate) -> MonthGrid {
    let year = cursor.year();
    let month = cursor.month();
    let first = cursor.with_day(1).unwrap_or(cursor);
    MonthGrid {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        days: days_in_month(year, month),
    }
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next_month.and_then(|d| d.pred_opt()) {
        Some(last) => last.day(),
        None => 30,
    }
}

/// Move by whole months, clamping the day-of-month to the target
/// month's length (Jan 31 + 1 month = Feb 28/29).
pub fn shift_month(cursor: NaiveDate, offset: i32) -> NaiveDate {
    let months = cursor.year() * 12 + cursor.month0() as i32 + offset;
    let year = months.div_euclid(12);
    let month = months.rem_euclid(12) as u32 + 1;
    let day = cursor.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn test_month_grid_august_2026() {
        // August 1 2026 is a Saturday.
        let grid = month_grid(date(2026, 8, 15));
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.days, 31);
        assert_eq!(grid.name(), "August");
        assert_eq!(grid.date(31), Some(date(2026, 8, 31)));
        assert_eq!(grid.date(32), None);
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn test_shift_month_clamps_day() {
        assert_eq!(shift_month(date(2026, 1, 31), 1), date(2026, 2, 28));
        assert_eq!(shift_month(date(2026, 3, 31), -1), date(2026, 2, 28));
        assert_eq!(shift_month(date(2026, 5, 15), 2), date(2026, 7, 15));
    }

    #[test]
    fn test_shift_month_crosses_year_boundaries() {
        assert_eq!(shift_month(date(2026, 12, 10), 1), date(2027, 1, 10));
        assert_eq!(shift_month(date(2026, 1, 10), -1), date(2025, 12, 10));
        assert_eq!(shift_month(date(2026, 6, 10), -18), date(2024, 12, 10));
    }
}
