//! Month-grid arithmetic for the calendar page.
//!
//! The grid is a fixed 6 rows by 7 columns (Sunday first). Day 1 is offset
//! to its true weekday column and cells outside the month are blank.
//! Months are 1-based; out-of-range input yields `None`.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One cell of the grid. Blank cells carry neither a day nor a date.
#[derive(Debug, Clone, Serialize)]
pub struct MonthCell {
    pub day: Option<u32>,
    pub date: Option<NaiveDate>,
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(first_of_next.pred_opt()?.day())
}

/// Weekday column of day 1, 0-indexed from Sunday.
pub fn first_weekday(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(first.weekday().num_days_from_sunday())
}

/// Lay out the 6x7 grid for a month.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<Vec<MonthCell>>> {
    let days = days_in_month(year, month)?;
    let offset = first_weekday(year, month)? as i64;

    let mut day: i64 = 1 - offset;
    let mut weeks = Vec::with_capacity(6);
    for _ in 0..6 {
        let mut week = Vec::with_capacity(7);
        for _ in 0..7 {
            if day >= 1 && day <= days as i64 {
                let date = NaiveDate::from_ymd_opt(year, month, day as u32)?;
                week.push(MonthCell {
                    day: Some(day as u32),
                    date: Some(date),
                });
            } else {
                week.push(MonthCell {
                    day: None,
                    date: None,
                });
            }
            day += 1;
        }
        weeks.push(week);
    }
    Some(weeks)
}

/// Step back one month, wrapping January to December of the prior year.
pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Step forward one month, wrapping December to January of the next year.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 10), Some(31));
        assert_eq!(days_in_month(2024, 2), Some(29)); // leap year
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn test_first_weekday_october_2024_is_tuesday() {
        assert_eq!(first_weekday(2024, 10), Some(2));
    }

    #[test]
    fn test_grid_shape_and_day_count() {
        let grid = month_grid(2024, 10).unwrap();
        assert_eq!(grid.len(), 6);
        assert!(grid.iter().all(|week| week.len() == 7));

        let filled: Vec<u32> = grid
            .iter()
            .flatten()
            .filter_map(|cell| cell.day)
            .collect();
        assert_eq!(filled.len(), 31);
        assert_eq!(filled.first(), Some(&1));
        assert_eq!(filled.last(), Some(&31));
    }

    #[test]
    fn test_day_one_lands_in_its_weekday_column() {
        // 2024-10-01 is a Tuesday: first row is [blank, blank, 1, 2, 3, 4, 5].
        let grid = month_grid(2024, 10).unwrap();
        let first_row: Vec<Option<u32>> = grid[0].iter().map(|c| c.day).collect();
        assert_eq!(
            first_row,
            vec![None, None, Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn test_filled_cells_carry_their_date() {
        let grid = month_grid(2024, 10).unwrap();
        let cell = &grid[0][2];
        assert_eq!(cell.date, NaiveDate::from_ymd_opt(2024, 10, 1));
    }

    #[test]
    fn test_month_navigation_wraps_at_year_boundary() {
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(prev_month(2025, 1), (2024, 12));
        assert_eq!(next_month(2024, 6), (2024, 7));
        assert_eq!(prev_month(2024, 6), (2024, 5));
    }
}
