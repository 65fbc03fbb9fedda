use chrono::{Datelike, Month, NaiveDate, Utc};
use num_traits::FromPrimitive;
use std::fmt;

pub const GRID_COLUMNS: usize = 7;
pub const GRID_ROWS: usize = 5;
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

pub fn days_of_month(month: &Month, year: i32) -> u32 {
    if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    }
    .expect("valid calendar date")
    .signed_duration_since(
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
            .expect("valid calendar date"),
    )
    .num_days() as u32
}

/// One position of the 7x5 month grid. Cells belonging to the previous or
/// next month carry `in_current_month == false` so the view can dim them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    day_num: u32,
    in_current_month: bool,
}

impl DayCell {
    fn current(day_num: u32) -> Self {
        DayCell {
            day_num,
            in_current_month: true,
        }
    }

    fn adjacent(day_num: u32) -> Self {
        DayCell {
            day_num,
            in_current_month: false,
        }
    }

    pub fn day_num(&self) -> u32 {
        self.day_num
    }

    pub fn in_current_month(&self) -> bool {
        self.in_current_month
    }
}

impl fmt::Display for DayCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.day_num)
    }
}

/// The month currently shown, derived from the pager's base month and its
/// navigation offset. Month is kept 0-based (0 == January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayedPeriod {
    year: i32,
    month0: u32,
}

impl DisplayedPeriod {
    pub fn new(year: i32, month0: u32) -> Self {
        debug_assert!(month0 < 12);
        DisplayedPeriod { year, month0 }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn month(&self) -> Month {
        Month::from_u32(self.month0 + 1).expect("month index in 0..12")
    }

    pub fn month_name(&self) -> &'static str {
        self.month().name()
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).expect("valid calendar date")
    }

    pub fn pred(&self) -> DisplayedPeriod {
        if self.month0 == 0 {
            DisplayedPeriod::new(self.year - 1, 11)
        } else {
            DisplayedPeriod::new(self.year, self.month0 - 1)
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }
}

impl fmt::Display for DisplayedPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

/// A fixed 35-cell layout of a month: leading cells from the previous month
/// up to the month's first weekday (Sunday-first), the month's own days, and
/// trailing cells from the next month to fill the last row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn of(period: DisplayedPeriod) -> Self {
        let first_weekday = period.first_day().weekday().num_days_from_sunday();
        let prev = period.pred();
        let days_in_previous = days_of_month(&prev.month(), prev.year());
        let days_in_target = days_of_month(&period.month(), period.year());

        let mut cells = Vec::with_capacity(GRID_CELLS);
        for k in 1..=first_weekday {
            cells.push(DayCell::adjacent(days_in_previous - first_weekday + k));
        }
        for day in 1..=days_in_target {
            cells.push(DayCell::current(day));
        }
        let trailing = GRID_CELLS.saturating_sub(cells.len());
        for day in 1..=trailing {
            cells.push(DayCell::adjacent(day as u32));
        }

        // A 31-day month starting on Friday or Saturday would spill into a
        // sixth row; the layout clips it at the fixed cell count instead.
        cells.truncate(GRID_CELLS);

        MonthGrid { cells }
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }
}

/// Month navigation state: a base month seeded once from a reference date and
/// a signed offset moved by one on every paging command. Everything shown is
/// recomputed from these two values on demand.
#[derive(Debug, Clone)]
pub struct MonthPager {
    base: DisplayedPeriod,
    offset: i32,
}

impl MonthPager {
    pub fn new(today: NaiveDate) -> Self {
        MonthPager {
            base: DisplayedPeriod::new(today.year(), today.month0()),
            offset: 0,
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn advance(&mut self) {
        self.offset += 1;
    }

    pub fn retreat(&mut self) {
        self.offset -= 1;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn displayed_period(&self) -> DisplayedPeriod {
        let total =
            self.base.year() as i64 * 12 + self.base.month0() as i64 + self.offset as i64;
        DisplayedPeriod::new(total.div_euclid(12) as i32, total.rem_euclid(12) as u32)
    }

    pub fn period_label(&self) -> (&'static str, i32) {
        let period = self.displayed_period();
        (period.month_name(), period.year())
    }

    pub fn month_grid(&self) -> MonthGrid {
        MonthGrid::of(self.displayed_period())
    }
}

impl Default for MonthPager {
    fn default() -> Self {
        MonthPager::new(Utc::now().date_naive())
    }
}
