use chrono::Datelike;
use itertools::Itertools;
use std::io::{self, Write};
use termion::{clear, color, cursor, style};

use crate::app::App;
use crate::calendar::DayCell;

const WEEKDAY_LABELS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Draws the month header and the 7x5 day grid. All date decisions are made
/// by the pager; this only formats `DayCell`s.
pub struct CalendarView {
    cell_width: usize,
}

impl Default for CalendarView {
    fn default() -> Self {
        CalendarView { cell_width: 4 }
    }
}

impl CalendarView {
    pub fn draw<W: Write>(&self, w: &mut W, app: &App) -> io::Result<()> {
        let period = app.pager().displayed_period();
        let grid = app.pager().month_grid();
        let today = app.today();
        let today_shown = period.contains(today);

        write!(w, "{}{}", clear::All, cursor::Goto(1, 1))?;
        write!(w, " {}{}{}\r\n\r\n", style::Bold, period, style::Reset)?;

        let header = WEEKDAY_LABELS
            .iter()
            .map(|label| format!("{:>width$}", label, width = self.cell_width))
            .join("");
        write!(w, "{}\r\n", header)?;

        for row in grid.rows() {
            for cell in row {
                let is_today = today_shown
                    && cell.in_current_month()
                    && cell.day_num() == today.day();
                write!(w, "{}", self.format_cell(cell, is_today))?;
            }
            write!(w, "\r\n")?;
        }

        write!(
            w,
            "\r\n h/\u{2190} prev  l/\u{2192} next  t today  q quit\r\n"
        )?;
        w.flush()
    }

    fn format_cell(&self, cell: &DayCell, is_today: bool) -> String {
        let num = format!("{:>width$}", cell.day_num(), width = self.cell_width);
        if is_today {
            format!("{}{}{}", style::Invert, num, style::NoInvert)
        } else if cell.in_current_month() {
            num
        } else {
            format!(
                "{}{}{}",
                color::Fg(color::LightBlack),
                num,
                color::Fg(color::Reset)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::NaiveDate;

    fn render(year: i32, month: u32, day: u32) -> String {
        let config = Config::default();
        let app = App::new(&config, NaiveDate::from_ymd_opt(year, month, day).unwrap());
        let mut buf = Vec::new();
        CalendarView::default().draw(&mut buf, &app).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn frame_carries_period_label_and_weekday_header() {
        let frame = render(2021, 9, 15);

        assert!(frame.contains("September 2021"));
        assert!(frame.contains("Su  Mo  Tu  We  Th  Fr  Sa"));
    }

    #[test]
    fn adjacent_month_cells_are_dimmed() {
        use crate::calendar::{DisplayedPeriod, MonthGrid};

        let view = CalendarView::default();
        // September 2021 has three leading cells from August.
        let grid = MonthGrid::of(DisplayedPeriod::new(2021, 8));

        let leading = view.format_cell(&grid.cells()[0], false);
        let current = view.format_cell(&grid.cells()[10], false);

        assert!(leading.contains('\u{1b}'));
        assert!(!current.contains('\u{1b}'));
    }

    #[test]
    fn today_is_highlighted_in_its_own_month() {
        let frame = render(2021, 9, 15);
        assert!(frame.contains(&format!("{}", style::Invert)));
    }
}
