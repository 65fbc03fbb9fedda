pub mod calview;

pub use calview::CalendarView;
