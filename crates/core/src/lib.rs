#![forbid(unsafe_code)]

pub mod day;
pub mod model;
pub mod progress;
pub mod time;

pub use day::{DayParseError, HabitDay};
pub use progress::{Progress, progress_percentage};
pub use time::Clock;
