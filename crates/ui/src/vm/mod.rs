mod habit_day_vm;
mod week_vm;

pub use habit_day_vm::{HabitDayVm, HabitRowVm, alert_message, alert_title, map_habit_day};
pub use week_vm::{DayLinkVm, map_week_strip};
