mod service;
mod state;

pub use service::HabitDayService;
pub use state::{HabitDayAlert, HabitDayState, ToggleStart};
