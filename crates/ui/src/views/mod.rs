mod habit;
mod home;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod toggle_smoke;
#[cfg(test)]
mod view_smoke;

pub use habit::{HabitDayHandle, HabitDayScreen, HabitView, use_habit_day};
pub use home::HomeView;
