#![forbid(unsafe_code)]

pub mod api;
pub mod error;
pub mod habit_day;

pub use habit_core::Clock;

pub use api::{ApiConfig, HabitsApi, HttpHabitsApi, InMemoryHabitsApi};
pub use error::{ApiError, HabitDayError};
pub use habit_day::{HabitDayAlert, HabitDayService, HabitDayState, ToggleStart};
