mod habit;
mod habits_info;
mod ids;

pub use habit::Habit;
pub use habits_info::HabitsInfo;
pub use ids::HabitId;
