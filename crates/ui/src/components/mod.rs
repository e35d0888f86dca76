mod alert;
mod back_button;
mod checkbox;
mod habits_empty;
mod loading;
mod progress_bar;

pub use alert::AlertDialog;
pub use back_button::BackButton;
pub use checkbox::Checkbox;
pub use habits_empty::HabitsEmpty;
pub use loading::Loading;
pub use progress_bar::{ProgressBar, clamp_progress};
