use std::sync::Arc;

use habit_core::HabitDay;
use services::HabitDayService;

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    /// Day shown on the home route.
    fn initial_day(&self) -> HabitDay;

    fn habit_days(&self) -> Arc<HabitDayService>;
}

#[derive(Clone)]
pub struct AppContext {
    initial_day: HabitDay,
    habit_days: Arc<HabitDayService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_day: app.initial_day(),
            habit_days: app.habit_days(),
        }
    }

    #[must_use]
    pub fn initial_day(&self) -> HabitDay {
        self.initial_day
    }

    #[must_use]
    pub fn habit_days(&self) -> Arc<HabitDayService> {
        Arc::clone(&self.habit_days)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
