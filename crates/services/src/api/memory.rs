use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use habit_core::model::{HabitId, HabitsInfo};
use habit_core::{Clock, HabitDay};

use super::HabitsApi;
use crate::error::ApiError;

/// In-memory `HabitsApi` for tests and headless rendering.
///
/// Toggles apply to the day containing the clock's current instant, the same
/// way the real server toggles against its own "today".
#[derive(Clone, Default)]
pub struct InMemoryHabitsApi {
    clock: Clock,
    days: Arc<Mutex<HashMap<HabitDay, HabitsInfo>>>,
    fail_loads: Arc<AtomicBool>,
    fail_toggles: Arc<AtomicBool>,
    toggle_calls: Arc<Mutex<Vec<HabitId>>>,
}

impl InMemoryHabitsApi {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    pub fn insert_day(&self, day: HabitDay, info: HabitsInfo) {
        if let Ok(mut days) = self.days.lock() {
            days.insert(day, info);
        }
    }

    #[must_use]
    pub fn stored_day(&self, day: HabitDay) -> Option<HabitsInfo> {
        self.days.lock().ok()?.get(&day).cloned()
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_toggles(&self, fail: bool) {
        self.fail_toggles.store(fail, Ordering::SeqCst);
    }

    /// Ids passed to `toggle_habit`, in call order, including failed calls.
    #[must_use]
    pub fn toggle_calls(&self) -> Vec<HabitId> {
        self.toggle_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn lock_err() -> ApiError {
        ApiError::Unavailable("in-memory state poisoned".into())
    }
}

#[async_trait]
impl HabitsApi for InMemoryHabitsApi {
    async fn day(&self, day: HabitDay) -> Result<HabitsInfo, ApiError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(ApiError::Unavailable("load rejected".into()));
        }
        let days = self.days.lock().map_err(|_| Self::lock_err())?;
        Ok(days.get(&day).cloned().unwrap_or_default())
    }

    async fn toggle_habit(&self, id: &HabitId) -> Result<(), ApiError> {
        self.toggle_calls
            .lock()
            .map_err(|_| Self::lock_err())?
            .push(id.clone());
        if self.fail_toggles.load(Ordering::SeqCst) {
            return Err(ApiError::Unavailable("toggle rejected".into()));
        }
        let today = HabitDay::today(&self.clock);
        let mut days = self.days.lock().map_err(|_| Self::lock_err())?;
        days.entry(today).or_default().toggle(id);
        Ok(())
    }
}
