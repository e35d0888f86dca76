use std::sync::Arc;

use habit_core::model::{HabitId, HabitsInfo};
use habit_core::{Clock, HabitDay};

use crate::api::HabitsApi;
use crate::error::HabitDayError;

/// Reads and edits one day of habits through a `HabitsApi`.
#[derive(Clone)]
pub struct HabitDayService {
    clock: Clock,
    api: Arc<dyn HabitsApi>,
}

impl HabitDayService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn HabitsApi>) -> Self {
        Self { clock, api }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn today(&self) -> HabitDay {
        HabitDay::today(&self.clock)
    }

    /// Past days are view-only.
    #[must_use]
    pub fn is_read_only(&self, day: HabitDay) -> bool {
        day.is_past(&self.clock)
    }

    /// Fetch the habits for `day`.
    ///
    /// # Errors
    ///
    /// Returns `HabitDayError::Api` if the request fails. The failure is logged.
    pub async fn load_day(&self, day: HabitDay) -> Result<HabitsInfo, HabitDayError> {
        match self.api.day(day).await {
            Ok(info) => {
                tracing::debug!(
                    %day,
                    possible = info.possible_habits().len(),
                    completed = info.completed_habits().len(),
                    "loaded habit day"
                );
                Ok(info)
            }
            Err(err) => {
                tracing::error!(%day, error = %err, "failed to load habit day");
                Err(err.into())
            }
        }
    }

    /// Ask the server to flip completion of `id`.
    ///
    /// Callers update local state only after this returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `HabitDayError::ReadOnlyDay` without issuing a request when
    /// `day` is in the past, or `HabitDayError::Api` if the request fails.
    pub async fn toggle_habit(&self, day: HabitDay, id: &HabitId) -> Result<(), HabitDayError> {
        if self.is_read_only(day) {
            tracing::warn!(%day, habit = %id, "ignored toggle on a past day");
            return Err(HabitDayError::ReadOnlyDay);
        }
        match self.api.toggle_habit(id).await {
            Ok(()) => {
                tracing::debug!(%day, habit = %id, "toggled habit");
                Ok(())
            }
            Err(err) => {
                tracing::error!(%day, habit = %id, error = %err, "failed to toggle habit");
                Err(err.into())
            }
        }
    }
}
