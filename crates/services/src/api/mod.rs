//! Contract for the remote habits API and its implementations.

mod http;
mod memory;

use async_trait::async_trait;
use habit_core::HabitDay;
use habit_core::model::{HabitId, HabitsInfo};

use crate::error::ApiError;

pub use http::{ApiConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, HttpHabitsApi, parse_timeout};
pub use memory::InMemoryHabitsApi;

/// Remote operations the habit day screen depends on.
#[async_trait]
pub trait HabitsApi: Send + Sync {
    /// Fetch the habits scheduled for `day` and which of them are completed.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failures, non-success statuses or
    /// undecodable bodies.
    async fn day(&self, day: HabitDay) -> Result<HabitsInfo, ApiError>;

    /// Flip completion of a habit for the server's current day.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failures or non-success statuses.
    async fn toggle_habit(&self, id: &HabitId) -> Result<(), ApiError>;
}
