use serde::{Deserialize, Serialize};

use super::{Habit, HabitId};
use crate::progress::Progress;

/// Habits scheduled for one day and the subset already completed.
///
/// `completed_habits` behaves as an insertion-ordered set: duplicates coming
/// from the wire collapse to their first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "HabitsInfoWire")]
pub struct HabitsInfo {
    possible_habits: Vec<Habit>,
    completed_habits: Vec<HabitId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HabitsInfoWire {
    #[serde(default)]
    possible_habits: Vec<Habit>,
    #[serde(default)]
    completed_habits: Vec<HabitId>,
}

impl From<HabitsInfoWire> for HabitsInfo {
    fn from(wire: HabitsInfoWire) -> Self {
        Self::new(wire.possible_habits, wire.completed_habits)
    }
}

impl HabitsInfo {
    #[must_use]
    pub fn new(possible_habits: Vec<Habit>, completed_habits: Vec<HabitId>) -> Self {
        let mut deduped: Vec<HabitId> = Vec::with_capacity(completed_habits.len());
        for id in completed_habits {
            if !deduped.contains(&id) {
                deduped.push(id);
            }
        }
        Self {
            possible_habits,
            completed_habits: deduped,
        }
    }

    #[must_use]
    pub fn possible_habits(&self) -> &[Habit] {
        &self.possible_habits
    }

    #[must_use]
    pub fn completed_habits(&self) -> &[HabitId] {
        &self.completed_habits
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.possible_habits.is_empty()
    }

    #[must_use]
    pub fn is_completed(&self, id: &HabitId) -> bool {
        self.completed_habits.contains(id)
    }

    /// Flip completion for `id`: present ids are removed, absent ids appended.
    ///
    /// Returns the new completion state of `id`.
    pub fn toggle(&mut self, id: &HabitId) -> bool {
        if let Some(pos) = self.completed_habits.iter().position(|c| c == id) {
            self.completed_habits.remove(pos);
            false
        } else {
            self.completed_habits.push(id.clone());
            true
        }
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress::new(self.completed_habits.len(), self.possible_habits.len())
    }
}
