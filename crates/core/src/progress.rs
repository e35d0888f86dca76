//! Completion percentage for a day.

/// Completed-over-total counts for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Rounded percentage in `0..=100`.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        progress_percentage(self.total, self.completed)
    }
}

/// `completed / total * 100`, rounded half up.
///
/// Returns 0 when `total` is 0. A `completed` larger than `total` (stale ids
/// in a server response) saturates at 100.
#[must_use]
pub fn progress_percentage(total: usize, completed: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    let rounded = (completed * 100 + total / 2) / total;
    u8::try_from(rounded).unwrap_or(100)
}
