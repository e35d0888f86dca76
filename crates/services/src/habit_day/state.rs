use habit_core::model::{HabitId, HabitsInfo};

/// Blocking notices the screen must show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HabitDayAlert {
    LoadFailed,
    ToggleFailed,
}

/// Outcome of asking to start a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleStart {
    Started,
    ReadOnly,
    AlreadyPending,
    NotLoaded,
    UnknownHabit,
}

impl ToggleStart {
    #[must_use]
    pub fn is_started(self) -> bool {
        matches!(self, ToggleStart::Started)
    }
}

/// Transient state of the habit day screen.
///
/// Starts in the loading state. `info` is replaced on every load and only
/// changes otherwise through a confirmed toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HabitDayState {
    loading: bool,
    info: Option<HabitsInfo>,
    alert: Option<HabitDayAlert>,
    pending: Vec<HabitId>,
}

impl Default for HabitDayState {
    fn default() -> Self {
        Self::new()
    }
}

impl HabitDayState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loading: true,
            info: None,
            alert: None,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn info(&self) -> Option<&HabitsInfo> {
        self.info.as_ref()
    }

    #[must_use]
    pub fn alert(&self) -> Option<HabitDayAlert> {
        self.alert
    }

    #[must_use]
    pub fn is_pending(&self, id: &HabitId) -> bool {
        self.pending.contains(id)
    }

    #[must_use]
    pub fn progress_percentage(&self) -> u8 {
        self.info
            .as_ref()
            .map_or(0, |info| info.progress().percentage())
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Store the fetched day, or drop stale info and raise the alert.
    /// Loading is cleared either way.
    pub fn finish_load<E>(&mut self, result: Result<HabitsInfo, E>) {
        match result {
            Ok(info) => self.info = Some(info),
            Err(_) => {
                self.info = None;
                self.alert = Some(HabitDayAlert::LoadFailed);
            }
        }
        self.pending.clear();
        self.loading = false;
    }

    /// Mark a toggle of `id` as in flight if it is allowed.
    pub fn begin_toggle(&mut self, id: &HabitId, read_only: bool) -> ToggleStart {
        if read_only {
            return ToggleStart::ReadOnly;
        }
        let Some(info) = self.info.as_ref() else {
            return ToggleStart::NotLoaded;
        };
        if !info.possible_habits().iter().any(|habit| habit.id() == id) {
            return ToggleStart::UnknownHabit;
        }
        if self.is_pending(id) {
            return ToggleStart::AlreadyPending;
        }
        self.pending.push(id.clone());
        ToggleStart::Started
    }

    /// Apply the server's answer for a toggle started with `begin_toggle`.
    pub fn finish_toggle<E>(&mut self, id: &HabitId, result: Result<(), E>) {
        let was_pending = match self.pending.iter().position(|p| p == id) {
            Some(pos) => {
                self.pending.remove(pos);
                true
            }
            None => false,
        };
        match result {
            Ok(()) => {
                // A reload in between already reflects the server's state.
                if was_pending {
                    if let Some(info) = self.info.as_mut() {
                        info.toggle(id);
                    }
                }
            }
            Err(_) => self.alert = Some(HabitDayAlert::ToggleFailed),
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
