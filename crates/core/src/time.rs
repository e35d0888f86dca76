use chrono::{
    DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone,
    Utc,
};

/// A clock abstraction so "today" and "is past" are deterministic in tests.
///
/// Calendar days are taken in the clock's zone: the machine's local zone for
/// `Clock::System`, a fixed UTC offset for `Clock::Fixed`.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed {
        at: DateTime<Utc>,
        offset: FixedOffset,
    },
}

impl Clock {
    /// Returns a clock that follows the system time in the local zone.
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    /// Returns a clock frozen at the given instant, with days taken in UTC.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::fixed_in(at, Utc.fix())
    }

    /// Returns a clock frozen at `at`, with days taken at `offset`.
    #[must_use]
    pub fn fixed_in(at: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self::Fixed { at, offset }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed { at, .. } => *at,
        }
    }

    /// Calendar date of `at` in the clock's zone.
    #[must_use]
    pub fn local_date(&self, at: DateTime<Utc>) -> NaiveDate {
        match self {
            Clock::System => at.with_timezone(&Local).date_naive(),
            Clock::Fixed { offset, .. } => at.with_timezone(offset).date_naive(),
        }
    }

    /// Calendar date of the current instant in the clock's zone.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.local_date(self.now())
    }

    /// The instant `date` begins in the clock's zone.
    ///
    /// When local midnight falls in a DST gap the day begins at the first
    /// valid local time after it.
    #[must_use]
    pub fn start_of(&self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(NaiveTime::MIN);
        match self {
            Clock::System => local_to_utc(&Local, midnight),
            Clock::Fixed { offset, .. } => local_to_utc(offset, midnight),
        }
    }
}

fn local_to_utc<Tz: TimeZone>(zone: &Tz, local: NaiveDateTime) -> DateTime<Utc> {
    (0..=2)
        .find_map(|hours| {
            zone.from_local_datetime(&(local + Duration::hours(hours)))
                .earliest()
        })
        .map_or_else(|| local.and_utc(), |at| at.with_timezone(&Utc))
}

/// Deterministic timestamp for tests (2026-10-16T12:00:00Z, a Friday).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_792_152_000;

/// Returns a deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp, in UTC.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}
