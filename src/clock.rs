//! Sources of "now" for the presentation layer.
//!
//! The core models take the current instant as a parameter. This module is
//! where the binary obtains it. A clock answers two questions: the real
//! instant, which drives water levels, and the wall-clock time shown to the
//! user, which drives theming. A simulated hour only changes the second one,
//! so previewing the night sky never makes a plant look thirstier.

use crate::PlantError;
use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, Utc};

/// Something that can tell the current time.
pub trait Clock: Send + Sync {
    /// Current local instant
    fn now(&self) -> DateTime<Local>;

    /// Wall-clock time used for day/night theming
    fn wall_time(&self) -> NaiveDateTime {
        self.now().naive_local()
    }

    /// Whether the wall-clock time deviates from real time
    fn is_simulated(&self) -> bool {
        false
    }

    /// Current instant in UTC
    fn now_utc(&self) -> DateTime<Utc> {
        self.now().with_timezone(&Utc)
    }
}

/// Real time from the operating system.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Today's date from the inner clock, shown at `hour:00:00`.
///
/// The simulated time is a naive wall-clock value, so an hour skipped by a
/// DST change still previews as that hour.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedHourClock<C> {
    inner: C,
    time: NaiveTime,
}

impl<C: Clock> SimulatedHourClock<C> {
    pub fn new(inner: C, hour: u32) -> Result<Self, PlantError> {
        let time = NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| {
            PlantError::Validation(format!(
                "simulated hour must be between 0 and 23, got {hour}"
            ))
        })?;
        Ok(Self { inner, time })
    }
}

impl<C: Clock> Clock for SimulatedHourClock<C> {
    fn now(&self) -> DateTime<Local> {
        self.inner.now()
    }

    fn wall_time(&self) -> NaiveDateTime {
        self.inner.now().date_naive().and_time(self.time)
    }

    fn is_simulated(&self) -> bool {
        true
    }
}
