use chrono::{NaiveDate, NaiveTime, TimeZone};

use redate_shared_kernel::{DomainError, DomainResult, Timestamp};

/// A calendar date combined with a time-of-day, both in local time.
///
/// The two halves are collected independently and summed into one absolute
/// local instant; no timezone conversion is applied. Resolution happens
/// late so an impossible combination (a DST gap) surfaces as a domain
/// error instead of a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetMoment {
    date: NaiveDate,
    time: NaiveTime,
}

impl TargetMoment {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    /// Resolve into an absolute local timestamp.
    ///
    /// An ambiguous wall-clock time (DST overlap) resolves to the earlier
    /// of the two instants.
    ///
    /// # Errors
    /// Fails when the combination does not exist in local time.
    pub fn resolve(&self) -> DomainResult<Timestamp> {
        let naive = self.date.and_time(self.time);
        chrono::Local
            .from_local_datetime(&naive)
            .earliest()
            .map(Timestamp::from)
            .ok_or_else(|| DomainError::InvalidMoment {
                details: format!("{naive} does not exist in local time"),
            })
    }
}
