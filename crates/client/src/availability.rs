//! Scheduling availability providers.
//!
//! Presentation code asks a provider for bookable slots over a date range
//! and renders whatever comes back. The synthetic provider generates
//! plausible availability locally; a backend-backed provider can be
//! substituted without touching the presentation side.

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

/// One bookable time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub time: NaiveTime,
    pub available: bool,
}

/// All slots for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}

impl DaySchedule {
    /// Whether any slot on this day is bookable.
    #[must_use]
    pub fn has_availability(&self) -> bool {
        self.slots.iter().any(|slot| slot.available)
    }
}

/// Source of bookable slots for a date range.
pub trait AvailabilityProvider {
    /// Return schedules for `days` consecutive days starting at `from`.
    fn day_schedules(
        &self,
        from: NaiveDate,
        days: u32,
    ) -> impl Future<Output = Vec<DaySchedule>> + Send;
}

/// Locally generated availability.
///
/// Produces hourly slots within business hours, each available with a
/// fixed probability; weekend slots are always unavailable. With a seed
/// set, output is deterministic per calendar day, so repeated calls over
/// overlapping ranges agree.
#[derive(Debug, Clone)]
pub struct SyntheticAvailability {
    /// Probability that a weekday slot is bookable.
    pub availability_rate: f64,
    /// First slot hour (inclusive).
    pub open_hour: u32,
    /// Last slot hour (exclusive).
    pub close_hour: u32,
    /// Fixed seed for deterministic output; `None` for entropy.
    pub seed: Option<u64>,
}

impl Default for SyntheticAvailability {
    fn default() -> Self {
        Self {
            availability_rate: 0.7,
            open_hour: 9,
            close_hour: 17,
            seed: None,
        }
    }
}

impl SyntheticAvailability {
    /// A deterministic provider for tests and previews.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    fn day_rng(&self, date: NaiveDate) -> StdRng {
        let day_ordinal = u64::from(date.num_days_from_ce().unsigned_abs());
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(day_ordinal)),
            None => StdRng::from_os_rng(),
        }
    }

    fn schedule_for(&self, date: NaiveDate) -> DaySchedule {
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        let mut rng = self.day_rng(date);

        let slots = (self.open_hour..self.close_hour)
            .filter_map(|hour| NaiveTime::from_hms_opt(hour, 0, 0))
            .map(|time| TimeSlot {
                time,
                available: !weekend && rng.random_bool(self.availability_rate),
            })
            .collect();

        DaySchedule { date, slots }
    }
}

impl AvailabilityProvider for SyntheticAvailability {
    async fn day_schedules(&self, from: NaiveDate, days: u32) -> Vec<DaySchedule> {
        (0..days)
            .filter_map(|offset| from.checked_add_days(Days::new(u64::from(offset))))
            .map(|date| self.schedule_for(date))
            .collect()
    }
}
