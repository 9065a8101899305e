//! Hotel inventory, settings and date range models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default number of day attendees per facilitator room for non-residential programmes.
pub const DEFAULT_NON_RESIDENTIAL_PAX_PER_ROOM: u32 = 4;

fn default_pax_per_room() -> u32 {
    DEFAULT_NON_RESIDENTIAL_PAX_PER_ROOM
}

/// Static room inventory of the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelCapacityConfig {
    /// Total rooms in the building.
    pub total_rooms: u32,
    /// Rooms permanently withdrawn (staff quarters, storage).
    pub permanently_unavailable: u32,
    /// Headcount per room for non-residential programmes.
    #[serde(default = "default_pax_per_room")]
    pub non_residential_pax_per_room: u32,
}

impl HotelCapacityConfig {
    /// Creates a config with the default non-residential ratio.
    pub fn new(total_rooms: u32, permanently_unavailable: u32) -> Self {
        Self {
            total_rooms,
            permanently_unavailable,
            non_residential_pax_per_room: DEFAULT_NON_RESIDENTIAL_PAX_PER_ROOM,
        }
    }

    /// Sellable rooms before maintenance holds are taken out. May be negative.
    pub fn nominal_available_rooms(&self) -> i64 {
        i64::from(self.total_rooms) - i64::from(self.permanently_unavailable)
    }
}

/// Company-wide settings kept by the back office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySettings {
    /// Trading name printed on payslips and reports.
    pub company_name: String,
    /// Room inventory.
    pub hotel: HotelCapacityConfig,
}

/// An inclusive range of calendar days.
///
/// # Example
///
/// ```
/// use hotel_ops_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 8, 7).unwrap(),
/// };
/// assert_eq!(range.num_days(), 3);
/// assert_eq!(range.days().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting one whose end precedes its start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of days in the range; zero when inverted.
    pub fn num_days(&self) -> i64 {
        ((self.end - self.start).num_days() + 1).max(0)
    }

    /// Returns true if `date` is inside the range.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns true if `[start, end]` shares at least one day with this range.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.end && self.start <= end
    }

    /// Iterates over every day of the range in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
