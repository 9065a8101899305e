//! Maintenance hold model.
//!
//! A hold takes one room out of inventory for every day of its effective
//! interval while it is scheduled or in progress.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The state of a maintenance job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    /// Booked but not started.
    Scheduled,
    /// Work under way.
    InProgress,
    /// Work finished.
    Completed,
    /// Job called off.
    Cancelled,
}

impl MaintenanceStatus {
    /// Returns true if a hold in this state withdraws its room.
    pub fn holds_room(self) -> bool {
        matches!(self, MaintenanceStatus::Scheduled | MaintenanceStatus::InProgress)
    }
}

/// A maintenance job that withdraws a room from inventory.
///
/// # Example
///
/// ```
/// use hotel_ops_engine::models::{MaintenanceHold, MaintenanceStatus};
/// use chrono::NaiveDate;
///
/// let hold = MaintenanceHold {
///     id: "mnt_001".to_string(),
///     room: Some("204".to_string()),
///     start_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
///     estimated_end_date: NaiveDate::from_ymd_opt(2024, 8, 3).unwrap(),
///     actual_end_date: None,
///     status: MaintenanceStatus::InProgress,
/// };
///
/// assert!(hold.is_active_on(NaiveDate::from_ymd_opt(2024, 8, 3).unwrap()));
/// assert!(!hold.is_active_on(NaiveDate::from_ymd_opt(2024, 8, 4).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceHold {
    /// Unique identifier for the job.
    pub id: String,
    /// Room number, when known.
    #[serde(default)]
    pub room: Option<String>,
    /// First day the room is out of service.
    pub start_date: NaiveDate,
    /// Planned last day of the work.
    pub estimated_end_date: NaiveDate,
    /// Actual last day, once the work has finished.
    #[serde(default)]
    pub actual_end_date: Option<NaiveDate>,
    /// Job state.
    pub status: MaintenanceStatus,
}

impl MaintenanceHold {
    /// The last day of the hold: the actual end when recorded, else the estimate.
    pub fn effective_end_date(&self) -> NaiveDate {
        self.actual_end_date.unwrap_or(self.estimated_end_date)
    }

    /// Returns true if the hold removes its room on `date`.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.status.holds_room() && self.start_date <= date && date <= self.effective_end_date()
    }
}
