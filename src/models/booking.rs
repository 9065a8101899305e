//! Booking models for the capacity forecaster.
//!
//! This module defines [`MultiDayBooking`] (events and group programmes with a
//! per-day headcount profile) and [`SingleDayBooking`] (room-only guests).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    /// Enquiry received, not yet committed.
    Pending,
    /// Committed but guests have not arrived.
    Confirmed,
    /// Guests are in house.
    CheckedIn,
    /// Booking withdrawn.
    Cancelled,
}

/// The approval flag carried by event bookings, independent of the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApprovalStatus {
    /// Approved by the sales office.
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    /// Waiting on client or sales sign-off.
    #[serde(rename = "AWAITING CONFIRMATION")]
    AwaitingConfirmation,
    /// Approval withdrawn.
    #[serde(rename = "CANCELLED")]
    Cancelled,
    /// Any other label the front office uses.
    #[serde(rename = "OTHER", other)]
    Other,
}

/// Whether attendees of a programme also sleep on site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramType {
    /// Every attendee occupies a room.
    Residential,
    /// Day attendees; rooms are only held for facilitators.
    NonResidential,
}

/// A reservation spanning one or more days with a per-day headcount.
///
/// # Example
///
/// ```
/// use hotel_ops_engine::models::{ApprovalStatus, BookingStatus, MultiDayBooking, ProgramType};
/// use chrono::NaiveDate;
///
/// let booking = MultiDayBooking {
///     id: "evt_001".to_string(),
///     name: Some("Annual Sales Retreat".to_string()),
///     start_date: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 8, 6).unwrap(),
///     daily_pax: vec![45, 40],
///     booking_status: BookingStatus::CheckedIn,
///     status: ApprovalStatus::Confirmed,
///     program_type: ProgramType::Residential,
/// };
///
/// assert_eq!(booking.pax_on(NaiveDate::from_ymd_opt(2024, 8, 6).unwrap()), 40);
/// assert_eq!(booking.pax_on(NaiveDate::from_ymd_opt(2024, 8, 7).unwrap()), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiDayBooking {
    /// Unique identifier for the booking.
    pub id: String,
    /// Display name of the event or group.
    #[serde(default)]
    pub name: Option<String>,
    /// First day of the booking (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the booking (inclusive).
    pub end_date: NaiveDate,
    /// Headcount per day, indexed from `start_date`.
    #[serde(default)]
    pub daily_pax: Vec<u32>,
    /// Lifecycle state.
    pub booking_status: BookingStatus,
    /// Sales approval flag.
    pub status: ApprovalStatus,
    /// Room accounting mode.
    pub program_type: ProgramType,
}

impl MultiDayBooking {
    /// Returns true if `date` falls within the booking, both ends inclusive.
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns the headcount for `date`.
    ///
    /// Days outside the booking, and days past the end of `daily_pax`, are zero.
    pub fn pax_on(&self, date: NaiveDate) -> u32 {
        if !self.covers(date) {
            return 0;
        }
        let offset = (date - self.start_date).num_days();
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.daily_pax.get(i).copied())
            .unwrap_or(0)
    }

    /// Checks the booking's dates are in order.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidBooking {
                booking_id: self.id.clone(),
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}

/// A room-only guest booking for a single night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleDayBooking {
    /// The night of the stay.
    pub date: NaiveDate,
    /// Headcount.
    pub pax: u32,
    /// Rooms held.
    pub rooms: u32,
    /// Lifecycle state.
    pub booking_status: BookingStatus,
}
