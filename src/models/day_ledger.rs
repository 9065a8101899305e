//! Forecast output models.
//!
//! This module contains the [`DayLedger`] produced for every day of a
//! capacity forecast and the [`ForecastSummary`] rolled up from a ledger.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headcount and rooms attributed to a demand bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaxRooms {
    /// Headcount.
    pub pax: u32,
    /// Rooms required.
    pub rooms: u32,
}

impl PaxRooms {
    /// Adds another bucket into this one, saturating at `u32::MAX`.
    pub fn add(&mut self, other: PaxRooms) {
        *self = *self + other;
    }
}

impl std::ops::Add for PaxRooms {
    type Output = PaxRooms;

    fn add(self, other: PaxRooms) -> PaxRooms {
        PaxRooms {
            pax: self.pax.saturating_add(other.pax),
            rooms: self.rooms.saturating_add(other.rooms),
        }
    }
}

/// Demand against supply for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLedger {
    /// The day.
    pub date: NaiveDate,
    /// Confirmed demand from events.
    pub event_confirmed: PaxRooms,
    /// In-house demand from events.
    pub event_checked_in: PaxRooms,
    /// Confirmed room-only demand.
    pub room_only_confirmed: PaxRooms,
    /// In-house room-only demand.
    pub room_only_checked_in: PaxRooms,
    /// Events plus room-only, confirmed.
    pub total_confirmed: PaxRooms,
    /// Events plus room-only, checked in.
    pub total_checked_in: PaxRooms,
    /// Confirmed plus checked-in rooms.
    pub total_rooms_needed: u32,
    /// Rooms out for maintenance on this day.
    pub active_maintenance: u32,
    /// Sellable rooms after withdrawals and maintenance. May be negative.
    pub available_rooms: i64,
    /// Rooms short of demand.
    pub deficit: u32,
    /// Rooms left over after demand.
    pub surplus: u32,
    /// True when demand cannot be housed on site.
    pub needs_outsourcing: bool,
    /// Percentage of available rooms needed, capped at 100.
    pub occupancy_rate: Decimal,
}

/// Roll-up of a forecast window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastSummary {
    /// Number of days in the forecast.
    pub days: u32,
    /// Days with a deficit.
    pub days_needing_outsourcing: u32,
    /// Largest single-day deficit.
    pub peak_deficit: u32,
    /// First day on which the peak deficit occurs, if any day has a deficit.
    pub peak_deficit_date: Option<NaiveDate>,
    /// Sum of rooms needed across all days.
    pub total_room_nights_needed: u64,
    /// Sum of surplus rooms across all days.
    pub total_surplus_room_nights: u64,
    /// Mean of the daily occupancy rates; zero for an empty forecast.
    pub average_occupancy_rate: Decimal,
}
