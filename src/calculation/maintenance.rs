//! Maintenance holds and room availability.

use chrono::NaiveDate;

use crate::models::{HotelCapacityConfig, MaintenanceHold};

/// Counts the holds that take a room out of service on `date`.
///
/// Only scheduled and in-progress holds count. The hold interval runs from
/// its start date to its actual end date (or estimated end date when no
/// actual end is recorded), both ends inclusive.
pub fn active_maintenance_count<'a, I>(date: NaiveDate, holds: I) -> u32
where
    I: IntoIterator<Item = &'a MaintenanceHold>,
{
    holds.into_iter().filter(|h| h.is_active_on(date)).count() as u32
}

/// Rooms that can be sold on a day with `active_maintenance` rooms out.
///
/// The result is negative when withdrawals exceed inventory.
///
/// # Examples
///
/// ```
/// use hotel_ops_engine::calculation::available_rooms;
/// use hotel_ops_engine::models::HotelCapacityConfig;
///
/// let config = HotelCapacityConfig::new(50, 2);
/// assert_eq!(available_rooms(&config, 3), 45);
/// ```
pub fn available_rooms(config: &HotelCapacityConfig, active_maintenance: u32) -> i64 {
    config.nominal_available_rooms() - i64::from(active_maintenance)
}
