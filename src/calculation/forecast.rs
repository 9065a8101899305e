//! Day-by-day capacity forecast.
//!
//! This module nets room demand from events and room-only guests against the
//! rooms left after permanent withdrawals and maintenance holds, producing a
//! [`DayLedger`] for every day of a [`DateRange`].

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    DateRange, DayLedger, HotelCapacityConfig, MaintenanceHold, MultiDayBooking, SingleDayBooking,
};

use super::demand::{
    BucketedDemand, event_bucket, event_demand_on, room_only_demand, room_only_demand_on,
};
use super::maintenance::{active_maintenance_count, available_rooms};

/// Produces one ledger per day of `range`, in date order.
///
/// An inverted range yields an empty forecast. Inputs are indexed once per
/// call, so the cost is proportional to the number of days times the number
/// of bookings that overlap the range, not every booking on file.
///
/// # Examples
///
/// ```
/// use hotel_ops_engine::calculation::forecast;
/// use hotel_ops_engine::models::{
///     ApprovalStatus, BookingStatus, DateRange, HotelCapacityConfig, MultiDayBooking, ProgramType,
/// };
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
///     end: NaiveDate::from_ymd_opt(2024, 8, 7).unwrap(),
/// };
/// let booking = MultiDayBooking {
///     id: "evt_001".to_string(),
///     name: None,
///     start_date: NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 8, 6).unwrap(),
///     daily_pax: vec![45, 45],
///     booking_status: BookingStatus::CheckedIn,
///     status: ApprovalStatus::Confirmed,
///     program_type: ProgramType::Residential,
/// };
///
/// let days = forecast(&range, &[booking], &[], &[], &HotelCapacityConfig::new(50, 2));
///
/// assert_eq!(days.len(), 3);
/// assert_eq!(days[0].available_rooms, 48);
/// assert_eq!(days[0].surplus, 3);
/// assert_eq!(days[2].surplus, 48);
/// ```
pub fn forecast(
    range: &DateRange,
    multi_day_bookings: &[MultiDayBooking],
    single_day_bookings: &[SingleDayBooking],
    maintenance_holds: &[MaintenanceHold],
    config: &HotelCapacityConfig,
) -> Vec<DayLedger> {
    let index = ForecastIndex::build(
        range,
        multi_day_bookings,
        single_day_bookings,
        maintenance_holds,
    );

    range
        .days()
        .map(|date| {
            let events = event_demand_on(
                date,
                index.events.iter().copied(),
                config.non_residential_pax_per_room,
            );
            let room_only = room_only_demand(index.room_only.get(&date).copied());
            let maintenance = active_maintenance_count(date, index.holds.iter().copied());
            build_day_ledger(date, events, room_only, maintenance, config)
        })
        .collect()
}

/// Computes the ledger for a single day by scanning every input.
///
/// Gives the same result as the matching entry of [`forecast`].
pub fn day_ledger(
    date: NaiveDate,
    multi_day_bookings: &[MultiDayBooking],
    single_day_bookings: &[SingleDayBooking],
    maintenance_holds: &[MaintenanceHold],
    config: &HotelCapacityConfig,
) -> DayLedger {
    let events = event_demand_on(date, multi_day_bookings, config.non_residential_pax_per_room);
    let room_only = room_only_demand_on(date, single_day_bookings);
    let maintenance = active_maintenance_count(date, maintenance_holds);
    build_day_ledger(date, events, room_only, maintenance, config)
}

/// Inputs narrowed to what can affect the forecast window.
struct ForecastIndex<'a> {
    /// Events overlapping the window that feed a demand bucket.
    events: Vec<&'a MultiDayBooking>,
    /// First room-only booking per date.
    room_only: HashMap<NaiveDate, &'a SingleDayBooking>,
    /// Room-holding maintenance jobs overlapping the window.
    holds: Vec<&'a MaintenanceHold>,
}

impl<'a> ForecastIndex<'a> {
    fn build(
        range: &DateRange,
        multi_day_bookings: &'a [MultiDayBooking],
        single_day_bookings: &'a [SingleDayBooking],
        maintenance_holds: &'a [MaintenanceHold],
    ) -> Self {
        let events = multi_day_bookings
            .iter()
            .filter(|b| range.overlaps(b.start_date, b.end_date))
            .filter(|b| event_bucket(b.booking_status, b.status).is_some())
            .collect();

        let mut room_only = HashMap::new();
        for booking in single_day_bookings.iter().filter(|b| range.contains(b.date)) {
            room_only.entry(booking.date).or_insert(booking);
        }

        let holds = maintenance_holds
            .iter()
            .filter(|h| h.status.holds_room())
            .filter(|h| range.overlaps(h.start_date, h.effective_end_date()))
            .collect();

        Self {
            events,
            room_only,
            holds,
        }
    }
}

/// Totals the buckets and nets demand against supply for one day.
fn build_day_ledger(
    date: NaiveDate,
    events: BucketedDemand,
    room_only: BucketedDemand,
    active_maintenance: u32,
    config: &HotelCapacityConfig,
) -> DayLedger {
    let total_confirmed = events.confirmed + room_only.confirmed;
    let total_checked_in = events.checked_in + room_only.checked_in;
    let total_rooms_needed = total_confirmed.rooms.saturating_add(total_checked_in.rooms);

    let available = available_rooms(config, active_maintenance);
    let balance = available - i64::from(total_rooms_needed);
    let deficit = clamp_to_u32(-balance);
    let surplus = clamp_to_u32(balance);

    DayLedger {
        date,
        event_confirmed: events.confirmed,
        event_checked_in: events.checked_in,
        room_only_confirmed: room_only.confirmed,
        room_only_checked_in: room_only.checked_in,
        total_confirmed,
        total_checked_in,
        total_rooms_needed,
        active_maintenance,
        available_rooms: available,
        deficit,
        surplus,
        needs_outsourcing: deficit > 0,
        occupancy_rate: occupancy_rate(total_rooms_needed, available),
    }
}

/// Percentage of available rooms needed, capped at 100; zero with no rooms to sell.
pub fn occupancy_rate(rooms_needed: u32, available_rooms: i64) -> Decimal {
    if available_rooms <= 0 {
        return Decimal::ZERO;
    }
    let rate = Decimal::from(rooms_needed) * Decimal::ONE_HUNDRED / Decimal::from(available_rooms);
    rate.min(Decimal::ONE_HUNDRED)
}

fn clamp_to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
