//! Room demand from events and room-only guests.
//!
//! Demand is split into two buckets: confirmed (committed but not yet
//! arrived) and checked in (in house). Anything else, pending enquiries and
//! cancellations included, is not demand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ApprovalStatus, BookingStatus, MultiDayBooking, PaxRooms, SingleDayBooking};

use super::room_conversion::rooms_for_pax;

/// Which demand bucket a booking feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemandBucket {
    /// Committed, not yet arrived.
    Confirmed,
    /// In house.
    CheckedIn,
}

/// Demand for one day split by bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketedDemand {
    /// Confirmed pax and rooms.
    pub confirmed: PaxRooms,
    /// Checked-in pax and rooms.
    pub checked_in: PaxRooms,
}

impl BucketedDemand {
    /// Adds `amount` to the given bucket.
    pub fn add(&mut self, bucket: DemandBucket, amount: PaxRooms) {
        match bucket {
            DemandBucket::Confirmed => self.confirmed.add(amount),
            DemandBucket::CheckedIn => self.checked_in.add(amount),
        }
    }
}

/// Classifies an event booking.
///
/// Checked-in events always count. A confirmed event only counts when the
/// sales approval flag also reads CONFIRMED; both must agree.
///
/// # Examples
///
/// ```
/// use hotel_ops_engine::calculation::{DemandBucket, event_bucket};
/// use hotel_ops_engine::models::{ApprovalStatus, BookingStatus};
///
/// assert_eq!(
///     event_bucket(BookingStatus::Confirmed, ApprovalStatus::Confirmed),
///     Some(DemandBucket::Confirmed)
/// );
/// assert_eq!(event_bucket(BookingStatus::Pending, ApprovalStatus::Confirmed), None);
/// ```
pub fn event_bucket(booking_status: BookingStatus, status: ApprovalStatus) -> Option<DemandBucket> {
    match (booking_status, status) {
        (BookingStatus::CheckedIn, _) => Some(DemandBucket::CheckedIn),
        (BookingStatus::Confirmed, ApprovalStatus::Confirmed) => Some(DemandBucket::Confirmed),
        _ => None,
    }
}

/// Classifies a room-only booking.
pub fn room_only_bucket(booking_status: BookingStatus) -> Option<DemandBucket> {
    match booking_status {
        BookingStatus::Confirmed => Some(DemandBucket::Confirmed),
        BookingStatus::CheckedIn => Some(DemandBucket::CheckedIn),
        BookingStatus::Pending | BookingStatus::Cancelled => None,
    }
}

/// Sums event demand on `date` across `bookings`.
///
/// Each booking covering `date` contributes its headcount for that day
/// offset, converted to rooms according to its programme type.
pub fn event_demand_on<'a, I>(date: NaiveDate, bookings: I, pax_per_room: u32) -> BucketedDemand
where
    I: IntoIterator<Item = &'a MultiDayBooking>,
{
    let mut demand = BucketedDemand::default();

    for booking in bookings {
        if !booking.covers(date) {
            continue;
        }
        let Some(bucket) = event_bucket(booking.booking_status, booking.status) else {
            continue;
        };
        let pax = booking.pax_on(date);
        demand.add(
            bucket,
            PaxRooms {
                pax,
                rooms: rooms_for_pax(pax, booking.program_type, pax_per_room),
            },
        );
    }

    demand
}

/// Demand from the room-only booking for a day, if there is one.
pub fn room_only_demand(booking: Option<&SingleDayBooking>) -> BucketedDemand {
    let mut demand = BucketedDemand::default();

    if let Some(booking) = booking {
        if let Some(bucket) = room_only_bucket(booking.booking_status) {
            demand.add(
                bucket,
                PaxRooms {
                    pax: booking.pax,
                    rooms: booking.rooms,
                },
            );
        }
    }

    demand
}

/// Demand from room-only guests on `date`.
///
/// Only the first booking dated `date` is used.
pub fn room_only_demand_on(date: NaiveDate, bookings: &[SingleDayBooking]) -> BucketedDemand {
    room_only_demand(bookings.iter().find(|b| b.date == date))
}
