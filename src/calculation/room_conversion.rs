//! Headcount to room conversion.

use crate::models::ProgramType;

/// Converts a day's headcount into rooms required.
///
/// Residential programmes need one room per attendee. Non-residential
/// programmes only hold facilitator rooms, one per `pax_per_room`
/// attendees rounded up. A ratio of zero is treated as one.
///
/// # Examples
///
/// ```
/// use hotel_ops_engine::calculation::rooms_for_pax;
/// use hotel_ops_engine::models::ProgramType;
///
/// assert_eq!(rooms_for_pax(10, ProgramType::Residential, 4), 10);
/// assert_eq!(rooms_for_pax(10, ProgramType::NonResidential, 4), 3);
/// ```
pub fn rooms_for_pax(pax: u32, program_type: ProgramType, pax_per_room: u32) -> u32 {
    match program_type {
        ProgramType::Residential => pax,
        ProgramType::NonResidential => pax.div_ceil(pax_per_room.max(1)),
    }
}
