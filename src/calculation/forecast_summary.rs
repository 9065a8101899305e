//! Roll-up of a capacity forecast.

use rust_decimal::Decimal;

use crate::models::{DayLedger, ForecastSummary};

/// Summarises a forecast for the operations report header.
///
/// The peak deficit date is the first day on which the largest deficit
/// occurs. An empty forecast gives an all-zero summary.
pub fn summarize_forecast(days: &[DayLedger]) -> ForecastSummary {
    let mut days_needing_outsourcing = 0u32;
    let mut peak_deficit = 0u32;
    let mut peak_deficit_date = None;
    let mut total_room_nights_needed = 0u64;
    let mut total_surplus_room_nights = 0u64;
    let mut occupancy_sum = Decimal::ZERO;

    for day in days {
        if day.needs_outsourcing {
            days_needing_outsourcing += 1;
        }
        if day.deficit > peak_deficit {
            peak_deficit = day.deficit;
            peak_deficit_date = Some(day.date);
        }
        total_room_nights_needed += u64::from(day.total_rooms_needed);
        total_surplus_room_nights += u64::from(day.surplus);
        occupancy_sum += day.occupancy_rate;
    }

    let average_occupancy_rate = if days.is_empty() {
        Decimal::ZERO
    } else {
        occupancy_sum / Decimal::from(days.len() as u64)
    };

    ForecastSummary {
        days: days.len() as u32,
        days_needing_outsourcing,
        peak_deficit,
        peak_deficit_date,
        total_room_nights_needed,
        total_surplus_room_nights,
        average_occupancy_rate,
    }
}
