//! Request types for the Hotel Operations Engine API.
//!
//! This module defines the JSON bodies and query strings accepted by the
//! capacity and payroll endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    DateRange, HotelCapacityConfig, MaintenanceHold, MultiDayBooking, SingleDayBooking,
    StaffRecord,
};

/// Request body for `POST /capacity/forecast`.
///
/// Carries every input of the forecast explicitly. When `hotel` is omitted
/// the inventory from configuration is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// The days to forecast, both ends inclusive.
    pub range: DateRange,
    /// Event bookings.
    #[serde(default)]
    pub multi_day_bookings: Vec<MultiDayBooking>,
    /// Room-only bookings.
    #[serde(default)]
    pub single_day_bookings: Vec<SingleDayBooking>,
    /// Maintenance jobs.
    #[serde(default)]
    pub maintenance_holds: Vec<MaintenanceHold>,
    /// Inventory override.
    #[serde(default)]
    pub hotel: Option<HotelCapacityConfig>,
}

/// Query string for `GET /capacity/forecast`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastQuery {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

/// Request body for `POST /payroll/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The staff member to pay.
    pub staff: StaffRecord,
    /// Selects the tax schedule; today when omitted.
    #[serde(default)]
    pub pay_date: Option<NaiveDate>,
}

/// Request body for `POST /payroll/run`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRunRequest {
    /// Everyone on this run.
    pub staff: Vec<StaffRecord>,
    /// Selects the tax schedule; today when omitted.
    #[serde(default)]
    pub pay_date: Option<NaiveDate>,
}

/// Query string for `GET /payroll/roster`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterQuery {
    /// Selects the tax schedule; today when omitted.
    #[serde(default)]
    pub pay_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

    #[test]
    fn test_forecast_request_defaults_empty_lists() {
        let json = r#"{"range": {"start": "2024-08-05", "end": "2024-08-07"}}"#;

        let request: ForecastRequest = serde_json::from_str(json).unwrap();

        assert!(request.multi_day_bookings.is_empty());
        assert!(request.single_day_bookings.is_empty());
        assert!(request.maintenance_holds.is_empty());
        assert!(request.hotel.is_none());
    }

    #[test]
    fn test_forecast_request_with_room_only() {
        let json = r#"{
            "range": {"start": "2024-08-05", "end": "2024-08-07"},
            "single_day_bookings": [
                {"date": "2024-08-06", "pax": 2, "rooms": 1, "booking_status": "confirmed"}
            ],
            "hotel": {"total_rooms": 30, "permanently_unavailable": 1}
        }"#;

        let request: ForecastRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.single_day_bookings[0].booking_status, BookingStatus::Confirmed);
        assert_eq!(request.hotel.unwrap().total_rooms, 30);
    }

    #[test]
    fn test_payroll_request_pay_date_optional() {
        let json = r#"{"staff": {"id": "stf_001", "basic_salary": "1000"}}"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.staff.id, "stf_001");
        assert!(request.pay_date.is_none());
        assert!(!request.staff.enrolled_ssnit);
    }

    #[test]
    fn test_payroll_request_missing_staff_fails() {
        let json = r#"{"pay_date": "2024-08-31"}"#;
        let result: Result<PayrollRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
