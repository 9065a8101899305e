//! Core data models for the Hotel Operations Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod booking;
mod day_ledger;
mod hotel;
mod maintenance;
mod payroll_result;
mod staff;

pub use booking::{ApprovalStatus, BookingStatus, MultiDayBooking, ProgramType, SingleDayBooking};
pub use day_ledger::{DayLedger, ForecastSummary, PaxRooms};
pub use hotel::{
    CompanySettings, DEFAULT_NON_RESIDENTIAL_PAX_PER_ROOM, DateRange, HotelCapacityConfig,
};
pub use maintenance::{MaintenanceHold, MaintenanceStatus};
pub use payroll_result::{
    AuditStep, AuditTrace, AuditWarning, PayrollCalculation, PayrollLine, PayrollTotals,
};
pub use staff::{OtherBenefit, StaffRecord};
