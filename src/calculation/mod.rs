//! Calculation logic for the Hotel Operations Engine.
//!
//! Two independent groups of pure functions live here. The capacity side
//! converts headcount to rooms, buckets demand by booking status, counts
//! maintenance holds, and nets demand against supply for each day of a
//! forecast window. The payroll side totals gross income, applies pension
//! contributions and progressive PAYE, and produces net pay.

mod demand;
mod forecast;
mod forecast_summary;
mod gross_income;
mod income_tax;
mod maintenance;
mod payroll;
mod room_conversion;
mod statutory_deductions;

pub use demand::{
    BucketedDemand, DemandBucket, event_bucket, event_demand_on, room_only_bucket,
    room_only_demand, room_only_demand_on,
};
pub use forecast::{day_ledger, forecast, occupancy_rate};
pub use forecast_summary::summarize_forecast;
pub use gross_income::{GrossIncomeResult, calculate_gross_income, gross_income};
pub use income_tax::{
    BandApplication, IncomeTaxResult, apply_tax_bands, calculate_income_tax, income_tax,
};
pub use maintenance::{active_maintenance_count, available_rooms};
pub use payroll::{calculate_payroll, compute_payroll, compute_payroll_with, summarize_payroll};
pub use room_conversion::rooms_for_pax;
pub use statutory_deductions::{
    StatutoryDeductions, StatutoryDeductionsResult, TaxableIncomeResult,
    calculate_statutory_deductions, calculate_taxable_income, statutory_deductions,
    taxable_income,
};
