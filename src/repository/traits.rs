use crate::error::EngineResult;
use crate::models::{
    CompanySettings, DateRange, MaintenanceHold, MultiDayBooking, SingleDayBooking, StaffRecord,
};
use crate::repository::dataset::ForecastInputs;

/// Source of the capacity forecaster's inputs.
///
/// Each query returns the records that share at least one day with `range`,
/// in stored order.
pub trait BookingRepository: Send + Sync {
    /// Event bookings overlapping `range`.
    fn list_multi_day_bookings_in_range(
        &self,
        range: &DateRange,
    ) -> EngineResult<Vec<MultiDayBooking>>;

    /// Room-only bookings dated inside `range`.
    fn list_single_day_bookings_in_range(
        &self,
        range: &DateRange,
    ) -> EngineResult<Vec<SingleDayBooking>>;

    /// Maintenance holds overlapping `range`, whatever their status.
    fn list_maintenance_holds_in_range(
        &self,
        range: &DateRange,
    ) -> EngineResult<Vec<MaintenanceHold>>;

    /// Room inventory plus the three lists above, taken from a single read
    /// of the store so a concurrent save cannot split them.
    fn load_forecast_inputs(&self, range: &DateRange) -> EngineResult<ForecastInputs>;
}

/// Source of the payroll roster.
pub trait StaffRepository: Send + Sync {
    /// Every staff record on file.
    fn load_staff_roster(&self) -> EngineResult<Vec<StaffRecord>>;
}

/// Company settings store.
pub trait SettingsRepository: Send + Sync {
    /// Current settings.
    fn load_settings(&self) -> EngineResult<CompanySettings>;
    /// Replaces the stored settings.
    fn save_settings(&self, settings: &CompanySettings) -> EngineResult<()>;
}
