use serde::{Deserialize, Serialize};

use crate::models::{
    CompanySettings, DateRange, HotelCapacityConfig, MaintenanceHold, MultiDayBooking,
    SingleDayBooking, StaffRecord,
};

/// Everything the engine keeps on file, as one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelDataset {
    /// Company name and room inventory.
    pub settings: CompanySettings,
    /// Event bookings.
    #[serde(default)]
    pub multi_day_bookings: Vec<MultiDayBooking>,
    /// Room-only bookings.
    #[serde(default)]
    pub single_day_bookings: Vec<SingleDayBooking>,
    /// Maintenance jobs.
    #[serde(default)]
    pub maintenance_holds: Vec<MaintenanceHold>,
    /// Payroll roster.
    #[serde(default)]
    pub staff: Vec<StaffRecord>,
}

/// Inventory and bookings for one forecast window, read together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastInputs {
    /// Room inventory from the stored settings.
    pub hotel: HotelCapacityConfig,
    /// Event bookings overlapping the window.
    pub multi_day_bookings: Vec<MultiDayBooking>,
    /// Room-only bookings inside the window.
    pub single_day_bookings: Vec<SingleDayBooking>,
    /// Maintenance holds overlapping the window.
    pub maintenance_holds: Vec<MaintenanceHold>,
}

impl HotelDataset {
    /// An otherwise empty dataset with the given settings.
    pub fn with_settings(settings: CompanySettings) -> Self {
        Self {
            settings,
            multi_day_bookings: Vec::new(),
            single_day_bookings: Vec::new(),
            maintenance_holds: Vec::new(),
            staff: Vec::new(),
        }
    }

    pub(crate) fn multi_day_in_range(&self, range: &DateRange) -> Vec<MultiDayBooking> {
        self.multi_day_bookings
            .iter()
            .filter(|b| range.overlaps(b.start_date, b.end_date))
            .cloned()
            .collect()
    }

    pub(crate) fn single_day_in_range(&self, range: &DateRange) -> Vec<SingleDayBooking> {
        self.single_day_bookings
            .iter()
            .filter(|b| range.contains(b.date))
            .cloned()
            .collect()
    }

    pub(crate) fn holds_in_range(&self, range: &DateRange) -> Vec<MaintenanceHold> {
        self.maintenance_holds
            .iter()
            .filter(|h| range.overlaps(h.start_date, h.effective_end_date()))
            .cloned()
            .collect()
    }

    pub(crate) fn forecast_inputs(&self, range: &DateRange) -> ForecastInputs {
        ForecastInputs {
            hotel: self.settings.hotel.clone(),
            multi_day_bookings: self.multi_day_in_range(range),
            single_day_bookings: self.single_day_in_range(range),
            maintenance_holds: self.holds_in_range(range),
        }
    }
}
