use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CompanySettings, DateRange, MaintenanceHold, MultiDayBooking, SingleDayBooking, StaffRecord,
};
use crate::repository::dataset::{ForecastInputs, HotelDataset};
use crate::repository::traits::{BookingRepository, SettingsRepository, StaffRepository};

const STORE_NAME: &str = "memory";

/// Repository held entirely in process memory.
#[derive(Debug)]
pub struct InMemoryRepository {
    data: RwLock<HotelDataset>,
}

impl InMemoryRepository {
    /// Wraps an existing dataset.
    pub fn new(data: HotelDataset) -> Self {
        InMemoryRepository {
            data: RwLock::new(data),
        }
    }

    /// An empty repository carrying only `settings`.
    pub fn with_settings(settings: CompanySettings) -> Self {
        Self::new(HotelDataset::with_settings(settings))
    }

    /// Appends an event booking.
    pub fn add_multi_day_booking(&self, booking: MultiDayBooking) -> EngineResult<()> {
        self.write()?.multi_day_bookings.push(booking);
        Ok(())
    }

    /// Appends a room-only booking.
    pub fn add_single_day_booking(&self, booking: SingleDayBooking) -> EngineResult<()> {
        self.write()?.single_day_bookings.push(booking);
        Ok(())
    }

    /// Appends a maintenance hold.
    pub fn add_maintenance_hold(&self, hold: MaintenanceHold) -> EngineResult<()> {
        self.write()?.maintenance_holds.push(hold);
        Ok(())
    }

    /// Appends a staff record.
    pub fn add_staff(&self, staff: StaffRecord) -> EngineResult<()> {
        self.write()?.staff.push(staff);
        Ok(())
    }

    /// A copy of everything held.
    pub fn snapshot(&self) -> EngineResult<HotelDataset> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> EngineResult<RwLockReadGuard<'_, HotelDataset>> {
        self.data.read().map_err(|_| poisoned())
    }

    fn write(&self) -> EngineResult<RwLockWriteGuard<'_, HotelDataset>> {
        self.data.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> EngineError {
    EngineError::Storage {
        path: STORE_NAME.to_string(),
        message: "lock poisoned by a panicked writer".to_string(),
    }
}

impl BookingRepository for InMemoryRepository {
    fn list_multi_day_bookings_in_range(
        &self,
        range: &DateRange,
    ) -> EngineResult<Vec<MultiDayBooking>> {
        Ok(self.read()?.multi_day_in_range(range))
    }

    fn list_single_day_bookings_in_range(
        &self,
        range: &DateRange,
    ) -> EngineResult<Vec<SingleDayBooking>> {
        Ok(self.read()?.single_day_in_range(range))
    }

    fn list_maintenance_holds_in_range(
        &self,
        range: &DateRange,
    ) -> EngineResult<Vec<MaintenanceHold>> {
        Ok(self.read()?.holds_in_range(range))
    }

    fn load_forecast_inputs(&self, range: &DateRange) -> EngineResult<ForecastInputs> {
        Ok(self.read()?.forecast_inputs(range))
    }
}

impl StaffRepository for InMemoryRepository {
    fn load_staff_roster(&self) -> EngineResult<Vec<StaffRecord>> {
        Ok(self.read()?.staff.clone())
    }
}

impl SettingsRepository for InMemoryRepository {
    fn load_settings(&self) -> EngineResult<CompanySettings> {
        Ok(self.read()?.settings.clone())
    }

    fn save_settings(&self, settings: &CompanySettings) -> EngineResult<()> {
        self.write()?.settings = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ApprovalStatus, BookingStatus, HotelCapacityConfig, MaintenanceStatus, ProgramType,
    };
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn settings() -> CompanySettings {
        CompanySettings {
            company_name: "Coastal Palm Hotel".to_string(),
            hotel: HotelCapacityConfig::new(50, 2),
        }
    }

    fn create_event(id: &str, start: &str, end: &str) -> MultiDayBooking {
        MultiDayBooking {
            id: id.to_string(),
            name: None,
            start_date: make_date(start),
            end_date: make_date(end),
            daily_pax: vec![10],
            booking_status: BookingStatus::Confirmed,
            status: ApprovalStatus::Confirmed,
            program_type: ProgramType::Residential,
        }
    }

    fn range(start: &str, end: &str) -> DateRange {
        DateRange {
            start: make_date(start),
            end: make_date(end),
        }
    }

    #[test]
    fn test_lists_only_overlapping_events() {
        let repo = InMemoryRepository::with_settings(settings());
        repo.add_multi_day_booking(create_event("evt_001", "2024-07-28", "2024-08-01")).unwrap();
        repo.add_multi_day_booking(create_event("evt_002", "2024-08-10", "2024-08-12")).unwrap();
        repo.add_multi_day_booking(create_event("evt_003", "2024-08-03", "2024-08-03")).unwrap();

        let found = repo
            .list_multi_day_bookings_in_range(&range("2024-08-01", "2024-08-05"))
            .unwrap();

        let ids: Vec<&str> = found.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["evt_001", "evt_003"]);
    }

    #[test]
    fn test_single_day_bookings_keep_stored_order() {
        let repo = InMemoryRepository::with_settings(settings());
        for (pax, date) in [(1, "2024-08-02"), (2, "2024-08-09"), (3, "2024-08-02")] {
            repo.add_single_day_booking(SingleDayBooking {
                date: make_date(date),
                pax,
                rooms: 1,
                booking_status: BookingStatus::Confirmed,
            })
            .unwrap();
        }

        let found = repo
            .list_single_day_bookings_in_range(&range("2024-08-01", "2024-08-05"))
            .unwrap();

        let pax: Vec<u32> = found.iter().map(|b| b.pax).collect();
        assert_eq!(pax, vec![1, 3]);
    }

    #[test]
    fn test_holds_use_effective_end() {
        let repo = InMemoryRepository::with_settings(settings());
        repo.add_maintenance_hold(MaintenanceHold {
            id: "mnt_001".to_string(),
            room: Some("104".to_string()),
            start_date: make_date("2024-07-25"),
            estimated_end_date: make_date("2024-07-28"),
            actual_end_date: Some(make_date("2024-08-02")),
            status: MaintenanceStatus::InProgress,
        })
        .unwrap();

        let found = repo
            .list_maintenance_holds_in_range(&range("2024-08-01", "2024-08-05"))
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_load_forecast_inputs_matches_individual_queries() {
        let repo = InMemoryRepository::with_settings(settings());
        repo.add_multi_day_booking(create_event("evt_001", "2024-08-01", "2024-08-02"))
            .unwrap();
        repo.add_multi_day_booking(create_event("evt_002", "2024-09-01", "2024-09-02"))
            .unwrap();
        repo.add_single_day_booking(SingleDayBooking {
            date: make_date("2024-08-03"),
            pax: 2,
            rooms: 1,
            booking_status: BookingStatus::CheckedIn,
        })
        .unwrap();

        let window = range("2024-08-01", "2024-08-05");
        let inputs = repo.load_forecast_inputs(&window).unwrap();

        assert_eq!(inputs.hotel, settings().hotel);
        assert_eq!(
            inputs.multi_day_bookings,
            repo.list_multi_day_bookings_in_range(&window).unwrap()
        );
        assert_eq!(
            inputs.single_day_bookings,
            repo.list_single_day_bookings_in_range(&window).unwrap()
        );
        assert!(inputs.maintenance_holds.is_empty());
    }

    #[test]
    fn test_settings_round_trip() {
        let repo = InMemoryRepository::with_settings(settings());

        let mut updated = repo.load_settings().unwrap();
        updated.hotel.total_rooms = 64;
        repo.save_settings(&updated).unwrap();

        assert_eq!(repo.load_settings().unwrap().hotel.total_rooms, 64);
    }

    #[test]
    fn test_staff_roster() {
        let repo = InMemoryRepository::with_settings(settings());
        repo.add_staff(StaffRecord {
            id: "stf_001".to_string(),
            name: "Akosua Darko".to_string(),
            basic_salary: Decimal::new(1200, 0),
            allowance: Decimal::ZERO,
            other_benefits: vec![],
            enrolled_ssnit: true,
            enrolled_tier2: true,
            enrolled_tier3: false,
        })
        .unwrap();

        let roster = repo.load_staff_roster().unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "stf_001");
        assert_eq!(repo.snapshot().unwrap().staff.len(), 1);
    }
}
