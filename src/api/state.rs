//! Application state for the Hotel Operations Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::models::CompanySettings;
use crate::repository::{
    BookingRepository, InMemoryRepository, SettingsRepository, StaffRepository,
};

/// Shared application state.
///
/// Holds the loaded configuration and the stores the read endpoints draw
/// from. The three repository handles usually point at the same store.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    bookings: Arc<dyn BookingRepository>,
    staff: Arc<dyn StaffRepository>,
    settings: Arc<dyn SettingsRepository>,
}

impl AppState {
    /// Creates state backed by `repository` for bookings, staff and settings.
    pub fn new<R>(config: ConfigLoader, repository: Arc<R>) -> Self
    where
        R: BookingRepository + StaffRepository + SettingsRepository + 'static,
    {
        Self {
            config: Arc::new(config),
            bookings: repository.clone(),
            staff: repository.clone(),
            settings: repository,
        }
    }

    /// Creates state over an empty in-memory store seeded from configuration.
    pub fn in_memory(config: ConfigLoader) -> Self {
        let settings = CompanySettings {
            company_name: config.metadata().name.clone(),
            hotel: config.hotel().clone(),
        };
        Self::new(config, Arc::new(InMemoryRepository::with_settings(settings)))
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the booking store.
    pub fn bookings(&self) -> &dyn BookingRepository {
        self.bookings.as_ref()
    }

    /// Returns the staff store.
    pub fn staff(&self) -> &dyn StaffRepository {
        self.staff.as_ref()
    }

    /// Returns the settings store.
    pub fn settings(&self) -> &dyn SettingsRepository {
        self.settings.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_in_memory_state_seeds_settings_from_config() {
        let config = ConfigLoader::load("./config").expect("Failed to load config");
        let state = AppState::in_memory(config);

        let settings = state.settings().load_settings().unwrap();
        assert_eq!(settings.company_name, "Coastal Palm Hotel");
        assert_eq!(settings.hotel.total_rooms, 50);
        assert!(state.staff().load_staff_roster().unwrap().is_empty());
    }
}
