//! Storage interfaces for bookings, staff and company settings.
//!
//! The calculators never touch storage. Callers load inputs through these
//! traits and pass them in explicitly.

mod dataset;
mod file;
mod memory;
mod traits;

pub use dataset::{ForecastInputs, HotelDataset};
pub use file::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use traits::{BookingRepository, SettingsRepository, StaffRepository};
